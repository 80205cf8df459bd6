use crate::dom::{DomNode, DomTree};
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

/// Tags whose text children are kept verbatim (never re-escaped)
const RAW_TEXT: &[&str] = &["script", "style"];

/// Parse a host HTML document into a DomTree
pub fn parse_html(html: &str, url: &str) -> DomTree {
    let document = Html::parse_document(html);

    // Extract <title>
    let title = scraper::Selector::parse("title")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();

    let mut children = Vec::new();
    for child_ref in document.tree.root().children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(el));
                }
            }
            Node::Comment(c) => children.push(DomNode::comment(c.comment.to_string())),
            _ => {}
        }
    }
    let root = DomNode::document(children);

    DomTree {
        root,
        url: url.to_string(),
        title: title.trim().to_string(),
    }
}

fn convert_element(el: ElementRef<'_>) -> DomNode {
    let tag = el.value().name.local.as_ref().to_string();
    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    if RAW_TEXT.contains(&tag.as_str()) {
        let body: String = el.text().collect();
        let children = if body.is_empty() {
            Vec::new()
        } else {
            vec![DomNode::raw(body)]
        };
        return DomNode::element(tag, attributes, children);
    }

    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => children.push(DomNode::text(t.text.to_string())),
            Node::Comment(c) => children.push(DomNode::comment(c.comment.to_string())),
            _ => {}
        }
    }

    DomNode::element(tag, attributes, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_host_page() {
        let html = r#"
        <html>
            <head><title>Project Library</title></head>
            <body>
                <div class="content">
                    <div id="category-list"></div>
                    <div id="projects-panel"></div>
                </div>
            </body>
        </html>
        "#;

        let tree = parse_html(html, "https://example.com/resources.html");
        assert_eq!(tree.title, "Project Library");
        assert!(tree.has_id("category-list"));
        assert!(tree.has_id("projects-panel"));
        assert!(!tree.has_id("toc-list"));
    }

    #[test]
    fn keeps_script_body_verbatim() {
        let html = r#"
        <html><body>
            <p>Visible</p>
            <script>if (a < b && c) { go(); }</script>
        </body></html>
        "#;

        let tree = parse_html(html, "file:///tmp/index.html");
        let text = tree.root.collect_text();
        assert!(text.contains("Visible"));
        assert!(!text.contains("go()"));
        assert!(tree.to_html().contains("if (a < b && c) { go(); }"));
    }

    #[test]
    fn keeps_inline_spacing_and_comments() {
        let html = "<!-- generated --><html><head></head><body>\
                    <p><b>Soil</b> <i>Moisture</i></p><!-- keep --></body></html>";

        let tree = parse_html(html, "file:///tmp/index.html");
        let out = tree.to_html();
        assert!(out.contains("<p><b>Soil</b> <i>Moisture</i></p>"), "{}", out);
        assert!(out.contains("<!-- keep -->"), "{}", out);
        assert!(out.contains("<!-- generated -->"), "{}", out);
        assert_eq!(tree.root.collect_text(), "Soil Moisture");
    }

    #[test]
    fn reparsing_output_is_stable() {
        let html = r#"<html><head><title>T</title></head>
<body>
  <ul id="toc-list">
    <li>One</li>
  </ul>
  <!-- footer -->
</body></html>"#;

        let first = parse_html(html, "file:///tmp/index.html").to_html();
        let second = parse_html(&first, "file:///tmp/index.html").to_html();
        assert_eq!(first, second);
        assert!(first.contains("<ul id=\"toc-list\">\n    <li>One</li>\n  </ul>"));
    }
}

pub mod parser;
pub mod serialize;
pub mod css;

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Document,
    Element,
    Text,
    /// Verbatim text inside `<script>` / `<style>`; never escaped on output.
    Raw,
    Comment,
}

/// Internal DOM node representation.
///
/// Host documents are parsed into this tree, gallery strategies render into
/// it, and interactions mutate it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DomNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: Vec<DomNode>,
    pub node_type: NodeType,
}

impl DomNode {
    pub fn document(children: Vec<DomNode>) -> Self {
        Self {
            tag: "#document".into(),
            attributes: HashMap::new(),
            text: String::new(),
            children,
            node_type: NodeType::Document,
        }
    }

    pub fn element(
        tag: impl Into<String>,
        attrs: HashMap<String, String>,
        children: Vec<DomNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: HashMap::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    pub fn raw(content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Raw,
            ..Self::text(content)
        }
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Comment,
            ..Self::text(content)
        }
    }

    /// Empty element, for chaining with the `with_*` builders.
    pub fn el(tag: impl Into<String>) -> Self {
        Self::element(tag, HashMap::new(), Vec::new())
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DomNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn with_text(self, content: impl Into<String>) -> Self {
        self.with_child(DomNode::text(content))
    }

    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if self.node_type == NodeType::Text && !self.text.trim().is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = match self.attr("class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{} {}", existing.trim(), class)
            }
            _ => class.to_string(),
        };
        self.set_attr("class", joined);
    }

    pub fn remove_class(&mut self, class: &str) {
        let Some(existing) = self.attr("class") else {
            return;
        };
        let kept: Vec<&str> = existing.split_whitespace().filter(|c| *c != class).collect();
        if kept.is_empty() {
            self.remove_attr("class");
        } else {
            let joined = kept.join(" ");
            self.set_attr("class", joined);
        }
    }

    /// Add or remove `class` depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// The boolean `hidden` attribute.
    pub fn is_hidden(&self) -> bool {
        self.attributes.contains_key("hidden")
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.set_attr("hidden", "");
        } else {
            self.remove_attr("hidden");
        }
    }

    /// Depth-first search for the first node matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&DomNode) -> bool) -> Option<&DomNode> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(pred))
    }

    pub fn find_mut(&mut self, pred: &dyn Fn(&DomNode) -> bool) -> Option<&mut DomNode> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(pred))
    }

    /// Collect every node matching `pred`, in document order.
    pub fn find_all<'a>(&'a self, pred: &dyn Fn(&DomNode) -> bool, out: &mut Vec<&'a DomNode>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.find_all(pred, out);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        self.find(&|n| n.is_element() && n.id() == Some(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DomNode> {
        self.find_mut(&|n| n.is_element() && n.id() == Some(id))
    }

    /// All elements carrying `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<&DomNode> {
        let mut out = Vec::new();
        self.find_all(&|n| n.is_element() && n.has_class(class), &mut out);
        out
    }

    /// Replace all children, like assigning `innerHTML`.
    pub fn replace_children(&mut self, children: Vec<DomNode>) {
        self.children = children;
    }
}

/// Parsed DOM tree with metadata
#[derive(Debug, Clone)]
pub struct DomTree {
    pub root: DomNode,
    pub url: String,
    pub title: String,
}

impl DomTree {
    pub fn find_by_id(&self, id: &str) -> Option<&DomNode> {
        self.root.find_by_id(id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut DomNode> {
        self.root.find_by_id_mut(id)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    pub fn to_html(&self) -> String {
        serialize::to_html(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_list_edits() {
        let mut node = DomNode::el("button").with_class("project-box");
        node.add_class("is-active");
        node.add_class("is-active");
        assert_eq!(node.attr("class"), Some("project-box is-active"));

        node.remove_class("project-box");
        assert_eq!(node.attr("class"), Some("is-active"));
        node.set_class("is-active", false);
        assert!(node.attr("class").is_none());
    }

    #[test]
    fn find_by_id_descends() {
        let tree = DomNode::document(vec![DomNode::el("body").with_child(
            DomNode::el("div")
                .with_attr("id", "outer")
                .with_child(DomNode::el("ul").with_attr("id", "toc-list")),
        )]);
        assert_eq!(tree.find_by_id("toc-list").map(|n| n.tag.as_str()), Some("ul"));
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn collect_text_skips_raw_and_comments() {
        let node = DomNode::el("div")
            .with_text("Visible")
            .with_child(DomNode::comment(" build 42 "))
            .with_child(DomNode::el("script").with_child(DomNode::raw("var x = 1;")));
        assert_eq!(node.collect_text(), "Visible");
    }

    #[test]
    fn hidden_attribute_toggles() {
        let mut panel = DomNode::el("div");
        assert!(!panel.is_hidden());
        panel.set_hidden(true);
        assert!(panel.is_hidden());
        panel.set_hidden(false);
        assert!(!panel.is_hidden());
    }
}

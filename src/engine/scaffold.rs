//! Stock host page for when no page is given: a `.content` wrapper with a
//! ToC list and the mounts for the requested layout.

use crate::config::{LayoutPreference, MountIds};
use crate::dom::{DomNode, DomTree};

pub fn scaffold_document(layout: LayoutPreference, mounts: &MountIds, title: &str) -> String {
    let mut content = DomNode::el("div")
        .with_class("content")
        .with_child(DomNode::el("h1").with_text(title))
        .with_child(
            DomNode::el("nav")
                .with_class("toc")
                .with_child(DomNode::el("ul").with_attr("id", mounts.toc.as_str())),
        );
    content.children.extend(layout_mounts(layout, mounts));

    let head = DomNode::el("head")
        .with_child(DomNode::el("meta").with_attr("charset", "utf-8"))
        .with_child(DomNode::el("title").with_text(title));
    let html = DomNode::el("html")
        .with_attr("lang", "en")
        .with_child(head)
        .with_child(DomNode::el("body").with_child(content));

    DomTree {
        root: DomNode::document(vec![html]),
        url: String::new(),
        title: title.to_string(),
    }
    .to_html()
}

fn mount(id: &str) -> DomNode {
    DomNode::el("div").with_attr("id", id)
}

fn layout_mounts(layout: LayoutPreference, mounts: &MountIds) -> Vec<DomNode> {
    match layout {
        LayoutPreference::Auto | LayoutPreference::TwoPane => vec![DomNode::el("div")
            .with_class("two-pane")
            .with_child(mount(&mounts.category_list))
            .with_child(mount(&mounts.projects_panel))],
        LayoutPreference::Grid => vec![mount(&mounts.grid)],
        LayoutPreference::Sections => vec![mount(&mounts.sections)],
        LayoutPreference::Carousel => vec![DomNode::el("div")
            .with_class("carousel")
            .with_child(mount(&mounts.carousel).with_class("carousel-track"))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GalleryConfig;
    use crate::dom::parser::parse_html;
    use crate::render::{select_strategy, LayoutStrategy};

    fn strategy_for(layout: LayoutPreference) -> Option<LayoutStrategy> {
        let cfg = GalleryConfig::default().with_layout(layout);
        let html = scaffold_document(layout, &cfg.mounts, "Projects");
        let tree = parse_html(&html, "file:///site/index.html");
        assert!(tree.has_id("toc-list"));
        select_strategy(&tree, &cfg).map(|plan| plan.strategy())
    }

    #[test]
    fn every_layout_finds_its_mounts() {
        assert_eq!(strategy_for(LayoutPreference::Auto), Some(LayoutStrategy::TwoPane));
        assert_eq!(strategy_for(LayoutPreference::TwoPane), Some(LayoutStrategy::TwoPane));
        assert_eq!(strategy_for(LayoutPreference::Grid), Some(LayoutStrategy::FlatGrid));
        assert_eq!(strategy_for(LayoutPreference::Sections), Some(LayoutStrategy::Sections));
        assert_eq!(strategy_for(LayoutPreference::Carousel), Some(LayoutStrategy::Carousel));
    }

    #[test]
    fn title_lands_in_head_and_heading() {
        let html = scaffold_document(LayoutPreference::Grid, &MountIds::default(), "Our Work");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Our Work</title>"));
        assert!(html.contains("<h1>Our Work</h1>"));
    }
}

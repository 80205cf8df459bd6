//! Carousel track: thumbnail cards for every project, opened in a new tab.

use crate::config::GalleryConfig;
use crate::dom::DomNode;
use crate::gallery::ProjectRecord;

pub fn carousel_card(record: &ProjectRecord, cfg: &GalleryConfig) -> DomNode {
    let title = record.display_title(&cfg.untitled_label);
    let mut link = DomNode::el("a")
        .with_class("card-link")
        .with_attr("href", record.href("#"))
        .with_attr("target", "_blank")
        .with_attr("rel", "noopener");

    if let Some(image) = record.image() {
        link.children.push(
            DomNode::el("div").with_class("thumb").with_child(
                DomNode::el("img")
                    .with_attr("src", image)
                    .with_attr("alt", title)
                    .with_attr("loading", "lazy"),
            ),
        );
    }
    link.children.push(DomNode::el("h3").with_class("title").with_text(title));
    if let Some(subtitle) = record.subtitle() {
        link.children.push(DomNode::el("div").with_class("meta").with_text(subtitle));
    }

    DomNode::el("div").with_class("project-card").with_child(link)
}

/// Track contents: one card per project, in list order.
pub fn render_carousel(records: &[ProjectRecord], cfg: &GalleryConfig) -> Vec<DomNode> {
    records.iter().map(|r| carousel_card(r, cfg)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::serialize::to_html;

    #[test]
    fn thumbnail_and_meta_are_optional() {
        let cfg = GalleryConfig::default();
        let bare = carousel_card(&ProjectRecord::new("Arm"), &cfg);
        assert_eq!(
            to_html(&bare),
            r##"<div class="project-card"><a class="card-link" href="#" rel="noopener" target="_blank"><h3 class="title">Arm</h3></a></div>"##
        );

        let full = carousel_card(
            &ProjectRecord::new("Drone")
                .with_image("img/drone.jpg")
                .with_subtitle("Aerial survey")
                .with_url("drone.html"),
            &cfg,
        );
        let img = full.find(&|n| n.tag == "img").unwrap();
        assert_eq!(img.attr("alt"), Some("Drone"));
        assert_eq!(img.attr("loading"), Some("lazy"));
        assert!(full.find(&|n| n.has_class("meta")).is_some());
    }

    #[test]
    fn one_card_per_project_in_list_order() {
        let records = vec![
            ProjectRecord::new("a").with_category("X"),
            ProjectRecord::new("b"),
            ProjectRecord::new("c").with_category("X"),
        ];
        let cfg = GalleryConfig::default();
        let titles: Vec<String> = render_carousel(&records, &cfg)
            .iter()
            .filter_map(|card| card.find(&|n| n.tag == "h3"))
            .map(|h| h.collect_text())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}

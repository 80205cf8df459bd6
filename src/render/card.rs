//! Card and placeholder markup shared by every layout.

use crate::config::GalleryConfig;
use crate::dom::css::{css_url, set_style_property};
use crate::dom::DomNode;
use crate::gallery::slug::{display_id, IdRegistry, PROJECT_FALLBACK_ID};
use crate::gallery::ProjectRecord;

/// Message shown for a category with no projects.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No projects listed yet.";

/// `<h3><i>{text}</i></h3>`, the heading used on every box.
pub fn box_heading(text: &str) -> DomNode {
    DomNode::el("h3").with_child(DomNode::el("i").with_text(text))
}

/// Reserve a display id for a record's card.
pub fn claim_card_id(record: &ProjectRecord, ids: &mut IdRegistry) -> String {
    ids.claim(&display_id(record.title.as_deref(), PROJECT_FALLBACK_ID))
}

/// A project card: a link box with title, subtitle and an optional
/// background image.
pub fn project_card(record: &ProjectRecord, id: &str, cfg: &GalleryConfig) -> DomNode {
    let mut card = DomNode::el("a")
        .with_attr("id", id)
        .with_class("project-box")
        .with_attr("href", record.href(&cfg.placeholder_href))
        .with_child(box_heading(record.display_title(&cfg.untitled_label)))
        .with_child(DomNode::el("p").with_text(record.subtitle().unwrap_or_default()));

    if let Some(image) = record.image() {
        set_style_property(&mut card, "background-image", &css_url(image));
    }
    card
}

/// Informational box in place of cards.
pub fn placeholder_card(heading: &str, message: &str) -> DomNode {
    DomNode::el("div")
        .with_class("project-box")
        .with_class("projects-empty")
        .with_child(box_heading(heading))
        .with_child(DomNode::el("p").with_text(message))
}

pub fn empty_category_card(category: &str) -> DomNode {
    placeholder_card(category, EMPTY_CATEGORY_MESSAGE)
}

/// Inline load-failure box.
pub fn error_card(message: &str) -> DomNode {
    DomNode::el("div")
        .with_class("project-box")
        .with_child(box_heading("Error"))
        .with_child(DomNode::el("p").with_text(message))
}

/// One category's cards in a `projects-row`, or the empty placeholder.
///
/// `card_ids` supplies pre-assigned ids; when it is shorter than `records`
/// the remaining ids are claimed from `ids`.
pub fn category_row(
    category: &str,
    records: &[ProjectRecord],
    card_ids: &[String],
    ids: &mut IdRegistry,
    cfg: &GalleryConfig,
) -> DomNode {
    if records.is_empty() {
        return empty_category_card(category);
    }
    let cards = records.iter().enumerate().map(|(i, record)| {
        let id = match card_ids.get(i) {
            Some(id) => id.clone(),
            None => claim_card_id(record, ids),
        };
        project_card(record, &id, cfg)
    });
    DomNode::el("div").with_class("projects-row").with_children(cards.collect::<Vec<_>>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::css::style_property;
    use crate::dom::serialize::to_html;

    #[test]
    fn card_uses_record_fields() {
        let cfg = GalleryConfig::default();
        let rec = ProjectRecord::new("Soil Probe")
            .with_subtitle("Moisture sensing")
            .with_url("soil.html")
            .with_image("img/soil.png");
        let card = project_card(&rec, "soil-probe", &cfg);
        assert_eq!(card.attr("href"), Some("soil.html"));
        assert_eq!(card.id(), Some("soil-probe"));
        assert_eq!(card.collect_text(), "Soil Probe Moisture sensing");
        assert_eq!(
            style_property(&card, "background-image").as_deref(),
            Some("url('img/soil.png')")
        );
    }

    #[test]
    fn card_falls_back_without_optional_fields() {
        let cfg = GalleryConfig::default();
        let card = project_card(&ProjectRecord::default(), "project", &cfg);
        assert_eq!(card.attr("href"), Some("project_pending.html"));
        assert_eq!(card.collect_text(), "Untitled");
        assert!(card.attr("style").is_none());
        assert_eq!(
            to_html(&card),
            r#"<a class="project-box" href="project_pending.html" id="project"><h3><i>Untitled</i></h3><p></p></a>"#
        );
    }

    #[test]
    fn empty_category_renders_placeholder_not_empty_row() {
        let cfg = GalleryConfig::default();
        let mut ids = IdRegistry::new();
        let row = category_row("Water", &[], &[], &mut ids, &cfg);
        assert!(row.has_class("projects-empty"));
        assert!(row.collect_text().contains("No projects listed yet."));
    }

    #[test]
    fn duplicate_titles_get_distinct_ids() {
        let cfg = GalleryConfig::default();
        let mut ids = IdRegistry::new();
        let records = vec![ProjectRecord::new("Field Kit"), ProjectRecord::new("Field Kit")];
        let row = category_row("AgTech", &records, &[], &mut ids, &cfg);
        let card_ids: Vec<_> = row.children.iter().filter_map(|c| c.id()).collect();
        assert_eq!(card_ids, vec!["field-kit", "field-kit-2"]);
    }
}

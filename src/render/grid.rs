//! Flat grid: every project as one collection of cards, no grouping UI.
//!
//! Cards follow the order of the loaded project list.

use std::collections::HashMap;

use crate::config::GalleryConfig;
use crate::dom::DomNode;
use crate::gallery::group::normalize_category;
use crate::gallery::{IdRegistry, ProjectRecord};

use super::card::{claim_card_id, placeholder_card, project_card, EMPTY_CATEGORY_MESSAGE};

/// Id assigned to one grid card, with the record's place in its category
/// group so ToC entries can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCard {
    pub category: String,
    pub index: usize,
    pub id: String,
}

pub struct GridRender {
    pub node: DomNode,
    pub cards: Vec<GridCard>,
}

pub fn render_flat_grid(
    records: &[ProjectRecord],
    ids: &mut IdRegistry,
    cfg: &GalleryConfig,
) -> GridRender {
    let mut grid = DomNode::el("div").with_class("project-grid");
    let mut cards = Vec::with_capacity(records.len());
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let category = normalize_category(record, &cfg.fallback_category);
        let slot = seen.entry(category).or_insert(0);
        let id = claim_card_id(record, ids);
        grid.children.push(project_card(record, &id, cfg));
        cards.push(GridCard {
            category: category.to_string(),
            index: *slot,
            id,
        });
        *slot += 1;
    }

    if grid.children.is_empty() {
        grid.children.push(placeholder_card("Projects", EMPTY_CATEGORY_MESSAGE));
    }

    GridRender { node: grid, cards }
}

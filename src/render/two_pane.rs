//! Two-pane layout: a list of category buttons and a detail panel showing
//! the selected category's cards.

use crate::config::GalleryConfig;
use crate::dom::DomNode;
use crate::gallery::{CategoryGroups, CategoryOrder, IdRegistry};

use super::card::{box_heading, category_row, placeholder_card};

/// Which category the detail panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected; the panel shows the "Select a category" prompt.
    #[default]
    Collapsed,
    Category(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoPaneState {
    selection: Selection,
}

impl TwoPaneState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicking the selected category collapses; any other category replaces it.
    pub fn toggle(&mut self, category: &str) -> &Selection {
        self.selection = match &self.selection {
            Selection::Category(current) if current == category => Selection::Collapsed,
            _ => Selection::Category(category.to_string()),
        };
        &self.selection
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected(&self) -> Option<&str> {
        match &self.selection {
            Selection::Category(c) => Some(c.as_str()),
            Selection::Collapsed => None,
        }
    }
}

/// One button per category, in display order; only `active` is marked.
pub fn render_category_buttons(
    groups: &CategoryGroups,
    order: &CategoryOrder,
    active: Option<&str>,
) -> Vec<DomNode> {
    groups
        .sorted_categories(order)
        .into_iter()
        .map(|cat| {
            let is_active = active == Some(cat);
            let mut btn = DomNode::el("button")
                .with_attr("type", "button")
                .with_class("project-box")
                .with_class("category-btn")
                .with_attr("data-category", cat)
                .with_attr("aria-pressed", if is_active { "true" } else { "false" })
                .with_child(box_heading(cat))
                .with_child(
                    DomNode::el("p")
                        .with_class("opacity-10")
                        .with_text("Click to view projects"),
                );
            btn.set_class("is-active", is_active);
            btn
        })
        .collect()
}

/// Detail panel contents for the current selection.
pub fn render_projects_panel(
    selected: Option<&str>,
    groups: &CategoryGroups,
    ids: &mut IdRegistry,
    cfg: &GalleryConfig,
) -> Vec<DomNode> {
    let Some(category) = selected else {
        return vec![placeholder_card("Select a category", "Projects will appear here.")];
    };
    let records = groups.get(category).unwrap_or_default();
    vec![category_row(category, records, &[], ids, cfg)]
}

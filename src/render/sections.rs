//! Collapsible horizontal sections: one tab + panel per category, accordion
//! style (at most one panel open).

use crate::config::GalleryConfig;
use crate::dom::DomNode;
use crate::gallery::{slugify, CategoryGroups, CategoryOrder, IdRegistry};

use super::card::{box_heading, category_row, claim_card_id};

/// Which panel is open, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Close every other panel and flip `index`. Returns whether `index` is now open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

/// Ids assigned to one section for the whole render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlan {
    pub category: String,
    /// Category anchor, carried by the `<section>` element.
    pub anchor: String,
    pub tab_id: String,
    pub panel_id: String,
    pub card_ids: Vec<String>,
}

/// Assign section, tab, panel and card ids in display order.
pub fn plan_sections(
    groups: &CategoryGroups,
    order: &CategoryOrder,
    ids: &mut IdRegistry,
) -> Vec<SectionPlan> {
    groups
        .sorted_categories(order)
        .into_iter()
        .map(|category| {
            let slug = slugify(category);
            let anchor = ids.claim(&format!("cat-{}", slug));
            let tab_id = ids.claim(&format!("tab-{}", slug));
            let panel_id = ids.claim(&format!("panel-{}", slug));
            let card_ids = groups
                .get(category)
                .unwrap_or_default()
                .iter()
                .map(|record| claim_card_id(record, ids))
                .collect();
            SectionPlan {
                category: category.to_string(),
                anchor,
                tab_id,
                panel_id,
                card_ids,
            }
        })
        .collect()
}

/// Render every section for the given accordion state.
pub fn render_sections(
    plan: &[SectionPlan],
    groups: &CategoryGroups,
    state: &AccordionState,
    cfg: &GalleryConfig,
) -> Vec<DomNode> {
    // Every card id is pre-assigned, so this registry never hands out ids.
    let mut spare_ids = IdRegistry::new();

    plan.iter()
        .enumerate()
        .map(|(index, section)| {
            let open = state.is_open(index);
            let records = groups.get(&section.category).unwrap_or_default();

            let mut tab = DomNode::el("button")
                .with_attr("type", "button")
                .with_attr("id", section.tab_id.as_str())
                .with_class("section-tab")
                .with_attr("data-section", index.to_string())
                .with_attr("aria-controls", section.panel_id.as_str())
                .with_attr("aria-expanded", if open { "true" } else { "false" })
                .with_child(box_heading(&section.category));
            tab.set_class("is-open", open);

            let mut panel = DomNode::el("div")
                .with_attr("id", section.panel_id.as_str())
                .with_class("section-panel")
                .with_attr("role", "region")
                .with_attr("aria-labelledby", section.tab_id.as_str())
                .with_child(category_row(
                    &section.category,
                    records,
                    &section.card_ids,
                    &mut spare_ids,
                    cfg,
                ));
            panel.set_hidden(!open);

            DomNode::el("section")
                .with_attr("id", section.anchor.as_str())
                .with_class("project-section")
                .with_attr("data-category", section.category.as_str())
                .with_child(tab)
                .with_child(panel)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{ProjectRecord, FALLBACK_CATEGORY};

    fn fixture() -> (CategoryGroups, Vec<SectionPlan>) {
        let records = vec![
            ProjectRecord::new("Arm").with_category("Robotics"),
            ProjectRecord::new("Soil Probe").with_category("AgTech"),
            ProjectRecord::new("Beehive Monitor").with_category("Biology"),
        ];
        let groups = CategoryGroups::from_records(&records, FALLBACK_CATEGORY);
        let plan = plan_sections(&groups, &CategoryOrder::default(), &mut IdRegistry::new());
        (groups, plan)
    }

    fn panel_hidden(sections: &[DomNode], index: usize) -> bool {
        sections[index]
            .find(&|n| n.has_class("section-panel"))
            .map(|p| p.is_hidden())
            .unwrap()
    }

    fn tab_open(sections: &[DomNode], index: usize) -> bool {
        sections[index]
            .find(&|n| n.has_class("section-tab"))
            .map(|t| t.has_class("is-open"))
            .unwrap()
    }

    #[test]
    fn accordion_keeps_at_most_one_open() {
        let mut state = AccordionState::new();
        assert!(state.toggle(0));
        assert!(state.toggle(1));
        assert_eq!(state.open_index(), Some(1));
        assert!(!state.toggle(1));
        assert_eq!(state.open_index(), None);
    }

    #[test]
    fn plan_follows_display_order() {
        let (_, plan) = fixture();
        let cats: Vec<_> = plan.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(cats, vec!["AgTech", "Biology", "Robotics"]);
        assert_eq!(plan[0].anchor, "cat-agtech");
        assert_eq!(plan[0].panel_id, "panel-agtech");
        assert_eq!(plan[0].card_ids, vec!["soil-probe"]);
    }

    #[test]
    fn panels_start_hidden() {
        let (groups, plan) = fixture();
        let cfg = GalleryConfig::default();
        let sections = render_sections(&plan, &groups, &AccordionState::new(), &cfg);
        assert_eq!(sections.len(), 3);
        for i in 0..3 {
            assert!(panel_hidden(&sections, i));
            assert!(!tab_open(&sections, i));
        }
    }

    #[test]
    fn opening_second_closes_first() {
        let (groups, plan) = fixture();
        let cfg = GalleryConfig::default();
        let mut state = AccordionState::new();
        state.toggle(0);
        let sections = render_sections(&plan, &groups, &state, &cfg);
        assert!(!panel_hidden(&sections, 0));
        assert!(tab_open(&sections, 0));

        state.toggle(1);
        let sections = render_sections(&plan, &groups, &state, &cfg);
        assert!(panel_hidden(&sections, 0));
        assert!(!tab_open(&sections, 0));
        assert!(!panel_hidden(&sections, 1));
        assert!(tab_open(&sections, 1));
    }

    #[test]
    fn rerender_keeps_card_ids() {
        let (groups, plan) = fixture();
        let cfg = GalleryConfig::default();
        let first = render_sections(&plan, &groups, &AccordionState::new(), &cfg);
        let second = render_sections(&plan, &groups, &AccordionState::new(), &cfg);
        assert_eq!(first, second);
        assert!(first[0].find_by_id("soil-probe").is_some());
    }
}

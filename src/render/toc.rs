//! Table of contents: one entry per category, optionally one nested entry
//! per project.

use std::collections::HashMap;

use crate::dom::css::set_style_property;
use crate::dom::DomNode;
use crate::gallery::{slugify, CategoryGroups, CategoryOrder, IdRegistry};

/// Where ToC links point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorMap {
    categories: HashMap<String, String>,
    projects: HashMap<(String, usize), String>,
    sections: HashMap<String, usize>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category(&mut self, category: &str, anchor: String) {
        self.categories.insert(category.to_string(), anchor);
    }

    /// Anchor of the `index`-th project (input order) of `category`.
    pub fn set_project(&mut self, category: &str, index: usize, anchor: String) {
        self.projects.insert((category.to_string(), index), anchor);
    }

    /// Record that `category`'s projects live inside collapsible section `index`.
    pub fn set_section(&mut self, category: &str, index: usize) {
        self.sections.insert(category.to_string(), index);
    }

    pub fn category(&self, category: &str) -> Option<&str> {
        self.categories.get(category).map(String::as_str)
    }

    pub fn project(&self, category: &str, index: usize) -> Option<&str> {
        self.projects
            .get(&(category.to_string(), index))
            .map(String::as_str)
    }

    pub fn section(&self, category: &str) -> Option<usize> {
        self.sections.get(category).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub label: String,
    /// Fragment target without the leading `#`.
    pub target: String,
    /// Section that must be opened before jumping to `target`.
    pub section: Option<usize>,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

/// Build entries in display order. Categories without an anchor in `anchors`
/// are skipped.
pub fn build_toc(
    groups: &CategoryGroups,
    order: &CategoryOrder,
    anchors: &AnchorMap,
    nested: bool,
    untitled: &str,
) -> Vec<TocEntry> {
    groups
        .sorted_categories(order)
        .into_iter()
        .filter_map(|category| {
            let cat_anchor = anchors.category(category)?;
            let children = if nested {
                groups
                    .get(category)
                    .unwrap_or_default()
                    .iter()
                    .enumerate()
                    .map(|(i, record)| match anchors.project(category, i) {
                        Some(project_anchor) => TocEntry {
                            label: record.display_title(untitled).to_string(),
                            target: project_anchor.to_string(),
                            section: anchors.section(category),
                            children: Vec::new(),
                        },
                        None => TocEntry {
                            label: record.display_title(untitled).to_string(),
                            target: cat_anchor.to_string(),
                            section: None,
                            children: Vec::new(),
                        },
                    })
                    .collect()
            } else {
                Vec::new()
            };
            Some(TocEntry {
                label: category.to_string(),
                target: cat_anchor.to_string(),
                section: None,
                children,
            })
        })
        .collect()
}

/// Find the entry (at any depth) whose href is `href` (with or without `#`).
/// Entries that need a section opened win over plain ones.
pub fn find_entry<'a>(entries: &'a [TocEntry], href: &str) -> Option<&'a TocEntry> {
    let target = href.trim_start_matches('#');
    let mut flat = Vec::new();
    flatten(entries, &mut flat);
    flat.iter()
        .copied()
        .find(|e| e.target == target && e.section.is_some())
        .or_else(|| flat.iter().copied().find(|e| e.target == target))
}

fn flatten<'a>(entries: &'a [TocEntry], out: &mut Vec<&'a TocEntry>) {
    for entry in entries {
        out.push(entry);
        flatten(&entry.children, out);
    }
}

/// `<li>` items for the ToC mount.
pub fn render_toc(entries: &[TocEntry], nested: bool) -> Vec<DomNode> {
    entries
        .iter()
        .map(|entry| {
            let mut li = DomNode::el("li").with_child(toc_link(entry));
            if nested {
                let sub = DomNode::el("ul").with_children(
                    entry
                        .children
                        .iter()
                        .map(|child| DomNode::el("li").with_child(toc_link(child)))
                        .collect::<Vec<_>>(),
                );
                li.children.push(sub);
            }
            li
        })
        .collect()
}

fn toc_link(entry: &TocEntry) -> DomNode {
    let mut a = DomNode::el("a")
        .with_attr("href", entry.href())
        .with_text(entry.label.as_str());
    if let Some(section) = entry.section {
        a.set_attr("data-section", section.to_string());
    }
    a
}

/// Zero-height anchor targets for layouts whose categories have no element
/// of their own. Returns the anchors in display order.
pub fn category_anchor_nodes(
    groups: &CategoryGroups,
    order: &CategoryOrder,
    ids: &mut IdRegistry,
    offset: &str,
    anchors: &mut AnchorMap,
) -> Vec<DomNode> {
    groups
        .sorted_categories(order)
        .into_iter()
        .map(|category| {
            let id = ids.claim(&format!("cat-{}", slugify(category)));
            anchors.set_category(category, id.clone());
            let mut node = DomNode::el("div")
                .with_attr("id", id)
                .with_class("toc-anchor");
            set_style_property(&mut node, "position", "relative");
            set_style_property(&mut node, "top", offset);
            set_style_property(&mut node, "height", "0px");
            node
        })
        .collect()
}

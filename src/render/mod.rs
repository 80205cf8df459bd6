pub mod card;
pub mod carousel;
pub mod grid;
pub mod sections;
pub mod toc;
pub mod two_pane;

use crate::config::{GalleryConfig, LayoutPreference, MountIds};
use crate::dom::DomTree;

/// Layout strategy the gallery is mounted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutStrategy {
    /// Category buttons + detail panel
    TwoPane,
    /// Every card in one grid, no grouping UI
    FlatGrid,
    /// One collapsible tab + panel per category
    Sections,
    /// Thumbnail cards in a carousel track
    Carousel,
}

impl LayoutStrategy {
    /// Whether each category gets an element of its own that a ToC can link to.
    pub fn has_category_elements(self) -> bool {
        matches!(self, LayoutStrategy::Sections)
    }
}

/// A chosen strategy plus the mount element ids it renders into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountPlan {
    TwoPane { list_id: String, panel_id: String },
    FlatGrid { mount_id: String },
    Sections { mount_id: String },
    Carousel { mount_id: String },
}

impl MountPlan {
    pub fn strategy(&self) -> LayoutStrategy {
        match self {
            MountPlan::TwoPane { .. } => LayoutStrategy::TwoPane,
            MountPlan::FlatGrid { .. } => LayoutStrategy::FlatGrid,
            MountPlan::Sections { .. } => LayoutStrategy::Sections,
            MountPlan::Carousel { .. } => LayoutStrategy::Carousel,
        }
    }
}

fn present(tree: &DomTree, id: &str) -> Option<String> {
    tree.has_id(id).then(|| id.to_string())
}

fn two_pane_mounts(tree: &DomTree, mounts: &MountIds) -> Option<MountPlan> {
    Some(MountPlan::TwoPane {
        list_id: present(tree, &mounts.category_list)?,
        panel_id: present(tree, &mounts.projects_panel)?,
    })
}

/// `project-sections`, else `project-grid`.
fn single_mount(tree: &DomTree, mounts: &MountIds) -> Option<String> {
    present(tree, &mounts.sections).or_else(|| present(tree, &mounts.grid))
}

/// Choose a strategy once, from the mounts the host document provides.
///
/// Returns `None` when the preferred strategy (or, for `Auto`, every
/// strategy) lacks its mounts.
pub fn select_strategy(tree: &DomTree, cfg: &GalleryConfig) -> Option<MountPlan> {
    let mounts = &cfg.mounts;
    let plan = match cfg.layout {
        LayoutPreference::Auto => two_pane_mounts(tree, mounts)
            .or_else(|| single_mount(tree, mounts).map(|mount_id| MountPlan::FlatGrid { mount_id }))
            .or_else(|| {
                present(tree, &mounts.carousel).map(|mount_id| MountPlan::Carousel { mount_id })
            }),
        LayoutPreference::TwoPane => two_pane_mounts(tree, mounts),
        LayoutPreference::Grid => {
            single_mount(tree, mounts).map(|mount_id| MountPlan::FlatGrid { mount_id })
        }
        LayoutPreference::Sections => {
            single_mount(tree, mounts).map(|mount_id| MountPlan::Sections { mount_id })
        }
        LayoutPreference::Carousel => {
            present(tree, &mounts.carousel).map(|mount_id| MountPlan::Carousel { mount_id })
        }
    };
    match &plan {
        Some(p) => log::debug!("layout {:?} -> {:?}", cfg.layout, p),
        None => log::debug!("layout {:?}: required mounts missing", cfg.layout),
    }
    plan
}

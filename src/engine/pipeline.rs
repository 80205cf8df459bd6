use thiserror::Error;
use url::Url;

use crate::config::GalleryConfig;
use crate::dom::parser::parse_html;
use crate::dom::{DomNode, DomTree};
use crate::gallery::{load_projects, CategoryGroups, IdRegistry, LoadError, ProjectRecord};
use crate::net::fetch::{fetch, resolve_location, FetchError};
use crate::render::card::error_card;
use crate::render::carousel::render_carousel;
use crate::render::grid::render_flat_grid;
use crate::render::sections::{plan_sections, render_sections, AccordionState, SectionPlan};
use crate::render::toc::{build_toc, category_anchor_nodes, find_entry, render_toc, AnchorMap, TocEntry};
use crate::render::two_pane::{render_category_buttons, render_projects_panel, TwoPaneState};
use crate::render::{select_strategy, LayoutStrategy, MountPlan};

/// A click the page reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Category button in the two-pane layout
    SelectCategory(String),
    /// Section tab, by display index
    ToggleSection(usize),
    /// ToC link, by href
    FollowToc(String),
}

/// Host-side follow-up after an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollIntoView(String),
    /// Native fragment navigation to this id
    JumpToAnchor(String),
    /// Carousel contents changed; re-measure the track
    CarouselRefresh,
}

/// Mounted view and its interaction state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryView {
    TwoPane {
        list_id: String,
        panel_id: String,
        state: TwoPaneState,
    },
    FlatGrid {
        mount_id: String,
    },
    Sections {
        mount_id: String,
        plan: Vec<SectionPlan>,
        state: AccordionState,
    },
    Carousel {
        mount_id: String,
    },
}

impl GalleryView {
    pub fn strategy(&self) -> LayoutStrategy {
        match self {
            GalleryView::TwoPane { .. } => LayoutStrategy::TwoPane,
            GalleryView::FlatGrid { .. } => LayoutStrategy::FlatGrid,
            GalleryView::Sections { .. } => LayoutStrategy::Sections,
            GalleryView::Carousel { .. } => LayoutStrategy::Carousel,
        }
    }
}

/// Error loading the host page itself
#[derive(Debug, Error)]
pub enum PageError {
    #[error("cannot load page {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },
    #[error("cannot load page {location}: HTTP {status}")]
    Status { location: String, status: u16 },
}

/// Result of rendering the gallery into a host document
pub struct GalleryPage {
    tree: DomTree,
    groups: CategoryGroups,
    view: Option<GalleryView>,
    toc: Vec<TocEntry>,
    error: Option<LoadError>,
    initial_effects: Vec<Effect>,
    /// Ids claimed during the initial pass; re-renders start from a copy.
    ids: IdRegistry,
    config: GalleryConfig,
}

impl GalleryPage {
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn groups(&self) -> &CategoryGroups {
        &self.groups
    }

    pub fn view(&self) -> Option<&GalleryView> {
        self.view.as_ref()
    }

    pub fn strategy(&self) -> Option<LayoutStrategy> {
        self.view.as_ref().map(GalleryView::strategy)
    }

    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Effects produced while mounting, before any interaction.
    pub fn initial_effects(&self) -> &[Effect] {
        &self.initial_effects
    }

    pub fn selected_category(&self) -> Option<&str> {
        match &self.view {
            Some(GalleryView::TwoPane { state, .. }) => state.selected(),
            _ => None,
        }
    }

    pub fn open_section(&self) -> Option<usize> {
        match &self.view {
            Some(GalleryView::Sections { state, .. }) => state.open_index(),
            _ => None,
        }
    }

    pub fn to_html(&self) -> String {
        self.tree.to_html()
    }

    /// Apply one click and re-render the affected mount.
    pub fn apply(&mut self, interaction: Interaction) -> Vec<Effect> {
        match interaction {
            Interaction::SelectCategory(category) => self.select_category(&category),
            Interaction::ToggleSection(index) => self.toggle_section(index),
            Interaction::FollowToc(href) => self.follow_toc(&href),
        }
    }

    fn select_category(&mut self, category: &str) -> Vec<Effect> {
        if !self.groups.contains(category) {
            log::debug!("ignoring unknown category {:?}", category);
            return Vec::new();
        }
        match &mut self.view {
            Some(GalleryView::TwoPane { state, .. }) => {
                state.toggle(category);
            }
            _ => {
                log::debug!("category selection ignored: layout is not two-pane");
                return Vec::new();
            }
        }
        self.render_two_pane();
        Vec::new()
    }

    fn toggle_section(&mut self, index: usize) -> Vec<Effect> {
        let opened_panel = match &mut self.view {
            Some(GalleryView::Sections { plan, state, .. }) if index < plan.len() => {
                state.toggle(index).then(|| plan[index].panel_id.clone())
            }
            Some(GalleryView::Sections { .. }) => {
                log::debug!("no section {}", index);
                return Vec::new();
            }
            _ => {
                log::debug!("section toggle ignored: layout is not sections");
                return Vec::new();
            }
        };
        self.render_sections();
        opened_panel.map(Effect::ScrollIntoView).into_iter().collect()
    }

    fn follow_toc(&mut self, href: &str) -> Vec<Effect> {
        let target = href.trim_start_matches('#').to_string();
        let closed_section = find_entry(&self.toc, &target)
            .and_then(|entry| entry.section)
            .filter(|&section| self.open_section() != Some(section));

        let mut effects = Vec::new();
        if let Some(section) = closed_section {
            effects.extend(self.toggle_section(section));
        }
        effects.push(Effect::JumpToAnchor(target));
        effects
    }

    fn render_two_pane(&mut self) {
        let Some(GalleryView::TwoPane {
            list_id,
            panel_id,
            state,
        }) = &self.view
        else {
            return;
        };
        let order = self.config.category_order();
        let buttons = render_category_buttons(&self.groups, &order, state.selected());
        let mut ids = self.ids.clone();
        let panel = render_projects_panel(state.selected(), &self.groups, &mut ids, &self.config);
        replace_mount(&mut self.tree, list_id, buttons);
        replace_mount(&mut self.tree, panel_id, panel);
    }

    fn render_sections(&mut self) {
        let Some(GalleryView::Sections {
            mount_id,
            plan,
            state,
        }) = &self.view
        else {
            return;
        };
        let sections = render_sections(plan, &self.groups, state, &self.config);
        replace_mount(&mut self.tree, mount_id, sections);
    }

    /// Put the load-failure card into the first mount the page has.
    fn show_error(&mut self, err: &LoadError) {
        let mounts = &self.config.mounts;
        let candidates = [
            &mounts.projects_panel,
            &mounts.sections,
            &mounts.grid,
            &mounts.carousel,
        ];
        let message = err.to_string();
        match candidates.iter().find(|id| self.tree.has_id(id)) {
            Some(id) => replace_mount(&mut self.tree, id, vec![error_card(&message)]),
            None => log::warn!("no mount to show load error in"),
        }
    }
}

fn replace_mount(tree: &mut DomTree, id: &str, children: Vec<DomNode>) {
    match tree.find_by_id_mut(id) {
        Some(mount) => mount.replace_children(children),
        None => log::warn!("mount #{} disappeared", id),
    }
}

/// Prepend nodes to `.content`, else `<body>`, else the document root.
fn prepend_to_content(tree: &mut DomTree, nodes: Vec<DomNode>) {
    let is_content = |n: &DomNode| n.is_element() && n.has_class("content");
    let is_body = |n: &DomNode| n.is_element() && n.tag == "body";
    if tree.root.find(&is_content).is_some() {
        if let Some(host) = tree.root.find_mut(&is_content) {
            prepend_children(host, nodes);
        }
    } else if tree.root.find(&is_body).is_some() {
        if let Some(host) = tree.root.find_mut(&is_body) {
            prepend_children(host, nodes);
        }
    } else {
        prepend_children(&mut tree.root, nodes);
    }
}

fn prepend_children(host: &mut DomNode, nodes: Vec<DomNode>) {
    host.children.splice(0..0, nodes);
}

/// Every id already present in the host document.
fn existing_ids(tree: &DomTree) -> IdRegistry {
    let mut ids = IdRegistry::new();
    let mut nodes = Vec::new();
    tree.root.find_all(&|n| n.is_element() && n.id().is_some(), &mut nodes);
    for node in nodes {
        if let Some(id) = node.id() {
            ids.reserve(id);
        }
    }
    ids
}

/// The gallery pipeline: Host page → Load → Group → Mount → ToC
pub struct GalleryEngine {
    config: GalleryConfig,
}

impl Default for GalleryEngine {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}

impl GalleryEngine {
    pub fn new(config: GalleryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Where the project list lives for a page at `page_url`.
    pub fn data_location(&self, page_url: &str) -> Result<Url, LoadError> {
        let base = Url::parse(page_url).ok();
        resolve_location(base.as_ref(), &self.config.data_path).map_err(|source| {
            LoadError::Fetch {
                location: self.config.data_path.clone(),
                source,
            }
        })
    }

    /// Fetch a host page (URL or filesystem path) and render the gallery into it.
    pub fn load_page(&self, page: &str) -> Result<GalleryPage, PageError> {
        let url = resolve_location(None, page).map_err(|source| PageError::Fetch {
            location: page.to_string(),
            source,
        })?;
        let result = fetch(&url).map_err(|source| PageError::Fetch {
            location: url.to_string(),
            source,
        })?;
        if !result.is_success() {
            return Err(PageError::Status {
                location: url.to_string(),
                status: result.status,
            });
        }
        Ok(self.render_document(&result.text(), &result.url))
    }

    /// Parse host HTML, load the project list next to it, and render.
    pub fn render_document(&self, html: &str, page_url: &str) -> GalleryPage {
        let tree = parse_html(html, page_url);
        let projects = self
            .data_location(page_url)
            .and_then(|location| load_projects(&location));
        self.process(tree, projects)
    }

    /// Render already-loaded records into a parsed host document (for testing)
    pub fn process(
        &self,
        tree: DomTree,
        projects: Result<Vec<ProjectRecord>, LoadError>,
    ) -> GalleryPage {
        let cfg = &self.config;
        let mut page = GalleryPage {
            ids: existing_ids(&tree),
            tree,
            groups: CategoryGroups::new(),
            view: None,
            toc: Vec::new(),
            error: None,
            initial_effects: Vec::new(),
            config: cfg.clone(),
        };

        let records = match projects {
            Ok(records) => records,
            Err(err) => {
                log::error!("{}", err);
                page.show_error(&err);
                page.error = Some(err);
                return page;
            }
        };

        page.groups = CategoryGroups::from_records(&records, &cfg.fallback_category);
        let order = cfg.category_order();
        let plan = select_strategy(&page.tree, cfg);
        let wants_toc = page.tree.has_id(&cfg.mounts.toc);
        let mut anchors = AnchorMap::new();

        let needs_anchor_nodes = plan
            .as_ref()
            .map_or(true, |p| !p.strategy().has_category_elements());
        if wants_toc && needs_anchor_nodes {
            let nodes = category_anchor_nodes(
                &page.groups,
                &order,
                &mut page.ids,
                &cfg.anchor_offset,
                &mut anchors,
            );
            prepend_to_content(&mut page.tree, nodes);
        }

        page.view = match plan {
            None => {
                log::warn!(
                    "No mount elements found for projects. Add #{}/#{} or #{}.",
                    cfg.mounts.category_list,
                    cfg.mounts.projects_panel,
                    cfg.mounts.sections
                );
                None
            }
            Some(MountPlan::TwoPane { list_id, panel_id }) => Some(GalleryView::TwoPane {
                list_id,
                panel_id,
                state: TwoPaneState::new(),
            }),
            Some(MountPlan::FlatGrid { mount_id }) => {
                let grid = render_flat_grid(&records, &mut page.ids, cfg);
                for card in &grid.cards {
                    anchors.set_project(&card.category, card.index, card.id.clone());
                }
                replace_mount(&mut page.tree, &mount_id, vec![grid.node]);
                Some(GalleryView::FlatGrid { mount_id })
            }
            Some(MountPlan::Sections { mount_id }) => {
                let plan = plan_sections(&page.groups, &order, &mut page.ids);
                for (index, section) in plan.iter().enumerate() {
                    anchors.set_category(&section.category, section.anchor.clone());
                    anchors.set_section(&section.category, index);
                    for (i, id) in section.card_ids.iter().enumerate() {
                        anchors.set_project(&section.category, i, id.clone());
                    }
                }
                Some(GalleryView::Sections {
                    mount_id,
                    plan,
                    state: AccordionState::new(),
                })
            }
            Some(MountPlan::Carousel { mount_id }) => {
                let cards = render_carousel(&records, cfg);
                replace_mount(&mut page.tree, &mount_id, cards);
                page.initial_effects.push(Effect::CarouselRefresh);
                Some(GalleryView::Carousel { mount_id })
            }
        };
        page.render_two_pane();
        page.render_sections();

        if wants_toc {
            page.toc = build_toc(
                &page.groups,
                &order,
                &anchors,
                cfg.toc_nested,
                &cfg.untitled_label,
            );
            let items = render_toc(&page.toc, cfg.toc_nested);
            replace_mount(&mut page.tree, &cfg.mounts.toc, items);
        }

        log::info!(
            "rendered {} projects in {} categories ({:?})",
            page.groups.record_count(),
            page.groups.len(),
            page.strategy()
        );
        page
    }
}

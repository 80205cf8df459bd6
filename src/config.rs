//! Gallery configuration: data location, labels, layout choice and mount ids.
//!
//! Defaults match the stock host pages. A JSON file may override any subset
//! of fields; the CLI overrides the file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gallery::group::{CategoryOrder, DEFAULT_PINNED_CATEGORY, FALLBACK_CATEGORY};
use crate::gallery::model::UNTITLED;

/// Default location of the project list, relative to the host page.
pub const DEFAULT_DATA_PATH: &str = "assets/json/projects.json";

/// Link target for cards without a url.
pub const DEFAULT_PLACEHOLDER_HREF: &str = "project_pending.html";

/// Which layout strategy to mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutPreference {
    /// Pick from the mounts the host page provides.
    #[default]
    Auto,
    TwoPane,
    Grid,
    Sections,
    Carousel,
}

impl LayoutPreference {
    pub const ALL: [LayoutPreference; 5] = [
        LayoutPreference::Auto,
        LayoutPreference::TwoPane,
        LayoutPreference::Grid,
        LayoutPreference::Sections,
        LayoutPreference::Carousel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayoutPreference::Auto => "Auto",
            LayoutPreference::TwoPane => "Two-pane",
            LayoutPreference::Grid => "Grid",
            LayoutPreference::Sections => "Sections",
            LayoutPreference::Carousel => "Carousel",
        }
    }
}

/// Element ids the host page uses for each mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountIds {
    pub category_list: String,
    pub projects_panel: String,
    pub sections: String,
    pub grid: String,
    pub toc: String,
    pub carousel: String,
}

impl Default for MountIds {
    fn default() -> Self {
        Self {
            category_list: "category-list".into(),
            projects_panel: "projects-panel".into(),
            sections: "project-sections".into(),
            grid: "project-grid".into(),
            toc: "toc-list".into(),
            carousel: "carouselTrack".into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Project list location, resolved against the host page.
    pub data_path: String,
    /// Category listed first; `None` disables pinning.
    pub pinned_category: Option<String>,
    pub fallback_category: String,
    pub placeholder_href: String,
    pub untitled_label: String,
    pub layout: LayoutPreference,
    pub mounts: MountIds,
    /// Nest one ToC entry per project under its category.
    pub toc_nested: bool,
    /// `top` offset of the zero-height category anchors the ToC inserts.
    pub anchor_offset: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.into(),
            pinned_category: Some(DEFAULT_PINNED_CATEGORY.into()),
            fallback_category: FALLBACK_CATEGORY.into(),
            placeholder_href: DEFAULT_PLACEHOLDER_HREF.into(),
            untitled_label: UNTITLED.into(),
            layout: LayoutPreference::Auto,
            mounts: MountIds::default(),
            toc_nested: true,
            anchor_offset: "-80px".into(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }

    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    pub fn with_pinned_category(mut self, pinned: Option<String>) -> Self {
        self.pinned_category = pinned;
        self
    }

    pub fn with_layout(mut self, layout: LayoutPreference) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_mounts(mut self, mounts: MountIds) -> Self {
        self.mounts = mounts;
        self
    }

    pub fn with_toc_nested(mut self, nested: bool) -> Self {
        self.toc_nested = nested;
        self
    }

    pub fn category_order(&self) -> CategoryOrder {
        CategoryOrder::new(self.pinned_category.clone())
    }
}

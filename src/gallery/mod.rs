//! Gallery data: records, category grouping, display ids and loading.

pub mod group;
pub mod loader;
pub mod model;
pub mod slug;

pub use group::{CategoryGroups, CategoryOrder, FALLBACK_CATEGORY};
pub use loader::{load_projects, LoadError};
pub use model::ProjectRecord;
pub use slug::{slugify, IdRegistry};

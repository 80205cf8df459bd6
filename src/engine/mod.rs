pub mod pipeline;
pub mod scaffold;

pub use pipeline::{Effect, GalleryEngine, GalleryPage, GalleryView, Interaction, PageError};
pub use scaffold::scaffold_document;

//! Alstro-Content: catalog layer for the Alstro site
//!
//! This crate owns the content that drives every page: the slide catalog shown
//! in the home page slider, the activity catalog behind the activities page,
//! and the news board. Controllers in `alstro-core` never fetch anything
//! themselves; they receive an already-loaded [`CatalogBundle`].
//!
//! ## Layer 0 - Data
//!
//! Focus: a stable data model and a swappable data boundary.
//!
//! ## Key Components
//!
//! - `CatalogSource`: async trait every content backend implements
//! - `InlineCatalog`: built-in sample content
//! - `JsonCatalogSource`: catalog document read from disk
//! - `fakes::MemoryCatalogSource`: caller-supplied bundle for tests

mod error;
pub mod fakes;
mod inline;
mod json;
mod model;
pub mod source;

pub use error::ContentError;
pub use inline::InlineCatalog;
pub use json::JsonCatalogSource;
pub use model::{
    Activity, ActivityStatus, ActivityTag, CatalogBundle, NewsItem, ParseTagError, Slide,
};
pub use source::CatalogSource;

/// Result type for alstro-content operations
pub type ContentResult<T> = std::result::Result<T, ContentError>;

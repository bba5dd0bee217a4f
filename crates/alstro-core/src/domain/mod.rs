//! Domain models for the site.
//!
//! The catalog records themselves live in `alstro-content`; this module
//! re-exports them next to the site's error taxonomy so downstream code has
//! one import path.

pub mod error;

pub use alstro_content::{
    Activity, ActivityStatus, ActivityTag, CatalogBundle, NewsItem, ParseTagError, Slide,
};
pub use error::{Result, SiteError};

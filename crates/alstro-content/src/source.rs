//! The catalog data boundary.
//!
//! A `CatalogSource` hands back a fully loaded, already ordered
//! [`CatalogBundle`]. Fetching, caching and retries, if a backend needs them,
//! live behind this trait; nothing downstream knows which backend it got.
//!
//! In-memory fakes are provided for testing via the `fakes` module.

use async_trait::async_trait;

use crate::model::CatalogBundle;
use crate::ContentResult;

/// Backend-agnostic provider of site content.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load the full bundle. Entry order is preserved as supplied.
    async fn load(&self) -> ContentResult<CatalogBundle>;

    /// Short name for logs.
    fn describe(&self) -> String;
}

//! Built-in sample content.
//!
//! The document is compiled into the binary and parsed through the same path
//! as any other catalog document, so the inline content and a file on disk
//! can never disagree on format.

use async_trait::async_trait;

use crate::model::CatalogBundle;
use crate::source::CatalogSource;
use crate::ContentResult;

const SITE_CATALOG: &str = include_str!("../catalog/site.json");

/// Sample catalogs shipped with the site.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineCatalog;

impl InlineCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Parse the embedded document.
    pub fn bundle(&self) -> ContentResult<CatalogBundle> {
        Ok(serde_json::from_str(SITE_CATALOG)?)
    }
}

#[async_trait]
impl CatalogSource for InlineCatalog {
    async fn load(&self) -> ContentResult<CatalogBundle> {
        self.bundle()
    }

    fn describe(&self) -> String {
        "inline".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ActivityStatus, ActivityTag};

    #[test]
    fn test_inline_catalog_parses() {
        let bundle = InlineCatalog::new().bundle().unwrap();
        assert_eq!(bundle.slides.as_ref().map(Vec::len), Some(3));
        assert_eq!(bundle.activities.as_ref().map(Vec::len), Some(7));
        assert_eq!(bundle.news.len(), 4);
    }

    #[test]
    fn test_inline_activities_keep_catalog_order() {
        let bundle = InlineCatalog::new().bundle().unwrap();
        let ids: Vec<u32> = bundle.activities.unwrap().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_inline_activities_have_valid_dates() {
        let bundle = InlineCatalog::new().bundle().unwrap();
        for activity in bundle.activities.unwrap() {
            activity.validate_dates().unwrap();
        }
    }

    #[test]
    fn test_only_external_entry_has_link() {
        let bundle = InlineCatalog::new().bundle().unwrap();
        let linked: Vec<_> = bundle
            .activities
            .unwrap()
            .into_iter()
            .filter(|a| a.external_link.is_some())
            .collect();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].tag, ActivityTag::External);
        assert_eq!(linked[0].status, ActivityStatus::Past);
    }
}

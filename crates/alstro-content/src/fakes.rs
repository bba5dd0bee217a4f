//! In-memory fakes for the catalog boundary (testing only)

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::model::CatalogBundle;
use crate::source::CatalogSource;
use crate::ContentResult;

/// Returns a caller-supplied bundle and counts how often it was loaded.
#[derive(Debug, Default)]
pub struct MemoryCatalogSource {
    bundle: CatalogBundle,
    loads: AtomicU64,
}

impl MemoryCatalogSource {
    pub fn new(bundle: CatalogBundle) -> Self {
        Self {
            bundle,
            loads: AtomicU64::new(0),
        }
    }

    /// Number of completed `load` calls.
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalogSource {
    async fn load(&self) -> ContentResult<CatalogBundle> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        Ok(self.bundle.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_source_returns_bundle_and_counts() {
        let source = MemoryCatalogSource::new(CatalogBundle::default());
        assert_eq!(source.load_count(), 0);
        let bundle = source.load().await.unwrap();
        assert!(bundle.slides.is_none());
        source.load().await.unwrap();
        assert_eq!(source.load_count(), 2);
    }
}

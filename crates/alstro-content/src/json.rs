//! Catalog document read from a JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::ContentError;
use crate::model::CatalogBundle;
use crate::source::CatalogSource;
use crate::ContentResult;

/// Reads a [`CatalogBundle`] from a JSON document on every `load`.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load(&self) -> ContentResult<CatalogBundle> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::NotFound(self.path.display().to_string()))
            }
            Err(e) => {
                return Err(ContentError::Read(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let bundle: CatalogBundle = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            slides = ?bundle.slides.as_ref().map(Vec::len),
            activities = ?bundle.activities.as_ref().map(Vec::len),
            news = bundle.news.len(),
            "catalog document loaded"
        );
        Ok(bundle)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

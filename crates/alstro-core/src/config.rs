//! Site configuration.
//!
//! Defaults reproduce the shipped site: a 3 second slide period, the inline
//! sample catalog and a `dist` output directory. Each value can be overridden
//! from the environment or through the builder-style setters.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use alstro_content::{CatalogSource, InlineCatalog, JsonCatalogSource};

use crate::domain::{Result, SiteError};
use crate::slider::SLIDE_INTERVAL;

/// Environment variable holding the slide period in milliseconds.
pub const ENV_SLIDE_INTERVAL_MS: &str = "ALSTRO_SLIDE_INTERVAL_MS";
/// Environment variable pointing at a JSON catalog document.
pub const ENV_CATALOG: &str = "ALSTRO_CATALOG";
/// Environment variable naming the publish directory.
pub const ENV_OUT_DIR: &str = "ALSTRO_OUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub slide_interval: Duration,
    /// `None` means the inline sample catalog.
    pub catalog_path: Option<PathBuf>,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            slide_interval: SLIDE_INTERVAL,
            catalog_path: None,
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Set the slide period
    pub fn with_slide_interval(mut self, interval: Duration) -> Self {
        self.slide_interval = interval;
        self
    }

    /// Read catalogs from a JSON document instead of the inline sample
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Set the publish directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Create from environment variables
    ///
    /// Reads:
    /// - ALSTRO_SLIDE_INTERVAL_MS (optional, default: 3000, must be > 0)
    /// - ALSTRO_CATALOG (optional, default: inline catalog)
    /// - ALSTRO_OUT_DIR (optional, default: "dist")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SLIDE_INTERVAL_MS) {
            config.slide_interval = parse_interval(&raw)?;
        }
        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(dir) = lookup(ENV_OUT_DIR).filter(|d| !d.trim().is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// The content backend this configuration points at.
    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Arc::new(JsonCatalogSource::new(path)),
            None => Arc::new(InlineCatalog::new()),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Parse a millisecond count, rejecting zero and non-numbers.
pub fn parse_interval(raw: &str) -> Result<Duration> {
    let ms: u64 = raw.trim().parse().map_err(|_| {
        SiteError::InvalidConfig(format!("{ENV_SLIDE_INTERVAL_MS} is not a number: {raw:?}"))
    })?;
    if ms == 0 {
        return Err(SiteError::InvalidConfig(format!(
            "{ENV_SLIDE_INTERVAL_MS} must be greater than zero"
        )));
    }
    Ok(Duration::from_millis(ms))
}

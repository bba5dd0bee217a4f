//! Static site build.
//!
//! Renders every route to disk and records what was written in
//! `manifest.json`, so a deploy step can tell which pages changed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::obs;
use crate::pages::{PageState, Site};
use crate::render::render_document;
use crate::routes::Route;

/// Version of the manifest layout.
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;
pub const MANIFEST_FILE: &str = "manifest.json";

/// SHA-256 of a rendered page, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageDigest(String);

impl PageDigest {
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        PageDigest(hex::encode(hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 12 hex chars.
    pub fn short(&self) -> &str {
        &self.0[..12.min(self.0.len())]
    }
}

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedPage {
    pub route: Route,
    /// File path relative to the output directory, `/`-separated.
    pub path: String,
    pub sha256: PageDigest,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    pub pages: Vec<PublishedPage>,
}

impl SiteManifest {
    pub fn page(&self, route: Route) -> Option<&PublishedPage> {
        self.pages.iter().find(|p| p.route == route)
    }
}

/// `index.html` for the home page, `<route>/index.html` otherwise.
pub fn page_file(route: Route) -> String {
    match route.path().trim_start_matches('/') {
        "" => "index.html".to_string(),
        dir => format!("{dir}/index.html"),
    }
}

/// Render every route into `out_dir` and write the manifest next to them.
pub fn publish_site(out_dir: &Path, site: &Site) -> Result<SiteManifest> {
    std::fs::create_dir_all(out_dir).with_context(|| format!("create {:?}", out_dir))?;

    let state = PageState::default();
    let mut pages = Vec::with_capacity(Route::ALL.len());
    for route in Route::ALL {
        let html = render_document(&site.page(route, &state));
        let rel = page_file(route);
        let target: PathBuf = out_dir.join(&rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {:?}", parent))?;
        }
        std::fs::write(&target, &html).with_context(|| format!("write {:?}", target))?;
        tracing::debug!(route = %route, path = %rel, "page written");
        pages.push(PublishedPage {
            route,
            path: rel,
            sha256: PageDigest::from_bytes(html.as_bytes()),
            bytes: html.len(),
        });
    }

    let manifest = SiteManifest {
        schema_version: MANIFEST_SCHEMA_VERSION,
        generated_at: Utc::now(),
        pages,
    };
    write_manifest_json(&out_dir.join(MANIFEST_FILE), &manifest)?;
    obs::emit_site_published(&out_dir.display().to_string(), manifest.pages.len());
    Ok(manifest)
}

/// Write manifest.json.
pub fn write_manifest_json(path: &Path, manifest: &SiteManifest) -> Result<()> {
    let content = serde_json::to_string_pretty(manifest).context("serialize site manifest")?;
    std::fs::write(path, content).with_context(|| format!("write {:?}", path))?;
    Ok(())
}

/// Read a manifest written by [`publish_site`].
pub fn read_manifest_json(path: &Path) -> Result<SiteManifest> {
    let content = std::fs::read_to_string(path).with_context(|| format!("read {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("parse {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_layout() {
        assert_eq!(page_file(Route::Home), "index.html");
        assert_eq!(page_file(Route::Bunkou), "bunkou/index.html");
    }

    #[test]
    fn test_digest_known_value() {
        let d = PageDigest::from_bytes(b"");
        assert_eq!(
            d.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(d.short(), "e3b0c44298fc");
    }
}

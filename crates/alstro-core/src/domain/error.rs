//! Domain-level error taxonomy for the site.

use alstro_content::ContentError;

/// Site domain errors.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("invalid catalog: {0} catalog is absent")]
    InvalidCatalog(&'static str),

    #[error("route not found: {0}")]
    RouteNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for site domain operations.
pub type Result<T> = std::result::Result<T, SiteError>;

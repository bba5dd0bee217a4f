//! Error types for alstro-content

use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum ContentError {
    /// Catalog document does not exist
    #[error("Catalog not found: {0}")]
    NotFound(String),

    /// Catalog document could not be read
    #[error("Catalog read failed: {0}")]
    Read(String),

    /// Catalog document is not a valid bundle
    #[error("Catalog parse failed: {0}")]
    Parse(String),

    /// An entry violates a data invariant
    #[error("Invalid catalog entry {id}: {reason}")]
    InvalidEntry { id: u32, reason: String },
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_error_display() {
        let err = ContentError::NotFound("site.json".to_string());
        assert!(err.to_string().contains("Catalog not found"));

        let err = ContentError::InvalidEntry {
            id: 4,
            reason: "end date before start date".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("4"));
        assert!(msg.contains("end date before start date"));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: ContentError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}

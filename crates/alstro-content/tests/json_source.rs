//! Contract tests for the JSON catalog source.

use alstro_content::{CatalogSource, ContentError, InlineCatalog, JsonCatalogSource};
use tempfile::tempdir;

#[tokio::test]
async fn json_source_loads_exported_inline_bundle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.json");
    let inline = InlineCatalog::new().bundle().unwrap();
    std::fs::write(&path, serde_json::to_string_pretty(&inline).unwrap()).unwrap();

    let source = JsonCatalogSource::new(&path);
    let loaded = source.load().await.unwrap();
    assert_eq!(loaded, inline);
    assert!(source.describe().starts_with("json:"));
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = tempdir().unwrap();
    let source = JsonCatalogSource::new(dir.path().join("absent.json"));
    let err = source.load().await.unwrap_err();
    assert!(matches!(err, ContentError::NotFound(_)));
}

#[tokio::test]
async fn malformed_document_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"slides\": [").unwrap();

    let err = JsonCatalogSource::new(&path).load().await.unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

#[tokio::test]
async fn document_without_catalog_keys_loads_as_absent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("news-only.json");
    std::fs::write(&path, r#"{"news": []}"#).unwrap();

    let bundle = JsonCatalogSource::new(&path).load().await.unwrap();
    assert!(bundle.slides.is_none());
    assert!(bundle.activities.is_none());
}

#[tokio::test]
async fn unknown_tag_is_rejected_at_the_boundary() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad-tag.json");
    std::fs::write(
        &path,
        r#"{"activities": [{"id": 1, "start_date": "2025-01-01", "title": "x",
            "tag": "workshop", "description": "", "status": "current"}]}"#,
    )
    .unwrap();

    let err = JsonCatalogSource::new(&path).load().await.unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}

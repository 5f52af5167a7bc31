//! Unit tests for the image catalog.

use crate::helpers::FailingCatalog;
use imagecanvas::catalog::{ImageCatalog, StaticCatalog};
use imagecanvas::error::CatalogError;

#[test]
fn test_static_catalog_has_ten_entries_in_order() {
    let records = StaticCatalog.fetch().unwrap();
    assert_eq!(records.len(), 10);

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "image1", "image2", "image3", "image4", "image5", "image1", "image2", "image3",
            "image4", "image5",
        ]
    );
}

#[test]
fn test_static_catalog_fetch_is_repeatable() {
    // Single-shot by contract, but the data itself is stable.
    assert_eq!(StaticCatalog.fetch(), StaticCatalog.fetch());
}

#[test]
fn test_failing_catalog_error_message() {
    let err = FailingCatalog("boom").fetch().unwrap_err();
    assert_eq!(err, CatalogError::Unavailable("boom".to_string()));
    assert_eq!(err.to_string(), "catalog unavailable: boom");
}

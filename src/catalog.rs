//! Image catalog - the source of available carousel images.
//!
//! The catalog is a single-shot fetch: the store consumes it once at
//! startup and never re-fetches. The trait seam exists so tests can
//! substitute failing or custom catalogs.

use crate::error::CatalogResult;

/// One catalog entry, identified by resource name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub name: String,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Supplies the ordered list of images available in the carousel.
pub trait ImageCatalog {
    /// Fetch the catalog. Called exactly once per canvas session.
    fn fetch(&self) -> CatalogResult<Vec<ImageRecord>>;
}

/// The built-in catalog: the five bundled images, twice over.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCatalog;

impl ImageCatalog for StaticCatalog {
    fn fetch(&self) -> CatalogResult<Vec<ImageRecord>> {
        Ok([
            "image1", "image2", "image3", "image4", "image5", "image1", "image2", "image3",
            "image4", "image5",
        ]
        .into_iter()
        .map(ImageRecord::new)
        .collect())
    }
}

//! Error types for catalog operations.
//!
//! The catalog load is the only operation in the crate that surfaces an
//! error; everything else is a total no-op on invalid input.

use thiserror::Error;

/// Errors that can occur while fetching the image catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog source could not be reached or read.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// Generic error message.
    #[error("{0}")]
    Other(String),
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

impl From<String> for CatalogError {
    fn from(s: String) -> Self {
        CatalogError::Other(s)
    }
}

impl From<&str> for CatalogError {
    fn from(s: &str) -> Self {
        CatalogError::Other(s.to_string())
    }
}

//! Catalog error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::CatalogIssue;

/// Errors that can occur while loading or querying a catalog snapshot.
///
/// The listing operations themselves are total; these only come from the
/// loading step and from lookups by identifier.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Snapshot file could not be read.
    #[error("Failed to read catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot JSON was malformed.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Snapshot failed validation.
    #[error("Catalog failed validation with {} issue(s)", .0.len())]
    Validation(Vec<CatalogIssue>),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

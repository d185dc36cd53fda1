//! Error types for loading catalogs

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Catalog contents are not valid YAML or do not match the record shape
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Validation pattern failed to compile
    #[error("Invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;

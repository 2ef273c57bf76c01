use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::Brand;
use crate::domain::errors::DomainError;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read brand catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse brand catalog {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported brand catalog format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid brand catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Port for resolving brand display names to SBS numbers.
///
/// Implementations are immutable once built and shared across callers.
#[cfg_attr(test, automock)]
pub trait BrandCatalog: Send + Sync {
    /// Exact, case-sensitive match on the display name
    fn lookup(&self, name: &str) -> Option<Brand>;

    /// All brands, in declaration order
    fn brands(&self) -> Vec<Brand>;
}

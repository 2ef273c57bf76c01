use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write query to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write query to stdout: {0}")]
    Stdout(#[source] std::io::Error),
}

/// Port for handing generated query text to the outside world
pub trait QueryExporter {
    fn export(&self, text: &str) -> Result<(), ExportError>;
}

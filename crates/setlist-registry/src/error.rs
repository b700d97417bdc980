//! Error types for setlist-registry

use std::path::PathBuf;

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading the registry
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read set list at {path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn source_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Source {
            path: path.into(),
            source,
        }
    }
}

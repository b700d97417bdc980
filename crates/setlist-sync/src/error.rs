//! Error types for setlist-sync

use std::path::PathBuf;

/// Result type for synchronizer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering or replacing set lists
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read master set list at {path}: {source}")]
    MasterUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A traversal error surfaced by the directory walk
    #[error(transparent)]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write set list at {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn master(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::MasterUnreadable {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

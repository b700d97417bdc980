//! Error types for setlist-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the registry model
    #[error(transparent)]
    Registry(#[from] setlist_registry::Error),

    /// Error from the tree synchronizer
    #[error(transparent)]
    Sync(#[from] setlist_sync::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

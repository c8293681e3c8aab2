//! Error types for dirsync operations.

use std::path::PathBuf;

/// Result type for dirsync operations
pub type Result<T> = std::result::Result<T, SyncError>;

/// Errors that can occur while loading configuration or reconciling trees
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown task: {0}")]
    UnknownTask(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

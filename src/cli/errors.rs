//! CLI-specific error types
//!
//! Every CLI error is fatal: the process prints it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file could not be read or parsed
    #[error("Failed to load configuration from {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    /// Database pool could not be created
    #[error("Failed to open database pool: {0}")]
    Database(#[from] sqlx::Error),

    /// Server failed to bind or serve
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

impl CliError {
    /// Config error for the given path
    pub fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

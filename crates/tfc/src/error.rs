//! Error types for listing commands.

use std::io;

/// Errors a listing command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Writing to the output streams failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The remote API could not produce a page.
    #[error("failed to fetch results: {0}")]
    Fetch(Box<dyn std::error::Error + Send + Sync>),

    /// `--columns` named a column the command does not know.
    #[error("invalid column {column:?}, expected one of: {}", .allowed.join(", "))]
    InvalidColumn {
        column: String,
        allowed: Vec<String>,
    },

    /// The settings file could not be parsed.
    #[error("invalid settings: {0}")]
    Settings(#[from] serde_yaml::Error),

    /// The logging subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl Error {
    /// Wrap a fetch error from the API client.
    pub fn fetch(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Error::Fetch(err.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

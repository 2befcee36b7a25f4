//! Error types for zametki.

use thiserror::Error;

/// All errors that can occur in zametki.
#[derive(Debug, Error)]
pub enum ZametkiError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be loaded or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A date, time, or month argument could not be parsed.
    #[error("Invalid date or time: {0}")]
    InvalidDate(String),

    /// No note exists with the given id.
    #[error("Note not found: {0}")]
    NotFound(i64),
}

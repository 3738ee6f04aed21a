//! Error types for Wordbook core operations.
//!
//! There are only two kinds of failure. Validation errors are returned to the
//! caller so the presentation layer can prompt the user. Storage errors are
//! produced by backends and handled inside the store, which logs them and
//! keeps working from memory.

use thiserror::Error;

/// Result type alias for Wordbook operations.
pub type Result<T> = std::result::Result<T, WordbookError>;

/// Core error type for Wordbook operations.
#[derive(Debug, Error)]
pub enum WordbookError {
    /// Data validation error (empty word or explanation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error (missing, unreadable, or unwritable document)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl WordbookError {
    /// Whether this error should be shown to the user as a prompt.
    pub fn is_validation(&self) -> bool {
        matches!(self, WordbookError::Validation(_))
    }
}

impl From<std::io::Error> for WordbookError {
    fn from(err: std::io::Error) -> Self {
        WordbookError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for WordbookError {
    fn from(err: serde_json::Error) -> Self {
        WordbookError::Storage(format!("Malformed document: {}", err))
    }
}

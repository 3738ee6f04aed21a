//! # Wordbook Core
//!
//! Core library for Wordbook - a small vocabulary notebook that pairs words or
//! expressions with their explanations and keeps them in a single JSON document.
//!
//! This crate provides the data model, the entry store and its persistence,
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: Entry model, document backends, and the `EntryStore`
//! - **query**: Case-insensitive substring search over entries
//! - **fs**: Atomic write helpers
//! - **error**: Validation and storage errors

pub mod error;
pub mod fs;
pub mod query;
pub mod storage;

pub use error::{Result, WordbookError};
pub use storage::{DocumentBackend, Entry, EntryStore, JsonFileBackend, StoreState};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File name of the persisted document inside the data directory.
pub const DOCUMENT_FILE_NAME: &str = "WordEntries.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_file_name_is_json() {
        assert!(DOCUMENT_FILE_NAME.ends_with(".json"));
    }
}

//! JSON file backend.
//!
//! Keeps the document as a single file on local storage and replaces it with
//! a temp-file-then-rename write on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, WordbookError};
use crate::storage::traits::DocumentBackend;

/// File-backed document storage.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentBackend for JsonFileBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(WordbookError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                err
            ))),
        }
    }

    fn write(&self, data: &[u8]) -> Result<()> {
        crate::fs::write_atomic(&self.path, data)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

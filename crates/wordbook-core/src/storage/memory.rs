//! In-memory document backend.
//!
//! Useful for previews and tests. Clones share the same document, so a
//! caller can keep a handle and inspect what the store wrote.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Result, WordbookError};
use crate::storage::traits::DocumentBackend;

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    document: Arc<Mutex<Option<Vec<u8>>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryBackend {
    /// Backend with no document yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that already holds `bytes`.
    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = Self::default();
        backend.replace(Some(bytes.into()));
        backend
    }

    /// Current document bytes, if any.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.document
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make every subsequent read fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent write fail, leaving the current document intact.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn replace(&self, bytes: Option<Vec<u8>>) {
        *self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = bytes;
    }
}

impl DocumentBackend for MemoryBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(WordbookError::Storage("Simulated read failure".to_string()));
        }
        Ok(self.contents())
    }

    fn write(&self, data: &[u8]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(WordbookError::Storage("Simulated write failure".to_string()));
        }
        self.replace(Some(data.to_vec()));
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_document() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();

        backend.write(b"[]").unwrap();

        assert_eq!(handle.contents().as_deref(), Some(&b"[]"[..]));
    }

    #[test]
    fn test_failed_write_keeps_previous() {
        let backend = MemoryBackend::with_document(b"[1]".to_vec());
        backend.set_fail_writes(true);

        assert!(backend.write(b"[2]").is_err());
        assert_eq!(backend.read().unwrap().as_deref(), Some(&b"[1]"[..]));
    }

    #[test]
    fn test_failed_read() {
        let backend = MemoryBackend::with_document(b"[]".to_vec());
        backend.set_fail_reads(true);
        assert!(backend.read().is_err());
    }
}

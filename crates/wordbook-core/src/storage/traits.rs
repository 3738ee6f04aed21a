//! Document backend trait definition.
//!
//! The `DocumentBackend` trait is the only way the store reaches persisted
//! state. It moves opaque bytes; encoding the entries is the store's job.

use crate::error::Result;

/// Backend that holds the single persisted document.
///
/// All implementations must ensure:
/// - `write` replaces the whole document atomically: a reader sees either the
///   previous or the new complete content, never a prefix
/// - a missing document is reported as `Ok(None)`, not as an error
pub trait DocumentBackend: Send + Sync {
    /// Read the full document.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(bytes))` if a document exists, `Ok(None)` if none has
    /// been written yet.
    ///
    /// # Errors
    ///
    /// Returns `WordbookError::Storage` if the document exists but cannot be read.
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the document with `data`.
    ///
    /// # Errors
    ///
    /// Returns `WordbookError::Storage` if the write fails. The previous
    /// document must still be intact afterwards.
    fn write(&self, data: &[u8]) -> Result<()>;

    /// Human-readable location, used in log fields and CLI output.
    fn location(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_boxed(_backend: Box<dyn DocumentBackend>) {}
    }
}

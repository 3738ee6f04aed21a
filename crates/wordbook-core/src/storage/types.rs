//! Core data types for the storage layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::Needle;

/// One vocabulary record.
///
/// Serialized as `{ "id": "<UUID>", "word": "...", "explanation": "..." }`.
/// This shape is the on-disk format; changing it breaks existing documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, generated at creation and never reused
    pub id: Uuid,

    /// Word or expression as typed by the user
    pub word: String,

    /// Explanation or translation
    pub explanation: String,
}

impl Entry {
    /// Create a new entry with a fresh identifier.
    ///
    /// Both fields are stored verbatim. Emptiness is checked by
    /// `EntryStore::add`, not here.
    pub fn create(word: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            word: word.into(),
            explanation: explanation.into(),
        }
    }

    /// Whether the word or the explanation contains the needle.
    pub fn matches(&self, needle: &Needle) -> bool {
        needle.is_found_in(&self.word) || needle.is_found_in(&self.explanation)
    }
}

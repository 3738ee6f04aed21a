//! Field validation for new entries.

use crate::error::{Result, WordbookError};

/// Reject a word/explanation pair if either side is empty or whitespace-only.
///
/// Only the check uses the trimmed text; the caller stores the original.
pub fn validate_entry_fields(word: &str, explanation: &str) -> Result<()> {
    match (is_blank(word), is_blank(explanation)) {
        (false, false) => Ok(()),
        (true, true) => Err(WordbookError::Validation(
            "word and explanation must not be empty".to_string(),
        )),
        (true, false) => Err(WordbookError::Validation(
            "word must not be empty".to_string(),
        )),
        (false, true) => Err(WordbookError::Validation(
            "explanation must not be empty".to_string(),
        )),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

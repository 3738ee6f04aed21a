//! Encoding of the entry sequence to and from the persisted JSON array.

use crate::error::Result;
use crate::storage::types::Entry;

/// Encode the whole sequence as a pretty-printed JSON array.
pub fn encode(entries: &[Entry]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(entries)?)
}

/// Decode a JSON array of entries, preserving array order.
///
/// # Errors
///
/// Returns `WordbookError::Storage` if the bytes are not a JSON array of
/// entry objects.
pub fn decode(bytes: &[u8]) -> Result<Vec<Entry>> {
    Ok(serde_json::from_slice(bytes)?)
}

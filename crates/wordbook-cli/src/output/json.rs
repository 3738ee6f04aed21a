//! JSON output formatting for entries.

use wordbook_core::Entry;

/// Convert an entry and its position to JSON for output.
pub fn entry_json(position: usize, entry: &Entry) -> serde_json::Value {
    serde_json::json!({
        "position": position,
        "id": entry.id,
        "word": entry.word,
        "explanation": entry.explanation,
    })
}

/// Convert positioned entries to a JSON array for output.
pub fn entries_json(entries: &[(usize, Entry)]) -> Vec<serde_json::Value> {
    entries
        .iter()
        .map(|(position, entry)| entry_json(*position, entry))
        .collect()
}

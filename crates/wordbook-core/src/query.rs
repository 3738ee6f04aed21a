//! Case-insensitive substring search over entries.
//!
//! Matching is a linear scan. Both the search text and the entry fields are
//! folded with `str::to_lowercase`, so the comparison is Unicode-aware and
//! symmetric. There is no ranking and no tokenization: results keep the
//! insertion order of the input.

use crate::storage::Entry;

/// Folded search text, built once per query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle {
    folded: String,
}

impl Needle {
    pub fn new(text: &str) -> Self {
        Self {
            folded: fold(text),
        }
    }

    /// An empty needle matches everything.
    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    /// Whether `haystack` contains this needle, ignoring case.
    pub fn is_found_in(&self, haystack: &str) -> bool {
        self.is_empty() || fold(haystack).contains(&self.folded)
    }
}

fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Entries whose word or explanation contains `text`, in their original order.
///
/// An empty `text` returns every entry unchanged.
pub fn filter(entries: &[Entry], text: &str) -> Vec<Entry> {
    filter_indexed(entries, text)
        .into_iter()
        .map(|(_, entry)| entry)
        .collect()
}

/// Like [`filter`], but each match carries its position in `entries`.
pub fn filter_indexed(entries: &[Entry], text: &str) -> Vec<(usize, Entry)> {
    let needle = Needle::new(text);
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| entry.matches(&needle))
        .map(|(position, entry)| (position, entry.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Entry> {
        vec![
            Entry::create("Ciao", "Hello"),
            Entry::create("Buongiorno", "Good morning"),
            Entry::create("Grazie", "Thanks"),
        ]
    }

    #[test]
    fn test_empty_text_returns_everything() {
        let entries = sample();
        assert_eq!(filter(&entries, ""), entries);
    }

    #[test]
    fn test_matches_word_case_insensitively() {
        let entries = sample();
        let found = filter(&entries, "ciao");
        assert_eq!(found, vec![entries[0].clone()]);
    }

    #[test]
    fn test_matches_explanation() {
        let entries = sample();
        let found = filter(&entries, "MORNING");
        assert_eq!(found, vec![entries[1].clone()]);
    }

    #[test]
    fn test_uppercase_needle_matches_lowercase_text() {
        let entries = sample();
        let words: Vec<_> = filter(&entries, "O")
            .into_iter()
            .map(|e| e.word)
            .collect();
        assert_eq!(words, vec!["Ciao", "Buongiorno"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&sample(), "xyz").is_empty());
    }

    #[test]
    fn test_unicode_folding() {
        let entries = vec![
            Entry::create("Über", "over"),
            Entry::create("ΣΟΦΙΑ", "wisdom"),
        ];
        assert_eq!(filter(&entries, "über").len(), 1);
        assert_eq!(filter(&entries, "σοφ").len(), 1);
    }

    #[test]
    fn test_whitespace_is_literal() {
        let entries = sample();
        let found = filter(&entries, "good m");
        assert_eq!(found.len(), 1);
        assert!(filter(&entries, " ").iter().all(|e| e.word == "Buongiorno"));
    }

    #[test]
    fn test_indexed_positions_refer_to_input() {
        let entries = sample();
        let found = filter_indexed(&entries, "thanks");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, 2);
        assert_eq!(found[0].1.word, "Grazie");
    }

    #[test]
    fn test_needle_is_empty() {
        assert!(Needle::new("").is_empty());
        assert!(!Needle::new(" ").is_empty());
    }
}

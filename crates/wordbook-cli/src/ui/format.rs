//! String formatting utilities for UI rendering.

use uuid::Uuid;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Collapse newlines and tabs so multi-line text fits on one table row.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format a short ID from a UUID (first 8 characters).
pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("ciao", 10), "ciao");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("buongiorno a tutti", 10), "buongio...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("perché così", 20), "perché così");
        assert_eq!(truncate("ありがとうございます", 5), "あり...");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("good\nmorning\t all"), "good morning all");
    }

    #[test]
    fn test_short_id() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(short_id(&id), "67e55044");
    }
}

//! Text and table output formatting for entries.

use wordbook_core::Entry;

use crate::constants::TABLE_EXPLANATION_MAX;
use crate::output::entries_json;
use crate::ui::format::single_line;
use crate::ui::theme::{styled, styles};
use crate::ui::{kv, print, simple_table, truncate, Column, UiContext};

const LIST_COLUMNS: [Column; 3] = [
    Column::new("#"),
    Column::new("Word"),
    Column::new("Explanation"),
];

/// Table rows for positioned entries.
///
/// Pretty mode truncates long explanations; plain mode keeps them whole on
/// one line so scripts can cut fields reliably.
pub fn entry_rows(ctx: &UiContext, entries: &[(usize, Entry)]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|(position, entry)| {
            let explanation = single_line(&entry.explanation);
            let explanation = if ctx.mode.is_pretty() {
                truncate(&explanation, TABLE_EXPLANATION_MAX)
            } else {
                explanation
            };
            vec![
                styled(&position.to_string(), styles::accent(), ctx.color),
                single_line(&entry.word),
                explanation,
            ]
        })
        .collect()
}

/// Print a list of positioned entries in the resolved output mode.
pub fn print_entry_list(
    ctx: &UiContext,
    entries: &[(usize, Entry)],
    quiet: bool,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries_json(entries))?);
        return Ok(());
    }

    if entries.is_empty() {
        if !quiet {
            print(ctx, "No entries found.");
        }
        return Ok(());
    }

    print(ctx, &simple_table(ctx, &LIST_COLUMNS, &entry_rows(ctx, entries)));
    Ok(())
}

/// Print a single entry in full: the word as the title, then the explanation.
pub fn print_entry(ctx: &UiContext, position: usize, entry: &Entry) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        let value = crate::output::entry_json(position, entry);
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ctx.mode.is_pretty() {
        println!("{}", styled(&entry.word, styles::bold(), ctx.color));
        println!();
        println!("{}", entry.explanation);
        println!();
        println!("{}", kv(ctx, "Position", &position.to_string()));
        println!("{}", kv(ctx, "ID", &entry.id.to_string()));
    } else {
        println!("{}", kv(ctx, "Position", &position.to_string()));
        println!("{}", kv(ctx, "ID", &entry.id.to_string()));
        println!("{}", kv(ctx, "Word", &entry.word));
        println!("{}", kv(ctx, "Explanation", &entry.explanation));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_keep_positions() {
        let entries = vec![
            (0, Entry::create("Ciao", "Hello")),
            (4, Entry::create("Grazie", "Thanks\nvery much")),
        ];
        let rows = entry_rows(&UiContext::plain(), &entries);
        assert_eq!(rows[0], vec!["0", "Ciao", "Hello"]);
        assert_eq!(rows[1], vec!["4", "Grazie", "Thanks very much"]);
    }

    #[test]
    fn test_plain_rows_are_not_truncated() {
        let long = "x".repeat(TABLE_EXPLANATION_MAX + 20);
        let entries = vec![(0, Entry::create("parola", long.clone()))];
        let rows = entry_rows(&UiContext::plain(), &entries);
        assert_eq!(rows[0][2], long);
    }
}

//! UI primitives for the Wordbook CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and text styles
//! - **Render**: Tables, headers, badges, hints, key-value lines, errors
//! - **Format**: String utilities (truncate, short ids)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{is_interactive, UiContext};
pub use mode::{OutputFormat, OutputMode};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, simple_table, Column,
};

pub use format::{short_id, truncate};

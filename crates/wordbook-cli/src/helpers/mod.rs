//! Input helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Filling in missing add-form fields interactively (`input`)
//! - Confirming destructive actions (`input`)

mod input;

// Re-export public API
pub use input::{confirm, resolve_field, FieldPrompt};

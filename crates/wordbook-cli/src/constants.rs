//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (entry position, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Message shown when a word or explanation is missing.
pub const FILL_BOTH_FIELDS: &str = "Please fill in both fields!";

/// Shown when `delete` cannot ask for confirmation.
pub const CONFIRM_DELETE_HINT: &str = "Hint: Pass --yes to delete without a prompt.";

/// Default number of rows shown by `list` when neither flag nor config set one.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// Maximum explanation width in table rows before truncation.
pub const TABLE_EXPLANATION_MAX: usize = 60;

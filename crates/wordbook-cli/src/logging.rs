//! Log subscriber setup.
//!
//! Diagnostics go to stderr so they never mix with command output. The filter
//! comes from `WORDBOOK_LOG` (EnvFilter syntax) when set, otherwise from the
//! `-v` count.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an EnvFilter directive.
pub const LOG_ENV: &str = "WORDBOOK_LOG";

/// Default directive for a given `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

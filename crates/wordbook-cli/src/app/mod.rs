//! Application-level utilities for the Wordbook CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the wordbook document
//! - A per-invocation context with lazily loaded config

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::resolve_config_path;

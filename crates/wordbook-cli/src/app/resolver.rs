//! Path resolution for config and document files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_document_path, WordbookConfig};

/// Resolve the config file path, checking WORDBOOK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("WORDBOOK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the document path.
///
/// Order: `--file` / `WORDBOOK_PATH`, then the config file, then the default
/// data location. A missing config is not an error.
pub fn resolve_document_path(
    file_flag: Option<&str>,
    config: Option<&WordbookConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = file_flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        return Ok(PathBuf::from(&config.wordbook.path));
    }
    default_document_path()
}

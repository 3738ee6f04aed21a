//! Application context for the Wordbook CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use wordbook_core::EntryStore;

use crate::cli::Cli;
use crate::config::{read_config, WordbookConfig};
use crate::ui::{OutputFormat, UiContext};

use super::resolver::{resolve_config_path, resolve_document_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<WordbookConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the parsed CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily. `None` if there is
    /// no config file.
    pub fn config(&self) -> anyhow::Result<Option<&WordbookConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file");
                return Ok::<_, anyhow::Error>(None);
            }
            read_config(&path).map(Some)
        })?;
        Ok(config.as_ref())
    }

    /// Resolved path of the wordbook document.
    pub fn document_path(&self) -> anyhow::Result<PathBuf> {
        resolve_document_path(self.cli.file.as_deref(), self.config()?)
    }

    /// Row limit for `list` from the config file, if set.
    pub fn list_limit(&self) -> anyhow::Result<Option<usize>> {
        Ok(self.config()?.and_then(|config| config.ui.list_limit))
    }

    /// Open the entry store for this invocation.
    pub fn open_store(&self) -> anyhow::Result<EntryStore> {
        let path = self.document_path()?;
        tracing::debug!(path = %path.display(), "opening wordbook");
        Ok(EntryStore::open(path))
    }

    /// Build a UI context honoring the global output flags.
    ///
    /// # Errors
    ///
    /// Returns an error if `format` is not a known output format.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        let format = format.map(str::parse::<OutputFormat>).transpose()?;
        Ok(UiContext::from_env(
            json,
            format,
            self.cli.no_color,
            self.cli.ascii,
        ))
    }
}

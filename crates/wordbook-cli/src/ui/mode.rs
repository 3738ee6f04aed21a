//! Output mode routing logic.

use std::str::FromStr;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Human-friendly with colors and a table layout (TTY only)
    Pretty,
}

/// Value of the `--format` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "plain" => Ok(Self::Plain),
            other => Err(anyhow::anyhow!(
                "Invalid format: {} (use table or plain)",
                other
            )),
        }
    }
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins outright. `--format plain` and `TERM=dumb` force plain.
    /// Otherwise pretty on a TTY, plain everywhere else; `--format table`
    /// cannot force pretty output into a pipe.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        match format {
            Some(OutputFormat::Plain) => Self::Plain,
            _ if term_is_dumb || !is_tty => Self::Plain,
            _ => Self::Pretty,
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

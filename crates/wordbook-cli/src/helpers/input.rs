//! Input handling helpers for the add form and confirmations.

use dialoguer::{Confirm, Input};

/// One field of the add form.
#[derive(Debug, Clone, Copy)]
pub enum FieldPrompt {
    Word,
    Explanation,
}

impl FieldPrompt {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Word => "Word or Expression",
            Self::Explanation => "Explanation or Translation",
        }
    }
}

/// Use the value given on the command line, or ask for it.
///
/// Without a terminal (or with `--no-input`) a missing value becomes the
/// empty string so the store's validation reports it.
pub fn resolve_field(
    field: FieldPrompt,
    value: Option<&str>,
    interactive: bool,
) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }
    if !interactive {
        return Ok(String::new());
    }
    Input::<String>::new()
        .with_prompt(field.label())
        .allow_empty(true)
        .interact_text()
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", field.label(), e))
}

/// Ask a yes/no question. Non-interactive sessions get `default`.
pub fn confirm(prompt: &str, default: bool, interactive: bool) -> anyhow::Result<bool> {
    if !interactive {
        return Ok(default);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

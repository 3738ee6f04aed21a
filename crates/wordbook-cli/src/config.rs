use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use wordbook_core::DOCUMENT_FILE_NAME;

#[derive(Debug, Serialize, Deserialize)]
pub struct WordbookConfig {
    pub wordbook: WordbookSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WordbookSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct UiSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_limit: Option<usize>,
}

impl WordbookConfig {
    pub fn new(document_path: PathBuf) -> Self {
        Self {
            wordbook: WordbookSection {
                path: document_path.to_string_lossy().to_string(),
            },
            ui: UiSection::default(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_document_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(DOCUMENT_FILE_NAME))
}

pub fn read_config(path: &Path) -> anyhow::Result<WordbookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &WordbookConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wordbook"));
        }
    }
    Ok(home_dir()?.join(".config").join("wordbook"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("wordbook"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("wordbook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exported inbox file read by the file-backed store (JSON or YAML)
    pub inbox_path: String,
    pub read_permission: bool,
    pub dark_theme: bool,
    pub timestamp_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            inbox_path: "inbox.json".to_string(),
            read_permission: true,
            dark_theme: false,
            timestamp_format: "%b %d, %Y %H:%M".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Config {
    match Config::from_file(&path) {
        Ok(config) => {
            log::info!("Loaded configuration from: {}", path.as_ref().display());
            config
        }
        Err(e) => {
            log::warn!("Failed to load config ({e:#}), using defaults");
            Config::default()
        }
    }
}

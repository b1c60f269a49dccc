//! Application configuration management.
//!
//! This module handles loading and saving the application configuration:
//! the display name for the home greeting, the AI model to call, and an
//! optional page to open on startup.
//!
//! Configuration is stored at `~/.config/vitalog/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/data directory paths
const APP_NAME: &str = "vitalog";

/// Config file name
const CONFIG_FILE: &str = "config.json";

fn default_ai_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub display_name: Option<String>,
    #[serde(default = "default_ai_model")]
    pub ai_model: String,
    /// Navigation token resolved on startup; unknown tokens land on home.
    pub start_page: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_name: None,
            ai_model: default_ai_model(),
            start_page: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Root for everything the application persists: the key-value store
    /// under `store/`, page templates under `pages/`.
    pub fn data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}

//! Configuration, read from `~/.config/toondex/config.toml` at startup.
//! A missing file means defaults; missing fields fall back per-section.

use std::path::PathBuf;

use serde::Deserialize;

use crate::app::{Result, ToondexError};
use crate::browser::SessionConfig;

/// Default listing API endpoint.
const DEFAULT_ENDPOINT: &str = "https://korea-webtoon-api.herokuapp.com";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub listing: ListingConfig,
    pub store: StoreConfig,
    pub browser: SessionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Base URL of the listing API.
    pub endpoint: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Database file path; defaults to the platform data directory.
    pub db_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::default_config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content)
            .map_err(|e| ToondexError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ToondexError::Config("Could not find config directory".into()))?;
        Ok(config_dir.join("toondex").join("config.toml"))
    }
}

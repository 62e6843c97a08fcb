//! Configuration file management.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use skycast_types::Units;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeatherMap API key
    #[serde(default)]
    pub api_key: Option<String>,

    /// City searched when no previous search is stored
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Unit system ("metric" or "imperial")
    #[serde(default)]
    pub units: Option<Units>,

    /// Last successfully searched city (auto-updated)
    #[serde(default)]
    pub last_city: Option<String>,
}

fn default_city() -> String {
    "London".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_city: default_city(),
            units: None,
            last_city: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skycast")
            .join("config.toml")
    }

    /// Load config from file, or return default if not found
    pub fn load() -> Self {
        let path = Self::path();
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config: {}", e);
                    }
                },
                Err(e) => {
                    eprintln!("Warning: Failed to read config: {}", e);
                }
            }
        }
        Self::default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// City to pre-populate the search field with: last searched, falling
    /// back to the configured default.
    pub fn initial_city(&self) -> String {
        self.last_city
            .clone()
            .unwrap_or_else(|| self.default_city.clone())
    }
}

/// Update the last searched city in config.
/// This is called after a successful render.
pub fn update_last_city(city: &str) -> Result<()> {
    let mut config = Config::load();
    config.last_city = Some(city.to_string());
    config.save()
}

/// Resolve units from arg or config, defaulting to metric.
pub fn resolve_units(units: Option<Units>, config: &Config) -> Units {
    units.or(config.units).unwrap_or_default()
}

/// Resolve the API key from arg/env or config.
pub fn resolve_api_key(api_key: Option<String>, config: &Config) -> Option<String> {
    api_key.or_else(|| config.api_key.clone())
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use tracing::warn;

use crate::{credential::CredentialProvider, model::DisplayUnit};

/// Value shipped in the sample config; never a real key.
pub const API_KEY_PLACEHOLDER: &str = "your_openweathermap_api_key_here";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// default_unit = "fahrenheit"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    #[serde(default)]
    pub default_unit: DisplayUnit,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Like [`Config::load`], but an unreadable or corrupt file yields the
    /// default config so the caller can still prompt for a key or rewrite it.
    pub fn load_or_default() -> Self {
        match Self::config_file_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                warn!(error = %e, "No config location; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            warn!(error = format!("{e:#}"), "Ignoring unusable config file");
            Self::default()
        })
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    /// Returns the API key unless it is blank or still the placeholder.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != API_KEY_PLACEHOLDER)
    }
}

impl CredentialProvider for Config {
    fn api_key(&self) -> Option<String> {
        self.usable_api_key().map(str::to_owned)
    }
}

use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::model::Unit;

/// Environment variable that overrides the API key from the config file.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Sent when no key is configured. The provider rejects it.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Longest auto-refresh period accepted from the config file.
pub const MAX_REFRESH_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// units = "imperial"
/// auto_refresh = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_key: Option<String>,

    /// Overrides the provider endpoint, e.g. for a local mock.
    pub base_url: Option<String>,

    pub units: Option<Unit>,

    pub auto_refresh: Option<bool>,

    pub refresh_interval_secs: Option<u64>,
}

/// Everything the provider needs, resolved once and passed in at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ClientConfig {
    /// `env_api_key` is the value of [`API_KEY_ENV`], if set.
    pub fn resolve(config: &Config, env_api_key: Option<String>) -> Self {
        let api_key = env_api_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| config.api_key.clone().filter(|k| !k.trim().is_empty()))
            .unwrap_or_else(|| {
                tracing::warn!(
                    "no API key configured; set {} or run `weather-dashboard configure`",
                    API_KEY_ENV
                );
                PLACEHOLDER_API_KEY.to_string()
            });

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self { api_key, base_url }
    }

    /// Resolves against the process environment.
    pub fn from_env(config: &Config) -> Self {
        Self::resolve(config, std::env::var(API_KEY_ENV).ok())
    }
}

impl Config {
    pub fn unit(&self) -> Unit {
        self.units.unwrap_or_default()
    }

    /// Auto-refresh is on unless turned off.
    pub fn auto_refresh(&self) -> bool {
        self.auto_refresh.unwrap_or(true)
    }

    /// Zero means the default; values above [`MAX_REFRESH_INTERVAL`] are capped.
    pub fn refresh_interval(&self) -> Duration {
        match self.refresh_interval_secs {
            Some(secs) if secs > 0 => Duration::from_secs(secs).min(MAX_REFRESH_INTERVAL),
            _ => DEFAULT_REFRESH_INTERVAL,
        }
    }

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

        let max_secs = MAX_REFRESH_INTERVAL.as_secs();
        if let Some(secs) = cfg.refresh_interval_secs.filter(|secs| *secs > max_secs) {
            bail!(
                "Invalid config file {}: refresh_interval_secs = {secs} exceeds {max_secs} seconds",
                path.display(),
            );
        }

        Ok(cfg)
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
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "weather-dashboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

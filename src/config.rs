//! Configuration management for dashterm
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    API_URL_ENV, DEFAULT_BASE_URL, MAX_AUTO_REFRESH_MINUTES, MAX_REQUEST_TIMEOUT_SECS, NEWS_PREVIEW_MAX_CHARS,
    NEWS_PREVIEW_MIN_CHARS,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub refresh: RefreshConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the dashboard backend
    pub base_url: String,
    /// Per-request timeout in seconds (0 = wait forever)
    pub request_timeout_secs: u64,
}

/// Refresh configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RefreshConfig {
    /// Auto-refresh interval in minutes (0 = disabled, fetch once on startup)
    pub auto_refresh_interval_minutes: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show priority badges next to tasks
    pub show_priorities: bool,
    /// Show task due dates
    pub show_due_dates: bool,
    /// Characters of article text shown before "read more"
    pub news_preview_chars: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
    /// Log file location; defaults to the user cache directory
    pub file: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_priorities: true,
            show_due_dates: true,
            news_preview_chars: 160,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

impl RefreshConfig {
    pub fn interval(&self) -> Option<Duration> {
        (self.auto_refresh_interval_minutes > 0).then(|| Duration::from_secs(self.auto_refresh_interval_minutes * 60))
    }
}

impl Config {
    /// Load configuration from file or defaults, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_file() {
            Some(path) => Self::load_from_file(&path)?,
            None => Self::default(),
        };

        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_base_url_override(url)?;
        }

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Replace the backend URL (from `DASHTERM_API_URL`) and re-validate
    pub fn apply_base_url_override(&mut self, url: String) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(());
        }
        self.api.base_url = url.to_string();
        self.validate()
            .with_context(|| format!("Invalid {} value", API_URL_ENV))
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("dashterm.toml");
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url)
            .with_context(|| format!("Invalid api.base_url '{}'", self.api.base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!("api.base_url must use http or https, got '{}'", url.scheme());
        }

        if self.api.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            anyhow::bail!(
                "request_timeout_secs cannot exceed {}, got {}",
                MAX_REQUEST_TIMEOUT_SECS,
                self.api.request_timeout_secs
            );
        }

        if self.refresh.auto_refresh_interval_minutes > MAX_AUTO_REFRESH_MINUTES {
            anyhow::bail!("auto_refresh_interval_minutes cannot exceed {} (24 hours)", MAX_AUTO_REFRESH_MINUTES);
        }

        let preview = self.display.news_preview_chars;
        if !(NEWS_PREVIEW_MIN_CHARS..=NEWS_PREVIEW_MAX_CHARS).contains(&preview) {
            anyhow::bail!(
                "news_preview_chars must be between {} and {}, got {}",
                NEWS_PREVIEW_MIN_CHARS,
                NEWS_PREVIEW_MAX_CHARS,
                preview
            );
        }

        Ok(())
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dashterm").join("config.toml"))
    }
}

use crate::constants::{DEFAULT_API_BASE_URL, DEFAULT_STATS_BASE_URL, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the web API, including the `/v1` suffix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL of the stats REST API used for player stat reports.
    #[serde(default = "default_stats_base_url")]
    pub stats_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_stats_base_url() -> String {
    DEFAULT_STATS_BASE_URL.to_string()
}

fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            stats_base_url: default_stats_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// The API is public, so a missing file simply means defaults.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `NHL_API_BASE_URL` - Override web API base URL
    /// - `NHL_STATS_BASE_URL` - Override stats REST base URL
    /// - `NHL_LOG_FILE` - Override log file path
    /// - `NHL_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            debug!("Loading config from {config_path}");
            Self::load_from_path(&config_path).await?
        } else {
            debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Replaces fields with values from the `NHL_*` environment variables.
    /// Unparseable timeout values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::STATS_BASE_URL) {
            self.stats_base_url = url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await?;
        info!("Configuration saved to {config_path}");
        Ok(())
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Renders the current configuration for `--list-config`.
    pub fn describe(&self, config_path: &str) -> String {
        let separator = "─".repeat(36);
        let log_location = match &self.log_file_path {
            Some(custom_path) => custom_path.clone(),
            None => format!(
                "{}/{}.log\n(Default location)",
                get_log_dir_path(),
                crate::constants::APP_NAME
            ),
        };

        [
            "\nCurrent Configuration".to_string(),
            separator.clone(),
            "Config Location:".to_string(),
            config_path.to_string(),
            separator.clone(),
            "API Base URL:".to_string(),
            self.api_base_url.clone(),
            separator.clone(),
            "Stats Base URL:".to_string(),
            self.stats_base_url.clone(),
            separator.clone(),
            "HTTP Timeout:".to_string(),
            format!("{} seconds", self.http_timeout_seconds),
            separator,
            "Log File Location:".to_string(),
            log_location,
        ]
        .join("\n")
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("{}", config.describe(&config_path));
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("(Using built-in defaults)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating parent directories
    /// as needed. Base URLs are stored without a trailing slash.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            stats_base_url: self.stats_base_url.trim_end_matches('/').to_string(),
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

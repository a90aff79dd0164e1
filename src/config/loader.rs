use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, FetcherMode};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pokecache/config.toml` on Unix/macOS, or the
    /// equivalent from `dirs::config_dir()` elsewhere. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pokecache").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The busy delay does not exceed the transition timeout
    /// - Timeouts are non-zero
    /// - An endpoint is set in graphql mode
    pub fn validate(&self) -> Result<(), ConfigError> {
        let suspense = &self.suspense;
        if suspense.timeout_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "suspense.timeout_ms must be greater than zero".to_string(),
            });
        }

        if suspense.busy_delay_ms > suspense.timeout_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "suspense.busy_delay_ms ({}) must not exceed suspense.timeout_ms ({})",
                    suspense.busy_delay_ms, suspense.timeout_ms
                ),
            });
        }

        let fetcher = &self.fetcher;
        if fetcher.request_timeout_seconds == 0 || fetcher.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "fetcher timeouts must be greater than zero".to_string(),
            });
        }

        if fetcher.mode == FetcherMode::Graphql && fetcher.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "fetcher.endpoint is required in graphql mode".to_string(),
            });
        }

        Ok(())
    }
}

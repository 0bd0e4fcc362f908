use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::credentials::ApiKey;
use crate::config::types::{Config, MAX_SEARCH_LIMIT};

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
    /// Uses `~/.config/gif-market/config.toml` on Linux, or the equivalent
    /// on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("gif-market").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, starts from `Config::default()`.
    /// - `GIPHY_API_KEY` replaces any key found in the file.
    /// - The result is validated before being returned.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::read_file(path)?;
        if let Some(key) = ApiKey::from_env() {
            config.provider.api_key = Some(key);
        }
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - An API key is present and not blank
    /// - The result limit is within 1..=50
    /// - Timeout and tick rate are non-zero
    /// - The promotional price is not negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_key = self
            .provider
            .api_key
            .as_ref()
            .is_some_and(|key| !key.is_blank());
        if !has_key {
            return Err(ConfigError::ValidationError {
                message: "Giphy API key is missing; set provider.api_key or GIPHY_API_KEY"
                    .to_string(),
            });
        }

        if self.provider.limit == 0 || self.provider.limit > MAX_SEARCH_LIMIT {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "provider.limit must be between 1 and {}, got {}",
                    MAX_SEARCH_LIMIT, self.provider.limit
                ),
            });
        }

        if self.provider.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "provider.timeout_seconds must be greater than zero".to_string(),
            });
        }

        if self.shop.promotion_price.is_sign_negative() {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "shop.promotion_price must not be negative, got {}",
                    self.shop.promotion_price
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

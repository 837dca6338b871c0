//! Storefront configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::env;

use crate::state::theme::Theme;

/// Storefront application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite database file path
    pub database_path: String,

    /// News API base URL (headline fetch endpoint)
    pub news_api_url: String,

    /// News API key (headlines are skipped when absent)
    pub news_api_key: Option<String>,

    /// Country code for headline queries
    pub news_country: String,

    /// HTTP timeout for outbound requests, in seconds
    pub http_timeout_secs: u64,

    /// Theme applied before the user picks one
    pub default_theme: Theme,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let default_theme = match env::var("VELD_DEFAULT_THEME")
            .unwrap_or_else(|_| "light".to_string())
            .as_str()
        {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            _ => return Err(ConfigError::InvalidValue("VELD_DEFAULT_THEME".to_string())),
        };

        let config = AppConfig {
            database_path: env::var("VELD_DB_PATH").unwrap_or_else(|_| "./veld.db".to_string()),

            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| "https://newsapi.org/v2/top-headlines".to_string()),

            news_api_key: env::var("NEWS_API_KEY").ok().filter(|k| !k.is_empty()),

            news_country: env::var("NEWS_COUNTRY").unwrap_or_else(|_| "za".to_string()),

            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HTTP_TIMEOUT_SECS".to_string()))?,

            default_theme,
        };

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

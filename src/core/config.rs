//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, asset directories) still come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

use thiserror::Error;

pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_ASSET_MAX_AGE_SECS: u64 = 86_400;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (1/0, true/false, yes/no, on/off), got {value:?}")]
    InvalidBool { key: &'static str, value: String },

    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber` filter directive (`RUST_LOG`)
    pub log_filter: String,

    /// Compress responses (`TEKGEO_COMPRESSION`)
    pub compression: bool,

    /// `Cache-Control: max-age` for `/pkg` assets (`TEKGEO_ASSET_MAX_AGE`)
    pub asset_max_age_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or blank values fall back
    /// to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let log_filter = get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let compression = match get("TEKGEO_COMPRESSION") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidBool {
                key: "TEKGEO_COMPRESSION",
                value,
            })?,
            None => true,
        };

        let asset_max_age_secs = match get("TEKGEO_ASSET_MAX_AGE") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber {
                key: "TEKGEO_ASSET_MAX_AGE",
                value,
            })?,
            None => DEFAULT_ASSET_MAX_AGE_SECS,
        };

        Ok(Self {
            log_filter,
            compression,
            asset_max_age_secs,
        })
    }

    /// `Cache-Control` header value for static assets
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.asset_max_age_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            asset_max_age_secs: DEFAULT_ASSET_MAX_AGE_SECS,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

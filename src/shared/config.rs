use std::path::PathBuf;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

/// Default sheet endpoint serving the job rows as a JSON array.
const DEFAULT_API_URL: &str =
    "https://api.sheetbest.com/sheets/f046c6f6-2a09-44f9-8195-23d42d4038aa";

/// Cache entries older than this read as absent (15 minutes).
const DEFAULT_CACHE_TTL_SECS: u64 = 900;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration for the job board core
///
/// Externalizes the endpoint URL, cache location and timing knobs so the
/// pipeline is configurable and testable without touching code.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote tabular data endpoint returning a JSON array of raw job rows
    pub api_url: String,

    /// Directory holding the persisted job cache and theme preference
    pub cache_dir: PathBuf,

    /// Maximum age of a cache entry before it reads as absent
    pub cache_ttl: Duration,

    /// Timeout applied to every fetch request
    pub http_timeout: Duration,

    /// User agent sent with fetch requests
    pub user_agent: String,

    /// Fall back to the built-in seed set when the network fails and no
    /// cache entry exists at all
    pub seed_on_failure: bool,
}

impl AppConfig {
    /// Creates a configuration with production defaults
    pub fn new() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_dir: PathBuf::from(".loker"),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: "Loker-Job-Board/1.0".to_string(),
            seed_on_failure: true,
        }
    }

    /// Builds the configuration from environment variables, starting from
    /// the defaults. Recognized variables:
    ///
    /// - `LOKER_API_URL`
    /// - `LOKER_CACHE_DIR`
    /// - `LOKER_CACHE_TTL_SECS`
    /// - `LOKER_HTTP_TIMEOUT_SECS`
    /// - `LOKER_SEED_ON_FAILURE` ("true"/"false")
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("LOKER_API_URL") {
            config.api_url = url;
        }
        if let Ok(dir) = std::env::var("LOKER_CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Ok(secs) = std::env::var("LOKER_CACHE_TTL_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                AppError::ConfigError(format!("LOKER_CACHE_TTL_SECS is not a number: {}", secs))
            })?;
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Ok(secs) = std::env::var("LOKER_HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                AppError::ConfigError(format!("LOKER_HTTP_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.http_timeout = Duration::from_secs(secs);
        }
        if let Ok(flag) = std::env::var("LOKER_SEED_ON_FAILURE") {
            config.seed_on_failure = match flag.to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                other => {
                    return Err(AppError::ConfigError(format!(
                        "LOKER_SEED_ON_FAILURE must be true or false, got {}",
                        other
                    )))
                }
            };
        }

        config
            .validate()
            .map_err(AppError::ConfigError)?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_url.trim().is_empty() {
            return Err("api_url must not be empty".to_string());
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(format!("api_url must be an http(s) URL, got {}", self.api_url));
        }

        if self.cache_ttl.is_zero() {
            return Err("cache_ttl must be > 0".to_string());
        }

        if self.http_timeout.is_zero() {
            return Err("http_timeout must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Response error: {0}")]
    ResponseError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Store error: {0}")]
    StoreError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::NetworkError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::NetworkError("Failed to connect to data source".to_string())
        } else if let Some(status) = err.status() {
            AppError::ResponseError(format!("HTTP {}: {}", status, err))
        } else if err.is_decode() {
            AppError::ParseError(err.to_string())
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

//! Error types for VulnX

use thiserror::Error;

/// Main error type for VulnX operations
#[derive(Debug, Error)]
pub enum VulnxError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Scanner error: {0}")]
    ScanError(String),
}

/// Result type alias for VulnX operations
pub type Result<T> = std::result::Result<T, VulnxError>;

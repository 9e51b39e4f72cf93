//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Request timeout must be between 1 and {0} seconds")]
    InvalidTimeout(u64),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool size {0} is outside 1..={1}")]
    PoolSize(u32, u32),

    #[error("JWT secret must be at least {0} bytes")]
    SecretTooShort(usize),

    #[error("Schedule palette must not be empty")]
    EmptyPalette,
}

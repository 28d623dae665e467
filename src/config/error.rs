//! Configuration errors.
//!
//! Loading and validation fail separately: `ConfigError` covers the env
//! deserialization path, `ValidationError` the per-section `validate()`
//! checks that run after a successful load.

use thiserror::Error;

/// Top-level configuration failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration is invalid: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A configuration value that loaded but does not make sense.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("required setting is missing: {0}")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("timeout must be within its allowed range")]
    InvalidTimeout,

    #[error("database URL must be a postgres:// or postgresql:// URL")]
    InvalidDatabaseUrl,

    #[error("pool min_connections must not exceed max_connections")]
    InvalidPoolSize,

    #[error("pool max_connections exceeds the allowed ceiling")]
    PoolSizeTooLarge,

    #[error("AI base URL must start with http:// or https://")]
    InvalidAiBaseUrl,
}

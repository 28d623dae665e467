//! Typed application configuration.
//!
//! All settings come from the environment (plus a `.env` file in
//! development), carried under the `SENTIMENT_CHAT` prefix with `__`
//! between section and field. Each section deserializes into its own
//! struct with defaults and a `validate()` pass.
//!
//! # Example
//!
//! ```no_run
//! use sentiment_chat::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root configuration for the sentiment chat service.
///
/// Built by [`AppConfig::load()`]; `server` and `ai` fall back to their
/// defaults, `database` requires at least a URL.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// AI completion configuration (OpenRouter)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// A `.env` file is read first when present, then variables of the
    /// form `SENTIMENT_CHAT__<SECTION>__<FIELD>`:
    ///
    /// - `SENTIMENT_CHAT__SERVER__PORT=8000` -> `server.port`
    /// - `SENTIMENT_CHAT__DATABASE__URL=...` -> `database.url`
    /// - `SENTIMENT_CHAT__AI__OPENROUTER_API_KEY=...` -> `ai.openrouter_api_key`
    ///
    /// # Errors
    ///
    /// Fails when a required variable is absent or a value does not
    /// parse into its field's type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SENTIMENT_CHAT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Runs every section's `validate()`.
    ///
    /// # Errors
    ///
    /// Returns the first failing section's `ValidationError`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// True when the server section says production.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

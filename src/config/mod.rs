//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `PRAVODOC`
//! prefix and nested keys use double underscores as separators, e.g.
//! `PRAVODOC__LIMITS__MONTHLY_DOCUMENT_LIMIT=10`.

mod database;
mod documents;
mod error;
mod limits;

pub use database::DatabaseConfig;
pub use documents::DocumentsConfig;
pub use error::{ConfigError, ValidationError};
pub use limits::LimitsConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Usage-ledger database (SQLite).
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Template and font resource directories, disclaimer text.
    #[serde(default)]
    pub documents: DocumentsConfig,

    /// Quota limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development), then reads
    /// `PRAVODOC__*` variables into the typed sections.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PRAVODOC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.database.validate()?;
        self.documents.validate()?;
        self.limits.validate()?;
        Ok(())
    }
}

//! Database configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Usage-ledger database configuration (SQLite).
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL.
    #[serde(default = "default_url")]
    pub url: String,

    /// Maximum pool connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.url.is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE_URL"));
        }
        if !self.url.starts_with("sqlite:") {
            return Err(ValidationError::InvalidDatabaseUrl);
        }
        if self.max_connections > 100 {
            return Err(ValidationError::PoolSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_url() -> String {
    "sqlite://data/usage_limits.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(DatabaseConfig::default().validate().is_ok());
    }

    #[test]
    fn non_sqlite_url_is_rejected() {
        let config = DatabaseConfig {
            url: "postgres://localhost/test".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_pool_is_rejected() {
        let config = DatabaseConfig {
            max_connections: 150,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}

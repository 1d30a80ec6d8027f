//! SQLite persistence adapters.

mod quota_tracker;

pub use quota_tracker::SqliteQuotaTracker;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::config::DatabaseConfig;
use crate::ports::QuotaError;

/// Opens the pool and applies migrations.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, QuotaError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| QuotaError::Database(e.to_string()))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .map_err(|e| QuotaError::Database(e.to_string()))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| QuotaError::Database(e.to_string()))?;

    Ok(pool)
}

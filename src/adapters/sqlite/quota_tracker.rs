//! SQLite implementation of the QuotaTracker port.
//!
//! Each generation appends one row; permission decisions run a fresh
//! `COUNT(*)` over the month window. Two concurrent inserts for the same
//! user both land because there is no read-modify-write cycle anywhere.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{Clock, QuotaDecision, QuotaError, QuotaTracker};

/// Durable monthly usage ledger over SQLite.
pub struct SqliteQuotaTracker {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl SqliteQuotaTracker {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[async_trait]
impl QuotaTracker for SqliteQuotaTracker {
    async fn record_usage(&self, user_id: UserId, at: Timestamp) -> Result<(), QuotaError> {
        sqlx::query("INSERT INTO usage_records (user_id, created_at) VALUES (?1, ?2)")
            .bind(user_id.as_i64())
            .bind(at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| QuotaError::Database(e.to_string()))?;
        Ok(())
    }

    async fn count_since(&self, user_id: UserId, start: Timestamp) -> Result<u32, QuotaError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM usage_records WHERE user_id = ?1 AND created_at >= ?2",
        )
        .bind(user_id.as_i64())
        .bind(start.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| QuotaError::Database(e.to_string()))?;

        Ok(count as u32)
    }

    async fn can_create(&self, user_id: UserId, limit: u32) -> Result<QuotaDecision, QuotaError> {
        let start = self.clock.now().start_of_month();
        let used = self.count_since(user_id, start).await?;
        Ok(QuotaDecision {
            allowed: used < limit,
            used,
            remaining: limit.saturating_sub(used),
        })
    }
}

//! QuotaTracker port - the durable monthly usage ledger.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{Timestamp, UserId};

/// Outcome of a quota check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaDecision {
    /// Whether another document may be generated this month.
    pub allowed: bool,
    /// Records counted in the current window.
    pub used: u32,
    /// Remaining-count hint for display.
    pub remaining: u32,
}

/// Port for the append-only usage ledger.
///
/// The ledger is the authoritative source for permission decisions. Counts
/// are always derived by a fresh aggregate query over the records, never
/// from a cached counter, so concurrent inserts cannot lose updates and
/// clock skew cannot corrupt a stored total.
#[async_trait]
pub trait QuotaTracker: Send + Sync {
    /// Appends one usage record. Durable across process restarts.
    async fn record_usage(&self, user_id: UserId, at: Timestamp) -> Result<(), QuotaError>;

    /// Counts records for `user_id` with `created_at >= start`.
    async fn count_since(&self, user_id: UserId, start: Timestamp) -> Result<u32, QuotaError>;

    /// True iff the count since the start of the current UTC month is
    /// below `limit`.
    async fn can_create(&self, user_id: UserId, limit: u32) -> Result<QuotaDecision, QuotaError>;
}

/// Errors from the usage ledger.
#[derive(Debug, Error)]
pub enum QuotaError {
    /// The persistent store could not be reached or the query failed.
    #[error("usage ledger unavailable: {0}")]
    Database(String),
}

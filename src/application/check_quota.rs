//! CheckQuotaHandler - standalone quota query for the collaborator layer.

use std::sync::Arc;

use tracing::warn;

use crate::domain::foundation::UserId;
use crate::ports::{QuotaDecision, QuotaError, QuotaTracker};

/// Handler answering "may this user generate another document?".
///
/// Same fail-closed policy as the generation gate: one retry on ledger
/// failure, then the error surfaces and the caller must deny.
pub struct CheckQuotaHandler {
    quota: Arc<dyn QuotaTracker>,
    default_limit: u32,
}

impl CheckQuotaHandler {
    pub fn new(quota: Arc<dyn QuotaTracker>, default_limit: u32) -> Self {
        Self {
            quota,
            default_limit,
        }
    }

    /// Checks the user against `limit`, or the configured monthly limit
    /// when none is supplied.
    pub async fn handle(
        &self,
        user_id: UserId,
        limit: Option<u32>,
    ) -> Result<QuotaDecision, QuotaError> {
        let limit = limit.unwrap_or(self.default_limit);

        match self.quota.can_create(user_id, limit).await {
            Ok(decision) => Ok(decision),
            Err(first) => {
                warn!(user_id = %user_id, error = %first, "quota check failed, retrying once");
                self.quota.can_create(user_id, limit).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct MockQuota {
        used: u32,
        failures: AtomicU32,
    }

    #[async_trait]
    impl QuotaTracker for MockQuota {
        async fn record_usage(&self, _: UserId, _: Timestamp) -> Result<(), QuotaError> {
            Ok(())
        }

        async fn count_since(&self, _: UserId, _: Timestamp) -> Result<u32, QuotaError> {
            Ok(self.used)
        }

        async fn can_create(&self, _: UserId, limit: u32) -> Result<QuotaDecision, QuotaError> {
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(QuotaError::Database("ledger down".to_string()));
            }
            Ok(QuotaDecision {
                allowed: self.used < limit,
                used: self.used,
                remaining: limit.saturating_sub(self.used),
            })
        }
    }

    #[tokio::test]
    async fn uses_configured_default_limit() {
        let handler = CheckQuotaHandler::new(
            Arc::new(MockQuota {
                used: 9,
                failures: AtomicU32::new(0),
            }),
            10,
        );
        let decision = handler.handle(UserId::new(1), None).await.unwrap();
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
    }

    #[tokio::test]
    async fn explicit_limit_overrides_default() {
        let handler = CheckQuotaHandler::new(
            Arc::new(MockQuota {
                used: 9,
                failures: AtomicU32::new(0),
            }),
            10,
        );
        let decision = handler.handle(UserId::new(1), Some(9)).await.unwrap();
        assert!(!decision.allowed);
    }

    #[tokio::test]
    async fn retries_once_then_surfaces_error() {
        let handler = CheckQuotaHandler::new(
            Arc::new(MockQuota {
                used: 0,
                failures: AtomicU32::new(2),
            }),
            10,
        );
        assert!(handler.handle(UserId::new(1), None).await.is_err());
    }

    #[tokio::test]
    async fn single_failure_recovers_on_retry() {
        let handler = CheckQuotaHandler::new(
            Arc::new(MockQuota {
                used: 0,
                failures: AtomicU32::new(1),
            }),
            10,
        );
        assert!(handler.handle(UserId::new(1), None).await.is_ok());
    }
}

//! Profile and admin stats handlers.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::ports::{ProfileStore, QuotaTracker, UserProfile};

/// Handler for the per-user profile view.
///
/// The profile aggregate is display-only; the authoritative usage figure
/// for the current month comes from the quota ledger and is attached
/// alongside when available.
pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileStore>,
    quota: Arc<dyn QuotaTracker>,
    monthly_limit: u32,
}

/// Profile enriched with the current-month ledger count.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: UserProfile,
    /// Documents generated in the current calendar month, from the
    /// ledger. `None` when the ledger was unavailable.
    pub used_this_month: Option<u32>,
    pub monthly_limit: u32,
}

impl GetProfileHandler {
    pub fn new(
        profiles: Arc<dyn ProfileStore>,
        quota: Arc<dyn QuotaTracker>,
        monthly_limit: u32,
    ) -> Self {
        Self {
            profiles,
            quota,
            monthly_limit,
        }
    }

    pub async fn handle(&self, user_id: UserId) -> ProfileView {
        let profile = self.profiles.profile(user_id).await;

        // Display view must not fail on ledger trouble; the count is a
        // hint here, not a gate.
        let used_this_month = match self.quota.can_create(user_id, self.monthly_limit).await {
            Ok(decision) => Some(decision.used),
            Err(error) => {
                tracing::warn!(user_id = %user_id, error = %error, "ledger unavailable for profile view");
                None
            }
        };

        ProfileView {
            profile,
            used_this_month,
            monthly_limit: self.monthly_limit,
        }
    }
}

/// Aggregate usage totals plus the most generated templates.
#[derive(Debug, Clone)]
pub struct StatsView {
    pub users: usize,
    pub generations: u64,
    pub top_documents: Vec<(String, u64)>,
}

/// Handler for the admin stats view.
pub struct GetStatsHandler {
    profiles: Arc<dyn ProfileStore>,
    top_limit: usize,
}

impl GetStatsHandler {
    pub fn new(profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            profiles,
            top_limit: 5,
        }
    }

    pub async fn handle(&self) -> StatsView {
        let totals = self.profiles.stats().await;
        let top_documents = self.profiles.top_documents(self.top_limit).await;
        StatsView {
            users: totals.users,
            generations: totals.generations,
            top_documents,
        }
    }
}

//! ProfileStore port - display-only per-user aggregates.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Number of recent document titles kept per profile.
pub const HISTORY_LIMIT: usize = 20;

/// Per-user display aggregate.
///
/// Eventually consistent with the quota ledger and never authoritative
/// over it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub is_pro: bool,
    pub documents_generated: u32,
    pub last_generation_date: Option<NaiveDate>,
    /// Most recent document titles, oldest first, bounded by
    /// [`HISTORY_LIMIT`].
    pub history: Vec<String>,
}

impl UserProfile {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            is_pro: false,
            documents_generated: 0,
            last_generation_date: None,
            history: Vec::new(),
        }
    }
}

/// Aggregate totals for the admin stats view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    pub users: usize,
    pub generations: u64,
}

/// Port for the display-only profile aggregates (profile command, admin
/// stats).
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the profile, creating a default one on first touch.
    async fn profile(&self, user_id: UserId) -> UserProfile;

    /// Records a successful generation for display purposes.
    async fn register_generation(&self, user_id: UserId, title: &str);

    /// Marks the user as a pro subscriber (payment collaborator callback).
    async fn activate_pro(&self, user_id: UserId);

    /// Totals across all profiles.
    async fn stats(&self) -> UsageStats;

    /// Most generated document titles, descending by count.
    async fn top_documents(&self, limit: usize) -> Vec<(String, u64)>;
}

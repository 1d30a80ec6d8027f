//! In-memory implementation of the ProfileStore port.
//!
//! Display-only aggregates; losing them on restart is acceptable because
//! the quota ledger stays authoritative.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::ports::{Clock, ProfileStore, UsageStats, UserProfile, HISTORY_LIMIT};

#[derive(Default)]
struct Inner {
    profiles: HashMap<UserId, UserProfile>,
    document_counter: HashMap<String, u64>,
}

/// Process-wide profile aggregates behind a single lock.
pub struct InMemoryProfileStore {
    inner: Arc<RwLock<Inner>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryProfileStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            clock,
        }
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn profile(&self, user_id: UserId) -> UserProfile {
        let mut inner = self.inner.write().await;
        inner
            .profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id))
            .clone()
    }

    async fn register_generation(&self, user_id: UserId, title: &str) {
        let today = self.clock.now().as_datetime().date_naive();

        let mut inner = self.inner.write().await;
        let profile = inner
            .profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id));

        profile.documents_generated += 1;
        profile.last_generation_date = Some(today);
        profile.history.push(title.to_string());
        if profile.history.len() > HISTORY_LIMIT {
            let overflow = profile.history.len() - HISTORY_LIMIT;
            profile.history.drain(..overflow);
        }

        *inner.document_counter.entry(title.to_string()).or_insert(0) += 1;
    }

    async fn activate_pro(&self, user_id: UserId) {
        let mut inner = self.inner.write().await;
        inner
            .profiles
            .entry(user_id)
            .or_insert_with(|| UserProfile::new(user_id))
            .is_pro = true;
    }

    async fn stats(&self) -> UsageStats {
        let inner = self.inner.read().await;
        UsageStats {
            users: inner.profiles.len(),
            generations: inner.document_counter.values().sum(),
        }
    }

    async fn top_documents(&self, limit: usize) -> Vec<(String, u64)> {
        let inner = self.inner.read().await;
        let mut counts: Vec<(String, u64)> = inner
            .document_counter
            .iter()
            .map(|(title, count)| (title.clone(), *count))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(limit);
        counts
    }
}

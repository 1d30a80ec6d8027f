//! In-memory TTL context store.
//!
//! One process-wide map behind an async RwLock. Every store/get call
//! sweeps entries older than the TTL, so memory stays bounded without a
//! background task and abandoned flows self-clean.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::Timestamp;
use crate::ports::{Clock, ContextId, ContextStore, DocumentContext, CONTEXT_TTL_SECS};

struct StoredContext {
    context: DocumentContext,
    created_at: Timestamp,
}

/// In-memory implementation of the ContextStore port.
pub struct InMemoryContextStore {
    entries: Arc<RwLock<HashMap<String, StoredContext>>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryContextStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Number of live (possibly expired, not yet swept) entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    fn sweep(entries: &mut HashMap<String, StoredContext>, now: Timestamp) {
        entries.retain(|_, e| now.duration_since(&e.created_at).num_seconds() <= CONTEXT_TTL_SECS);
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn store(&self, context: DocumentContext) -> ContextId {
        let now = self.clock.now();
        let token = Uuid::new_v4().simple().to_string();

        let mut entries = self.entries.write().await;
        Self::sweep(&mut entries, now);
        entries.insert(
            token.clone(),
            StoredContext {
                context,
                created_at: now,
            },
        );

        ContextId::new(token)
    }

    async fn get(&self, id: &ContextId) -> Option<DocumentContext> {
        let now = self.clock.now();

        let mut entries = self.entries.write().await;
        Self::sweep(&mut entries, now);
        entries.get(id.as_str()).map(|e| e.context.clone())
    }
}

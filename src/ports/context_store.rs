//! ContextStore port - ephemeral state bridging multi-step flows.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::foundation::UserId;

/// Maximum age of a stored context, in seconds. Abandoned flows self-clean
/// via expiry; there is no explicit cancel operation.
pub const CONTEXT_TTL_SECS: i64 = 900;

/// Opaque, unguessable token handed to the collaborator between steps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(String);

impl ContextId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pending document request carried across the preview/download steps.
///
/// A typed struct instead of a loose dictionary: every call site gets
/// field-level guarantees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContext {
    pub user_id: UserId,
    pub template_id: String,
    pub fields: HashMap<String, String>,
    /// Title extracted at staging time, for display and history.
    pub title: String,
}

/// Port for the short-lived context store.
///
/// Entries live at most [`CONTEXT_TTL_SECS`]; every call opportunistically
/// sweeps expired entries so memory stays bounded without a background
/// task. A missing or expired id is a normal outcome, never an error.
#[async_trait]
pub trait ContextStore: Send + Sync {
    /// Records the context and returns a fresh unguessable id.
    async fn store(&self, context: DocumentContext) -> ContextId;

    /// Returns the context if present and younger than the TTL.
    async fn get(&self, id: &ContextId) -> Option<DocumentContext>;
}

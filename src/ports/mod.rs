//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod clock;
mod context_store;
mod document_renderer;
mod profile_store;
mod quota_tracker;
mod template_renderer;

pub use clock::Clock;
pub use context_store::{ContextId, ContextStore, DocumentContext, CONTEXT_TTL_SECS};
pub use document_renderer::{DocumentRenderer, RenderError};
pub use profile_store::{ProfileStore, UsageStats, UserProfile, HISTORY_LIMIT};
pub use quota_tracker::{QuotaDecision, QuotaError, QuotaTracker};
pub use template_renderer::{TemplateError, TemplateRenderer};

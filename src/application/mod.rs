//! Application layer - one handler per use case.
//!
//! Handlers orchestrate ports; they own no business rules beyond the
//! sequencing and failure policy of each operation.

mod check_quota;
mod generate_document;
mod profile;

pub use check_quota::CheckQuotaHandler;
pub use generate_document::{
    GenerateDocumentCommand, GenerateDocumentHandler, GenerateError, GeneratedDocument,
    StageDocumentCommand,
};
pub use profile::{GetProfileHandler, GetStatsHandler, ProfileView, StatsView};

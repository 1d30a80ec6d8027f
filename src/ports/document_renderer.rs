//! DocumentRenderer port - serializing a structured document to bytes.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::{DocumentFormat, RenderedDocument, StructuredDocument};

/// Port for one output backend (DOCX, PDF).
///
/// Implementations map the shared GOST style table to format-specific
/// styling and return a complete, independently-openable byte buffer. With
/// the formation timestamp injected via the classifier, rendering the same
/// document twice yields byte-identical output.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Format this backend produces.
    fn format(&self) -> DocumentFormat;

    /// Serializes the document. The buffer is complete before return;
    /// output is never streamed or partial.
    async fn render(&self, document: &StructuredDocument)
        -> Result<RenderedDocument, RenderError>;
}

/// Errors from output serialization.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The backend failed to produce a valid container.
    #[error("document serialization failed: {0}")]
    Serialization(String),
}

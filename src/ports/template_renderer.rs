//! TemplateRenderer port - resolving a named template against field values.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Port for rendering a named template into plain multi-line text.
///
/// # Contract
///
/// - Unknown template ids fail with [`TemplateError::NotFound`].
/// - A template referencing a field absent from `fields` fails with
///   [`TemplateError::Render`]; required fields are never silently
///   defaulted. Extra fields in `fields` are ignored.
/// - Output is plain text: markup characters in field values are inserted
///   literally. The structural classifier runs next, not an HTML renderer.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render(
        &self,
        template_id: &str,
        fields: &HashMap<String, String>,
    ) -> Result<String, TemplateError>;
}

/// Errors from template resolution and rendering.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The id does not resolve to a known template resource.
    #[error("template not found: {0}")]
    NotFound(String),

    /// The template could not be rendered, e.g. a required field is missing.
    #[error("template rendering failed for '{template_id}': {reason}")]
    Render { template_id: String, reason: String },

    /// The template resource exists but could not be read.
    #[error("template source unreadable for '{template_id}': {reason}")]
    Io { template_id: String, reason: String },
}

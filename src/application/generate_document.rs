//! GenerateDocumentHandler - the end-to-end generation use case.
//!
//! Sequencing: quota gate, template render, structural classification,
//! format serialization, ledger append, profile update. The staged
//! variants bridge the preview/download flow through the ephemeral
//! context store.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::document::{DocumentFormat, DocumentFormatter};
use crate::domain::foundation::UserId;
use crate::ports::{
    Clock, ContextId, ContextStore, DocumentContext, DocumentRenderer, ProfileStore, QuotaDecision,
    QuotaTracker, RenderError, TemplateError, TemplateRenderer,
};

use thiserror::Error;

/// Direct generation request from the collaborator layer.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    pub user_id: UserId,
    pub template_id: String,
    pub fields: HashMap<String, String>,
    pub format: DocumentFormat,
}

/// First step of the preview/download flow: validate and park the request.
#[derive(Debug, Clone)]
pub struct StageDocumentCommand {
    pub user_id: UserId,
    pub template_id: String,
    pub fields: HashMap<String, String>,
}

/// Finished artifact handed back to the collaborator.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
    pub mime: &'static str,
    pub filename: String,
    /// Title for display and history.
    pub title: String,
}

/// Errors of the generation use case. All are surfaced as typed outcomes;
/// none terminate the process.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("monthly document limit reached ({used}/{limit})")]
    LimitReached { used: u32, limit: u32 },

    /// The ledger could not answer the quota check even after a retry.
    /// Generation fails closed.
    #[error("quota ledger unavailable: {0}")]
    QuotaUnavailable(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// The staged context id is unknown or past its TTL.
    #[error("document context expired or unknown")]
    ContextExpired,

    #[error("no renderer registered for format '{0}'")]
    UnsupportedFormat(DocumentFormat),
}

/// Handler for document generation.
pub struct GenerateDocumentHandler {
    templates: Arc<dyn TemplateRenderer>,
    renderers: HashMap<DocumentFormat, Arc<dyn DocumentRenderer>>,
    quota: Arc<dyn QuotaTracker>,
    contexts: Arc<dyn ContextStore>,
    profiles: Arc<dyn ProfileStore>,
    formatter: DocumentFormatter,
    clock: Arc<dyn Clock>,
    monthly_limit: u32,
}

impl GenerateDocumentHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        templates: Arc<dyn TemplateRenderer>,
        renderers: Vec<Arc<dyn DocumentRenderer>>,
        quota: Arc<dyn QuotaTracker>,
        contexts: Arc<dyn ContextStore>,
        profiles: Arc<dyn ProfileStore>,
        formatter: DocumentFormatter,
        clock: Arc<dyn Clock>,
        monthly_limit: u32,
    ) -> Self {
        Self {
            templates,
            renderers: renderers.into_iter().map(|r| (r.format(), r)).collect(),
            quota,
            contexts,
            profiles,
            formatter,
            clock,
            monthly_limit,
        }
    }

    /// Runs the full pipeline for a direct request.
    pub async fn handle(
        &self,
        command: GenerateDocumentCommand,
    ) -> Result<GeneratedDocument, GenerateError> {
        let decision = self.gate(command.user_id).await?;
        debug!(
            user_id = %command.user_id,
            used = decision.used,
            remaining = decision.remaining,
            template = %command.template_id,
            "quota gate passed"
        );

        self.generate(
            command.user_id,
            &command.template_id,
            &command.fields,
            command.format,
        )
        .await
    }

    /// Validates the request, parks it in the context store, and returns
    /// the opaque token for the download step.
    pub async fn stage(
        &self,
        command: StageDocumentCommand,
    ) -> Result<ContextId, GenerateError> {
        // Render now so a broken request fails at preview time, not at
        // download time.
        let text = self
            .templates
            .render(&command.template_id, &command.fields)
            .await?;
        let title = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or(&command.template_id)
            .to_string();

        let id = self
            .contexts
            .store(DocumentContext {
                user_id: command.user_id,
                template_id: command.template_id,
                fields: command.fields,
                title,
            })
            .await;
        Ok(id)
    }

    /// Completes a staged flow. An unknown or expired token is a
    /// recoverable, typed outcome.
    pub async fn handle_staged(
        &self,
        id: &ContextId,
        format: DocumentFormat,
    ) -> Result<GeneratedDocument, GenerateError> {
        let context = self
            .contexts
            .get(id)
            .await
            .ok_or(GenerateError::ContextExpired)?;

        let decision = self.gate(context.user_id).await?;
        debug!(
            user_id = %context.user_id,
            remaining = decision.remaining,
            "quota gate passed for staged flow"
        );

        self.generate(context.user_id, &context.template_id, &context.fields, format)
            .await
    }

    /// Quota check with the fail-closed retry policy: one retry on ledger
    /// failure, then deny.
    async fn gate(&self, user_id: UserId) -> Result<QuotaDecision, GenerateError> {
        let decision = match self.quota.can_create(user_id, self.monthly_limit).await {
            Ok(decision) => decision,
            Err(first) => {
                warn!(user_id = %user_id, error = %first, "quota check failed, retrying once");
                self.quota
                    .can_create(user_id, self.monthly_limit)
                    .await
                    .map_err(|e| GenerateError::QuotaUnavailable(e.to_string()))?
            }
        };

        if !decision.allowed {
            return Err(GenerateError::LimitReached {
                used: decision.used,
                limit: self.monthly_limit,
            });
        }
        Ok(decision)
    }

    async fn generate(
        &self,
        user_id: UserId,
        template_id: &str,
        fields: &HashMap<String, String>,
        format: DocumentFormat,
    ) -> Result<GeneratedDocument, GenerateError> {
        let renderer = self
            .renderers
            .get(&format)
            .ok_or(GenerateError::UnsupportedFormat(format))?;

        let text = self.templates.render(template_id, fields).await?;
        let formed_at = self.clock.now();
        let document = self.formatter.classify(&text, formed_at);
        let title = document.title().unwrap_or(template_id).to_string();

        let rendered = renderer.render(&document).await?;

        // The document is already rendered; a ledger failure here must not
        // take the response away from the user. Favor availability over
        // perfect accounting for this single request.
        if let Err(e) = self.quota.record_usage(user_id, formed_at).await {
            warn!(user_id = %user_id, error = %e, "usage record insert failed after render");
        }

        self.profiles.register_generation(user_id, &title).await;

        Ok(GeneratedDocument {
            bytes: rendered.bytes,
            format,
            mime: format.mime_type(),
            filename: format!(
                "{}_{}.{}",
                template_id,
                formed_at.format("%d%m%Y"),
                format.extension()
            ),
            title,
        })
    }
}

//! Command-line entry point.
//!
//! Wires the adapters into the generation pipeline and renders a single
//! document:
//!
//! ```text
//! pravodoc <user_id> <template_id> <docx|pdf> [key=value ...]
//! ```
//!
//! The artifact is written to the current directory under the generated
//! filename. Intended for local smoke runs and as the wiring reference
//! for collaborator layers.

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pravodoc::adapters::clock::SystemClock;
use pravodoc::adapters::context::InMemoryContextStore;
use pravodoc::adapters::document::{DocxRenderer, FontAssets, PdfRenderer};
use pravodoc::adapters::profile::InMemoryProfileStore;
use pravodoc::adapters::sqlite::{self, SqliteQuotaTracker};
use pravodoc::adapters::templates::HandlebarsTemplateRenderer;
use pravodoc::application::{GenerateDocumentCommand, GenerateDocumentHandler};
use pravodoc::config::AppConfig;
use pravodoc::domain::document::{DocumentFormat, DocumentFormatter};
use pravodoc::domain::foundation::UserId;
use pravodoc::ports::DocumentRenderer;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "generation failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;

    let config = AppConfig::load()?;
    config.validate()?;

    let pool = sqlite::connect(&config.database).await?;
    let clock = Arc::new(SystemClock::new());

    let renderers: Vec<Arc<dyn DocumentRenderer>> = vec![
        Arc::new(DocxRenderer::new()),
        Arc::new(PdfRenderer::new(FontAssets::load(&config.documents.fonts_dir))),
    ];

    let handler = GenerateDocumentHandler::new(
        Arc::new(HandlebarsTemplateRenderer::new(&config.documents.template_dir)),
        renderers,
        Arc::new(SqliteQuotaTracker::new(pool, clock.clone())),
        Arc::new(InMemoryContextStore::new(clock.clone())),
        Arc::new(InMemoryProfileStore::new(clock.clone())),
        DocumentFormatter::new(config.documents.disclaimer.clone()),
        clock,
        config.limits.monthly_document_limit,
    );

    let document = handler.handle(args).await?;
    tokio::fs::write(&document.filename, &document.bytes).await?;
    info!(file = %document.filename, title = %document.title, "document written");
    Ok(())
}

fn parse_args() -> Result<GenerateDocumentCommand, String> {
    let mut args = std::env::args().skip(1);

    let user_id = args
        .next()
        .and_then(|v| v.parse::<i64>().ok())
        .map(UserId::new)
        .ok_or("usage: pravodoc <user_id> <template_id> <docx|pdf> [key=value ...]")?;
    let template_id = args.next().ok_or("missing template id")?;
    let format = match args.next().as_deref() {
        Some("docx") => DocumentFormat::Docx,
        Some("pdf") => DocumentFormat::Pdf,
        other => return Err(format!("unknown format: {other:?}, expected docx or pdf")),
    };

    let mut fields = HashMap::new();
    for pair in args {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("field '{pair}' is not key=value"))?;
        fields.insert(key.to_string(), value.to_string());
    }

    Ok(GenerateDocumentCommand {
        user_id,
        template_id,
        fields,
        format,
    })
}

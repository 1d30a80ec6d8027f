//! DOCX implementation of the DocumentRenderer port.
//!
//! Maps the shared GOST style table to Word paragraph properties via
//! `docx-rs`. Sizes are half-points, indents and page geometry are twips.

use async_trait::async_trait;
use docx_rs::{
    AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Run, RunFonts, SpecialIndentType,
};
use std::io::Cursor;

use crate::domain::document::{
    Alignment, DocumentFormat, EntryRole, RenderedDocument, StructuredDocument, GOST_PAGE,
};
use crate::ports::{DocumentRenderer, RenderError};

const FONT_NAME: &str = "Times New Roman";
const MUTED_COLOR: &str = "555555";

/// Twips per centimeter (1 cm = 567 twips, rounded).
const TWIPS_PER_CM: f32 = 567.0;
/// Twips per millimeter.
const TWIPS_PER_MM: f32 = 56.7;

/// Word-processing package backend.
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }

    fn paragraph(entry_role: EntryRole, text: &str) -> Paragraph {
        let style = entry_role.style();

        let mut run = Run::new()
            .add_text(text)
            .size((style.size_pt * 2) as usize)
            .fonts(RunFonts::new().ascii(FONT_NAME).hi_ansi(FONT_NAME));
        if style.bold {
            run = run.bold();
        }
        if style.muted {
            run = run.color(MUTED_COLOR);
        }

        let mut paragraph = Paragraph::new()
            .add_run(run)
            .align(map_alignment(style.alignment))
            .line_spacing(LineSpacing::new().after(style.space_after_pt * 20));

        if style.first_line_indent_cm > 0.0 {
            let twips = (style.first_line_indent_cm * TWIPS_PER_CM) as i32;
            paragraph = paragraph.indent(None, Some(SpecialIndentType::FirstLine(twips)), None, None);
        }

        paragraph
    }
}

fn map_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

#[async_trait]
impl DocumentRenderer for DocxRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    async fn render(
        &self,
        document: &StructuredDocument,
    ) -> Result<RenderedDocument, RenderError> {
        let mut docx = Docx::new()
            .page_size(
                (GOST_PAGE.width_mm * TWIPS_PER_MM) as u32,
                (GOST_PAGE.height_mm * TWIPS_PER_MM) as u32,
            )
            .page_margin(
                PageMargin::new()
                    .top((GOST_PAGE.margin_top_mm * TWIPS_PER_MM) as i32)
                    .bottom((GOST_PAGE.margin_bottom_mm * TWIPS_PER_MM) as i32)
                    .left((GOST_PAGE.margin_left_mm * TWIPS_PER_MM) as i32)
                    .right((GOST_PAGE.margin_right_mm * TWIPS_PER_MM) as i32),
            )
            .default_fonts(RunFonts::new().ascii(FONT_NAME).hi_ansi(FONT_NAME))
            .default_size(28);

        let mut previous_role = None;
        for entry in document.entries() {
            // Blank separators around the footer block are spacing, not
            // classified entries.
            let starts_footer =
                entry.role == EntryRole::Footer && previous_role != Some(EntryRole::Footer);
            let starts_disclaimer = entry.role == EntryRole::Disclaimer;
            if starts_footer || starts_disclaimer {
                docx = docx.add_paragraph(Paragraph::new());
            }

            docx = docx.add_paragraph(Self::paragraph(entry.role, &entry.text));
            previous_role = Some(entry.role);
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| RenderError::Serialization(e.to_string()))?;

        Ok(RenderedDocument::new(DocumentFormat::Docx, buffer.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::DocumentFormatter;
    use crate::domain::foundation::Timestamp;

    fn sample_document() -> StructuredDocument {
        DocumentFormatter::new("Не является юридической консультацией.").classify(
            "Договор аренды\nг. Москва, 01.01.2024\nАрендодатель обязуется...",
            Timestamp::from_unix_secs(1_704_100_000),
        )
    }

    #[tokio::test]
    async fn produces_a_zip_container() {
        let rendered = DocxRenderer::new()
            .render(&sample_document())
            .await
            .unwrap();
        assert_eq!(rendered.format, DocumentFormat::Docx);
        // DOCX is a ZIP package; check the local file header signature.
        assert_eq!(&rendered.bytes[..4], b"PK\x03\x04");
    }

    #[tokio::test]
    async fn rendering_is_deterministic_for_a_fixed_document() {
        let document = sample_document();
        let renderer = DocxRenderer::new();
        let a = renderer.render(&document).await.unwrap();
        let b = renderer.render(&document).await.unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[tokio::test]
    async fn empty_classification_still_renders() {
        let document = DocumentFormatter::new("Оговорка.")
            .classify("", Timestamp::from_unix_secs(1_704_100_000));
        let rendered = DocxRenderer::new().render(&document).await.unwrap();
        assert!(!rendered.is_empty());
    }
}

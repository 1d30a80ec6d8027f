//! PDF implementation of the DocumentRenderer port.
//!
//! Serializes the classified document to a paged A4 layout via `printpdf`.
//! Prefers the embedded DejaVu Serif faces (full Cyrillic coverage) and
//! degrades to the builtin Times faces when the assets are missing.
//! Document metadata dates are pinned so the same structured document
//! always serializes to the same bytes.

use async_trait::async_trait;
use printpdf::{BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rgb};
use std::io::Cursor;
use time::OffsetDateTime;
use tracing::warn;

use crate::domain::document::{
    Alignment, DocumentFormat, EntryRole, RenderedDocument, StructuredDocument, GOST_PAGE,
};
use crate::ports::{DocumentRenderer, RenderError};

use super::FontAssets;

const MM_PER_PT: f32 = 25.4 / 72.0;
/// Average glyph advance as a fraction of the font size, tuned for serif
/// Cyrillic text. Used for wrapping and alignment estimates.
const CHAR_WIDTH_FACTOR: f32 = 0.52;
/// Vertical gap around the footer block, in points.
const SEPARATOR_GAP_PT: f32 = 12.0;

/// Paged document backend.
pub struct PdfRenderer {
    fonts: FontAssets,
}

impl PdfRenderer {
    pub fn new(fonts: FontAssets) -> Self {
        Self { fonts }
    }

    fn estimate_width_mm(text: &str, size_pt: u32) -> f32 {
        text.chars().count() as f32 * size_pt as f32 * CHAR_WIDTH_FACTOR * MM_PER_PT
    }

    /// Greedy word wrap against the estimated glyph advance.
    fn wrap(text: &str, size_pt: u32, available_mm: f32) -> Vec<String> {
        let max_chars = ((available_mm / MM_PER_PT) / (size_pt as f32 * CHAR_WIDTH_FACTOR))
            .floor()
            .max(1.0) as usize;

        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Mutable layout cursor over a growing page list.
struct PageCursor<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl<'a> PageCursor<'a> {
    fn advance(&mut self, line_height_mm: f32) {
        self.y_mm -= line_height_mm;
        if self.y_mm < GOST_PAGE.margin_bottom_mm {
            let (page, layer) = self.doc.add_page(
                Mm(GOST_PAGE.width_mm),
                Mm(GOST_PAGE.height_mm),
                "layer 1",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = GOST_PAGE.height_mm - GOST_PAGE.margin_top_mm - line_height_mm;
        }
    }
}

#[async_trait]
impl DocumentRenderer for PdfRenderer {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    async fn render(
        &self,
        document: &StructuredDocument,
    ) -> Result<RenderedDocument, RenderError> {
        let title = document.title().unwrap_or("Документ");

        let (doc, page, layer) = PdfDocument::new(
            title,
            Mm(GOST_PAGE.width_mm),
            Mm(GOST_PAGE.height_mm),
            "layer 1",
        );
        // Pin metadata so re-rendering the same document is byte-identical.
        let doc = doc
            .with_creation_date(OffsetDateTime::UNIX_EPOCH)
            .with_mod_date(OffsetDateTime::UNIX_EPOCH)
            .with_document_id(format!("pravodoc:{title}"));

        let (regular, bold) = resolve_fonts(&doc, &self.fonts)?;

        let mut cursor = PageCursor {
            doc: &doc,
            layer: doc.get_page(page).get_layer(layer),
            y_mm: GOST_PAGE.height_mm - GOST_PAGE.margin_top_mm,
        };

        let mut previous_role = None;
        for entry in document.entries() {
            let style = entry.role.style();

            let starts_footer =
                entry.role == EntryRole::Footer && previous_role != Some(EntryRole::Footer);
            if starts_footer || entry.role == EntryRole::Disclaimer {
                cursor.y_mm -= SEPARATOR_GAP_PT * MM_PER_PT;
            }

            let font = if style.bold { &bold } else { &regular };
            let color = if style.muted {
                Color::Rgb(Rgb::new(0.33, 0.33, 0.33, None))
            } else {
                Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
            };

            let line_height_mm = style.size_pt as f32 * style.line_spacing * MM_PER_PT;

            let indent_mm = style.first_line_indent_cm * 10.0;
            let first_width = GOST_PAGE.content_width_mm() - indent_mm;
            let mut lines = PdfRenderer::wrap(&entry.text, style.size_pt, first_width);
            if lines.len() > 1 {
                // Re-wrap the continuation at full width.
                let rest = lines.split_off(1).join(" ");
                lines.extend(PdfRenderer::wrap(
                    &rest,
                    style.size_pt,
                    GOST_PAGE.content_width_mm(),
                ));
            }

            for (i, line) in lines.iter().enumerate() {
                cursor.advance(line_height_mm);
                let width = PdfRenderer::estimate_width_mm(line, style.size_pt);
                let x_mm = match style.alignment {
                    Alignment::Center => {
                        GOST_PAGE.margin_left_mm
                            + ((GOST_PAGE.content_width_mm() - width) / 2.0).max(0.0)
                    }
                    Alignment::Right => {
                        GOST_PAGE.margin_left_mm
                            + (GOST_PAGE.content_width_mm() - width).max(0.0)
                    }
                    Alignment::Left | Alignment::Justify => {
                        if i == 0 {
                            GOST_PAGE.margin_left_mm + indent_mm
                        } else {
                            GOST_PAGE.margin_left_mm
                        }
                    }
                };

                cursor.layer.set_fill_color(color.clone());
                cursor.layer.use_text(
                    line.as_str(),
                    style.size_pt as f32,
                    Mm(x_mm),
                    Mm(cursor.y_mm),
                    font,
                );
            }

            cursor.y_mm -= style.space_after_pt as f32 * MM_PER_PT;
            previous_role = Some(entry.role);
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Serialization(e.to_string()))?;

        Ok(RenderedDocument::new(DocumentFormat::Pdf, bytes))
    }
}

/// Resolves the regular and bold faces, preferring the embedded assets.
fn resolve_fonts(
    doc: &printpdf::PdfDocumentReference,
    assets: &FontAssets,
) -> Result<(IndirectFontRef, IndirectFontRef), RenderError> {
    let regular = match assets.regular() {
        Some(bytes) => match doc.add_external_font(Cursor::new(bytes.to_vec())) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!(error = %e, "embedded regular font rejected, using builtin face");
                None
            }
        },
        None => None,
    };

    let bold = match assets.bold() {
        Some(bytes) => match doc.add_external_font(Cursor::new(bytes.to_vec())) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!(error = %e, "embedded bold font rejected, using builtin face");
                None
            }
        },
        None => None,
    };

    let builtin = |font: BuiltinFont| {
        doc.add_builtin_font(font)
            .map_err(|e| RenderError::Serialization(e.to_string()))
    };

    let regular = match regular {
        Some(font) => font,
        None => builtin(BuiltinFont::TimesRoman)?,
    };
    let bold = match bold {
        Some(font) => font,
        None => builtin(BuiltinFont::TimesBold)?,
    };

    Ok((regular, bold))
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
    async fn produces_a_pdf_container_with_builtin_fallback() {
        let rendered = PdfRenderer::new(FontAssets::builtin_only())
            .render(&sample_document())
            .await
            .unwrap();
        assert_eq!(rendered.format, DocumentFormat::Pdf);
        assert_eq!(&rendered.bytes[..5], b"%PDF-");
    }

    #[tokio::test]
    async fn rendering_is_deterministic_for_a_fixed_document() {
        let document = sample_document();
        let renderer = PdfRenderer::new(FontAssets::builtin_only());
        let a = renderer.render(&document).await.unwrap();
        let b = renderer.render(&document).await.unwrap();
        assert_eq!(a.bytes, b.bytes);
    }

    #[tokio::test]
    async fn long_body_text_spans_pages_without_error() {
        let body = "Арендодатель обязуется предоставить имущество. ".repeat(400);
        let document = DocumentFormatter::new("Оговорка.")
            .classify(&format!("Договор\n{body}"), Timestamp::from_unix_secs(0));
        let rendered = PdfRenderer::new(FontAssets::builtin_only())
            .render(&document)
            .await
            .unwrap();
        assert!(!rendered.is_empty());
    }

    #[test]
    fn wrap_respects_available_width() {
        let lines = PdfRenderer::wrap("один два три четыре пять шесть семь", 14, 40.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.trim().is_empty());
        }
    }
}

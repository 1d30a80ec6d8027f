//! Output format adapters.
//!
//! Both backends consume the same classified document and the same GOST
//! style table; only the serialization differs.

mod docx_renderer;
mod fonts;
mod pdf_renderer;

pub use docx_renderer::DocxRenderer;
pub use fonts::FontAssets;
pub use pdf_renderer::PdfRenderer;

//! Embedded font resolution for the PDF backend.
//!
//! DOCX files reference fonts by name, but a PDF must embed a
//! Cyrillic-capable face to render Russian text. The preferred assets are
//! DejaVu Serif TTFs from the configured fonts directory; when they are
//! missing the backend falls back to a built-in face and keeps rendering.

use std::path::Path;

use tracing::warn;

const REGULAR_FILE: &str = "DejaVuSerif.ttf";
const BOLD_FILE: &str = "DejaVuSerif-Bold.ttf";

/// Font bytes loaded once at construction and reused per render.
#[derive(Debug, Clone, Default)]
pub struct FontAssets {
    regular: Option<Vec<u8>>,
    bold: Option<Vec<u8>>,
}

impl FontAssets {
    /// Loads the preferred TTF assets from `fonts_dir`.
    ///
    /// Missing or unreadable files are a degraded, non-fatal condition:
    /// a warning is logged and the corresponding slot stays empty.
    pub fn load(fonts_dir: &Path) -> Self {
        Self {
            regular: read_font(&fonts_dir.join(REGULAR_FILE)),
            bold: read_font(&fonts_dir.join(BOLD_FILE)),
        }
    }

    /// Assets with no embedded fonts; every render uses the builtin face.
    pub fn builtin_only() -> Self {
        Self::default()
    }

    pub fn regular(&self) -> Option<&[u8]> {
        self.regular.as_deref()
    }

    pub fn bold(&self) -> Option<&[u8]> {
        self.bold.as_deref()
    }

    pub fn has_embedded(&self) -> bool {
        self.regular.is_some()
    }
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "preferred font asset unavailable, falling back to builtin face"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_assets_are_non_fatal() {
        let dir = TempDir::new().unwrap();
        let assets = FontAssets::load(dir.path());
        assert!(!assets.has_embedded());
        assert!(assets.bold().is_none());
    }

    #[test]
    fn present_assets_are_loaded() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(REGULAR_FILE), b"not-a-real-font").unwrap();
        let assets = FontAssets::load(dir.path());
        assert!(assets.has_embedded());
        assert!(assets.bold().is_none());
    }
}

//! Rendered output artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentFormat::Pdf => "application/pdf",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Complete, self-contained output buffer for one format.
///
/// Produced fresh per request and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub format: DocumentFormat,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn new(format: DocumentFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_types_match_collaborator_contract() {
        assert_eq!(
            DocumentFormat::Docx.mime_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(DocumentFormat::Pdf.mime_type(), "application/pdf");
    }

    #[test]
    fn extensions() {
        assert_eq!(DocumentFormat::Docx.extension(), "docx");
        assert_eq!(DocumentFormat::Pdf.extension(), "pdf");
    }
}

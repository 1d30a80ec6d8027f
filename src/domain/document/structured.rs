//! Role-classified document entries.

use serde::{Deserialize, Serialize};

/// Structural role of a single document entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryRole {
    /// Document heading. Exactly one per document, always first.
    Title,
    /// Location/date line, right-aligned per GOST.
    MetaLine,
    /// Regular paragraph text.
    Body,
    /// Formation timestamp and signature placeholder block.
    Footer,
    /// Constant legal notice, always last.
    Disclaimer,
}

/// One classified entry. Text is never blank or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub role: EntryRole,
    pub text: String,
}

impl DocumentEntry {
    pub fn new(role: EntryRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Ordered sequence of classified entries.
///
/// Invariants (upheld by [`super::DocumentFormatter`]):
/// - at most one Title entry, and when present it is the first entry;
/// - no entry has blank/whitespace-only text;
/// - the Disclaimer entry, when present, is last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredDocument {
    entries: Vec<DocumentEntry>,
}

impl StructuredDocument {
    pub fn new(entries: Vec<DocumentEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    /// Returns the title text, if the source contained any non-blank line.
    pub fn title(&self) -> Option<&str> {
        self.entries
            .first()
            .filter(|e| e.role == EntryRole::Title)
            .map(|e| e.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

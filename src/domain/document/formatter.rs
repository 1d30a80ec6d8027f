//! Structural classifier for rendered template text.

use crate::domain::foundation::Timestamp;

use super::{DocumentEntry, EntryRole, StructuredDocument};

/// Lines starting with this marker (case-insensitively) are location/date
/// lines under the GOST convention, e.g. "г. Москва, 01.01.2024".
const CITY_MARKER: &str = "г. ";

/// Signature placeholder appended to every document.
const SIGNATURE_LINE: &str = "Подпись стороны: _____________________";

/// Classifies plain multi-line text into a [`StructuredDocument`].
///
/// Pure and deterministic: the same text, formation timestamp, and
/// disclaimer always produce the same document. Both output backends share
/// this single classification step.
#[derive(Debug, Clone)]
pub struct DocumentFormatter {
    disclaimer: String,
}

impl DocumentFormatter {
    /// Creates a formatter with the configured legal-notice text.
    pub fn new(disclaimer: impl Into<String>) -> Self {
        Self {
            disclaimer: disclaimer.into(),
        }
    }

    /// Classifies `text` line by line.
    ///
    /// Blank and whitespace-only lines are dropped and never produce an
    /// entry. The first surviving line is the sole Title. Any later
    /// surviving line whose trimmed content starts with `"г. "`
    /// (case-insensitively) is a MetaLine, wherever it appears. Everything
    /// else is Body, trimmed. The footer block (formation timestamp and
    /// signature placeholder) and the disclaimer are appended
    /// unconditionally; the blank separators around the footer are a
    /// renderer spacing concern, not entries.
    pub fn classify(&self, text: &str, formed_at: Timestamp) -> StructuredDocument {
        let mut entries = Vec::new();

        let mut title_seen = false;
        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if !title_seen {
                entries.push(DocumentEntry::new(EntryRole::Title, trimmed));
                title_seen = true;
                continue;
            }

            if trimmed.to_lowercase().starts_with(CITY_MARKER) {
                entries.push(DocumentEntry::new(EntryRole::MetaLine, trimmed));
                continue;
            }

            entries.push(DocumentEntry::new(EntryRole::Body, trimmed));
        }

        entries.push(DocumentEntry::new(
            EntryRole::Footer,
            format!("Дата формирования: {}", formed_at.format("%d.%m.%Y %H:%M")),
        ));
        entries.push(DocumentEntry::new(EntryRole::Footer, SIGNATURE_LINE));
        entries.push(DocumentEntry::new(
            EntryRole::Disclaimer,
            self.disclaimer.clone(),
        ));

        StructuredDocument::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use proptest::prelude::*;

    fn formatter() -> DocumentFormatter {
        DocumentFormatter::new("Документ не является юридической консультацией.")
    }

    fn formed_at() -> Timestamp {
        Timestamp::from_datetime("2024-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap())
    }

    #[test]
    fn classifies_title_meta_and_body() {
        let text = "Договор аренды\nг. Москва, 01.01.2024\nАрендодатель обязуется...";
        let doc = formatter().classify(text, formed_at());

        let roles: Vec<EntryRole> = doc.entries().iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![
                EntryRole::Title,
                EntryRole::MetaLine,
                EntryRole::Body,
                EntryRole::Footer,
                EntryRole::Footer,
                EntryRole::Disclaimer,
            ]
        );
        assert_eq!(doc.title(), Some("Договор аренды"));
        assert_eq!(doc.entries()[1].text, "г. Москва, 01.01.2024");
    }

    #[test]
    fn blank_lines_produce_no_entries() {
        let text = "Заголовок\n\n   \n\t\nТекст документа";
        let doc = formatter().classify(text, formed_at());
        assert!(doc.entries().iter().all(|e| !e.text.trim().is_empty()));
        assert_eq!(doc.entries()[1].text, "Текст документа");
    }

    #[test]
    fn city_marker_is_case_insensitive_and_position_independent() {
        let text = "Акт\nПервый пункт\nГ. Санкт-Петербург, 05.02.2024\nВторой пункт";
        let doc = formatter().classify(text, formed_at());
        assert_eq!(doc.entries()[2].role, EntryRole::MetaLine);
        assert_eq!(doc.entries()[1].role, EntryRole::Body);
        assert_eq!(doc.entries()[3].role, EntryRole::Body);
    }

    #[test]
    fn city_marker_on_first_line_is_still_the_title() {
        let text = "г. Москва, 01.01.2024\nТекст";
        let doc = formatter().classify(text, formed_at());
        assert_eq!(doc.entries()[0].role, EntryRole::Title);
        assert_eq!(doc.entries()[0].text, "г. Москва, 01.01.2024");
    }

    #[test]
    fn footer_carries_injected_formation_time() {
        let doc = formatter().classify("Заголовок", formed_at());
        let footer: Vec<&str> = doc
            .entries()
            .iter()
            .filter(|e| e.role == EntryRole::Footer)
            .map(|e| e.text.as_str())
            .collect();
        assert_eq!(footer[0], "Дата формирования: 01.01.2024 12:00");
        assert!(footer[1].starts_with("Подпись стороны:"));
    }

    #[test]
    fn empty_input_yields_footer_and_disclaimer_only() {
        let doc = formatter().classify("\n  \n", formed_at());
        assert_eq!(doc.title(), None);
        let roles: Vec<EntryRole> = doc.entries().iter().map(|e| e.role).collect();
        assert_eq!(
            roles,
            vec![EntryRole::Footer, EntryRole::Footer, EntryRole::Disclaimer]
        );
    }

    #[test]
    fn disclaimer_is_always_last() {
        let doc = formatter().classify("Заголовок\nТекст", formed_at());
        assert_eq!(
            doc.entries().last().map(|e| e.role),
            Some(EntryRole::Disclaimer)
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let text = "Договор\nг. Казань, 10.03.2024\nУсловия";
        let a = formatter().classify(text, formed_at());
        let b = formatter().classify(text, formed_at());
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn never_emits_blank_entries(text in "\\PC{0,400}") {
            let doc = formatter().classify(&text, formed_at());
            prop_assert!(doc.entries().iter().all(|e| !e.text.trim().is_empty()));
        }

        #[test]
        fn first_entry_is_title_when_input_has_content(
            lines in proptest::collection::vec("[ \\t]{0,3}[a-zа-я][a-zа-я ]{0,40}", 1..8)
        ) {
            let text = lines.join("\n");
            let doc = formatter().classify(&text, formed_at());
            prop_assert_eq!(doc.entries()[0].role, EntryRole::Title);
            prop_assert_eq!(
                doc.entries().iter().filter(|e| e.role == EntryRole::Title).count(),
                1
            );
        }

        #[test]
        fn city_prefixed_lines_off_title_are_meta(
            body in "[а-я]{1,20}",
            city in "г\\. [А-Яа-я]{1,20}"
        ) {
            let text = format!("Заголовок\n{body}\n{city}");
            let doc = formatter().classify(&text, formed_at());
            let entry = doc
                .entries()
                .iter()
                .find(|e| e.text == city)
                .expect("city line survives");
            prop_assert_eq!(entry.role, EntryRole::MetaLine);
        }
    }
}

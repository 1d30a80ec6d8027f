//! Handlebars implementation of the TemplateRenderer port.
//!
//! Templates are `.hbs` files in a configured resource directory, resolved
//! at render time. Strict mode makes a missing field a render error rather
//! than an empty substitution; escaping is disabled because the output is
//! plain text for the structural classifier, not HTML.

use async_trait::async_trait;
use handlebars::{no_escape, Handlebars};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::ports::{TemplateError, TemplateRenderer};

/// File-based Handlebars renderer.
pub struct HandlebarsTemplateRenderer {
    template_dir: PathBuf,
    registry: Handlebars<'static>,
}

impl HandlebarsTemplateRenderer {
    /// Creates a renderer over the given template directory.
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(no_escape);
        Self {
            template_dir: template_dir.into(),
            registry,
        }
    }

    fn template_path(&self, template_id: &str) -> Option<PathBuf> {
        // Template ids come from the collaborator; refuse anything that
        // could escape the resource directory.
        if template_id.is_empty()
            || template_id.contains(['/', '\\'])
            || template_id.contains("..")
        {
            return None;
        }
        Some(self.template_dir.join(format!("{template_id}.hbs")))
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }
}

#[async_trait]
impl TemplateRenderer for HandlebarsTemplateRenderer {
    async fn render(
        &self,
        template_id: &str,
        fields: &HashMap<String, String>,
    ) -> Result<String, TemplateError> {
        let path = self
            .template_path(template_id)
            .ok_or_else(|| TemplateError::NotFound(template_id.to_string()))?;

        if !path.is_file() {
            return Err(TemplateError::NotFound(template_id.to_string()));
        }

        let source = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| TemplateError::Io {
                template_id: template_id.to_string(),
                reason: e.to_string(),
            })?;

        self.registry
            .render_template(&source, fields)
            .map_err(|e| TemplateError::Render {
                template_id: template_id.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn renderer_with(templates: &[(&str, &str)]) -> (TempDir, HandlebarsTemplateRenderer) {
        let dir = TempDir::new().unwrap();
        for (name, source) in templates {
            fs::write(dir.path().join(format!("{name}.hbs")), source).unwrap();
        }
        let renderer = HandlebarsTemplateRenderer::new(dir.path());
        (dir, renderer)
    }

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn renders_fields_into_template() {
        let (_dir, renderer) = renderer_with(&[(
            "rental",
            "Договор аренды\nг. {{city}}, {{date}}\n{{body}}",
        )]);
        let out = renderer
            .render(
                "rental",
                &fields(&[
                    ("city", "Москва"),
                    ("date", "01.01.2024"),
                    ("body", "Арендодатель обязуется..."),
                ]),
            )
            .await
            .unwrap();
        assert_eq!(
            out,
            "Договор аренды\nг. Москва, 01.01.2024\nАрендодатель обязуется..."
        );
    }

    #[tokio::test]
    async fn unknown_template_is_not_found() {
        let (_dir, renderer) = renderer_with(&[]);
        let err = renderer
            .render("foo.missing", &HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_field_is_a_render_error() {
        let (_dir, renderer) = renderer_with(&[("act", "Акт\n{{required_field}}")]);
        let err = renderer.render("act", &HashMap::new()).await.unwrap_err();
        assert!(matches!(err, TemplateError::Render { .. }));
    }

    #[tokio::test]
    async fn extra_fields_are_ignored() {
        let (_dir, renderer) = renderer_with(&[("note", "Справка {{n}}")]);
        let out = renderer
            .render("note", &fields(&[("n", "1"), ("unused", "x")]))
            .await
            .unwrap();
        assert_eq!(out, "Справка 1");
    }

    #[tokio::test]
    async fn markup_in_field_values_is_literal() {
        let (_dir, renderer) = renderer_with(&[("note", "Справка {{n}}")]);
        let out = renderer
            .render("note", &fields(&[("n", "<b>&1</b>")]))
            .await
            .unwrap();
        assert_eq!(out, "Справка <b>&1</b>");
    }

    #[tokio::test]
    async fn path_traversal_ids_are_rejected() {
        let (_dir, renderer) = renderer_with(&[("note", "x")]);
        let err = renderer
            .render("../note", &HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }
}

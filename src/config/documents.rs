//! Document resource configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Template/font resource paths and the legal disclaimer.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentsConfig {
    /// Directory holding `.hbs` template sources.
    #[serde(default = "default_template_dir")]
    pub template_dir: PathBuf,

    /// Directory holding the DejaVu Serif TTF assets for PDF embedding.
    #[serde(default = "default_fonts_dir")]
    pub fonts_dir: PathBuf,

    /// Legal notice appended to every generated document.
    #[serde(default = "default_disclaimer")]
    pub disclaimer: String,
}

impl DocumentsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.disclaimer.trim().is_empty() {
            return Err(ValidationError::EmptyDisclaimer);
        }
        Ok(())
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            template_dir: default_template_dir(),
            fonts_dir: default_fonts_dir(),
            disclaimer: default_disclaimer(),
        }
    }
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("data/templates")
}

fn default_fonts_dir() -> PathBuf {
    PathBuf::from("data/fonts")
}

fn default_disclaimer() -> String {
    "Документ сформирован автоматически и не является юридической \
     консультацией. Перед подписанием рекомендуется проверка юристом."
        .to_string()
}

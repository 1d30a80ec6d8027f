//! Quota limit configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Generation limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Documents per user per calendar month.
    #[serde(default = "default_monthly_document_limit")]
    pub monthly_document_limit: u32,
}

impl LimitsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.monthly_document_limit == 0 {
            return Err(ValidationError::InvalidMonthlyLimit);
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            monthly_document_limit: default_monthly_document_limit(),
        }
    }
}

fn default_monthly_document_limit() -> u32 {
    10
}

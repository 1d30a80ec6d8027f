//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user, as assigned by the messaging collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Creates a UserId from a raw collaborator-supplied integer.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

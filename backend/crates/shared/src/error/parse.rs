//! Parse errors for string-tagged enums

use thiserror::Error;

/// Returned when a string does not name a known enum variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

//! Validation findings

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationResultType {
    Information,
    Warning,
    Error,
}

/// One finding produced while validating a value
///
/// Serializes as `{path, type, code, message, expected?, actual?}`, which
/// is suitable for returning to clients as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    path: String,
    #[serde(rename = "type")]
    result_type: ValidationResultType,
    code: String,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expected: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actual: Option<Value>,
}

impl ValidationResult {
    pub fn new(
        path: impl Into<String>,
        result_type: ValidationResultType,
        code: impl Into<String>,
        message: impl Into<String>,
        expected: Option<Value>,
        actual: Option<Value>,
    ) -> Self {
        Self {
            path: path.into(),
            result_type,
            code: code.into(),
            message: message.into(),
            expected,
            actual,
        }
    }

    /// Dot-separated path to the offending value, empty at the root
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn result_type(&self) -> ValidationResultType {
        self.result_type
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn expected(&self) -> Option<&Value> {
        self.expected.as_ref()
    }

    pub fn actual(&self) -> Option<&Value> {
        self.actual.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.result_type == ValidationResultType::Error
    }
}

//! Validation rule contract

use std::fmt;

use serde_json::Value;

use super::validation_result::ValidationResult;

/// Check attached to a schema
///
/// Rules only run against present values; absence is governed by the
/// schema's `required` flag. A rule appends zero or more findings and
/// never fails.
pub trait ValidationRule: fmt::Debug + Send + Sync {
    /// Validates `value` found at `path`
    fn validate(&self, path: &str, value: &Value, results: &mut Vec<ValidationResult>);
}

//! Turning validation findings into an [`ApplicationError`]

use super::validation_result::{ValidationResult, ValidationResultType};
use crate::error::application_error::{ApplicationError, CommonsResult};

/// Code of errors raised for invalid data
pub const INVALID_DATA_CODE: &str = "INVALID_DATA";

/// Builds `"Validation failed: msg1, msg2"` from the non-informational findings
pub fn compose_message(results: &[ValidationResult]) -> String {
    let messages: Vec<&str> = results
        .iter()
        .filter(|result| result.result_type() != ValidationResultType::Information)
        .map(ValidationResult::message)
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        format!("Validation failed: {}", messages.join(", "))
    }
}

/// BadRequest error describing the findings, attached under `results`
pub fn validation_error(
    correlation_id: Option<&str>,
    results: &[ValidationResult],
) -> ApplicationError {
    let message = compose_message(results);
    let error =
        ApplicationError::bad_request(correlation_id, Some(INVALID_DATA_CODE), Some(&message));
    match serde_json::to_value(results) {
        Ok(details) => error.with_details("results", details),
        Err(_) => error,
    }
}

/// Fails when there are errors, or warnings in strict mode
pub fn throw_if_needed(
    correlation_id: Option<&str>,
    results: &[ValidationResult],
    strict: bool,
) -> CommonsResult<()> {
    let has_errors = results.iter().any(|result| match result.result_type() {
        ValidationResultType::Error => true,
        ValidationResultType::Warning => strict,
        ValidationResultType::Information => false,
    });

    if has_errors {
        tracing::debug!(
            correlation_id = correlation_id.unwrap_or_default(),
            findings = results.len(),
            "Validation failed"
        );
        return Err(validation_error(correlation_id, results));
    }
    Ok(())
}

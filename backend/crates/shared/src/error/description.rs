//! Error Description - Serializable form of an application error
//!
//! [`ErrorDescription`] is what crosses process boundaries (logs, RPC
//! faults, HTTP bodies). It converts to and from [`ApplicationError`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::application_error::{ApplicationError, DEFAULT_CODE};
use super::category::ErrorCategory;

/// Serializable error record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDescription {
    /// Name of the error type on the producing side
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
    pub category: ErrorCategory,
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ErrorDescription {
    /// Describes an arbitrary error that is not an [`ApplicationError`]
    ///
    /// Foreign errors are reported as `Unknown` with status 500.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        if let Some(app_error) = error.downcast_ref::<ApplicationError>() {
            return Self::from(app_error);
        }
        Self {
            error_type: None,
            category: ErrorCategory::Unknown,
            status: ErrorCategory::Unknown.default_status(),
            code: DEFAULT_CODE.to_string(),
            message: error.to_string(),
            details: None,
            correlation_id: None,
            cause: error.source().map(|source| source.to_string()),
            stack_trace: None,
        }
    }
}

impl From<&ApplicationError> for ErrorDescription {
    fn from(error: &ApplicationError) -> Self {
        Self {
            error_type: Some(error.category().as_str().to_string()),
            category: error.category(),
            status: error.status(),
            code: error.code().to_string(),
            message: error.message().to_string(),
            details: (!error.details().is_empty()).then(|| error.details().clone()),
            correlation_id: error.correlation_id().map(str::to_string),
            cause: error.cause().map(str::to_string),
            stack_trace: error.stack_trace().map(str::to_string),
        }
    }
}

impl From<ErrorDescription> for ApplicationError {
    /// Restores an error received from a remote party
    ///
    /// The category factory is chosen from the description and the
    /// transmitted status replaces the category default.
    fn from(description: ErrorDescription) -> Self {
        let mut error = ApplicationError::new(
            description.category,
            description.correlation_id.as_deref(),
            Some(&description.code),
            Some(&description.message),
        )
        .with_status(description.status);

        if let Some(cause) = description.cause {
            error = error.with_cause(cause);
        }
        if let Some(stack_trace) = description.stack_trace {
            error = error.with_stack_trace(stack_trace);
        }
        for (key, value) in description.details.into_iter().flatten() {
            error = error.with_details(key, value);
        }
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_description_round_trip() {
        let err = ApplicationError::conflict(Some("123"), Some("DUPLICATE"), Some("Key exists"))
            .with_details("key", "abc")
            .with_cause("unique index");
        let description = ErrorDescription::from(&err);
        assert_eq!(description.error_type.as_deref(), Some("Conflict"));
        assert_eq!(description.status, 409);

        let restored = ApplicationError::from(description);
        assert_eq!(restored.category(), ErrorCategory::Conflict);
        assert_eq!(restored.code(), "DUPLICATE");
        assert_eq!(restored.message(), "Key exists");
        assert_eq!(restored.correlation_id(), Some("123"));
        assert_eq!(restored.cause(), Some("unique index"));
        assert_eq!(restored.details()["key"], "abc");
    }

    #[test]
    fn test_description_json_shape() {
        let err = ApplicationError::file(None, Some("NO_FILE"), Some("Missing file"));
        let value = serde_json::to_value(ErrorDescription::from(&err)).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FileError",
                "category": "FileError",
                "status": 500,
                "code": "NO_FILE",
                "message": "Missing file"
            })
        );
    }

    #[test]
    fn test_restored_status_is_kept() {
        let description: ErrorDescription = serde_json::from_value(json!({
            "category": "Unsupported",
            "status": 501,
            "code": "NOT_IMPLEMENTED",
            "message": "Not implemented"
        }))
        .unwrap();
        let err = ApplicationError::from(description);
        assert_eq!(err.status(), 501);
        assert_eq!(err.category(), ErrorCategory::Unsupported);
    }

    #[test]
    fn test_foreign_error_is_unknown() {
        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let description = ErrorDescription::from_error(&io_err);
        assert_eq!(description.category, ErrorCategory::Unknown);
        assert_eq!(description.code, "UNKNOWN");
        assert_eq!(description.message, "boom");
    }

    #[test]
    fn test_application_error_behind_dyn_error() {
        let err = ApplicationError::not_found(None, Some("MISSING"), None);
        let description = ErrorDescription::from_error(&err);
        assert_eq!(description.category, ErrorCategory::NotFound);
        assert_eq!(description.code, "MISSING");
    }
}

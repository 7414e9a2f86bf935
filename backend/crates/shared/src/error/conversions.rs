//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`ApplicationError`].

use super::application_error::ApplicationError;
use super::category::ErrorCategory;

// ============================================================================
// Standard library conversions
// ============================================================================

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        let category = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCategory::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCategory::Unauthorized,
            _ => ErrorCategory::FileError,
        };
        ApplicationError::new(category, None, Some("IO_ERROR"), Some("I/O operation failed"))
            .with_source(err)
    }
}

impl From<std::num::ParseIntError> for ApplicationError {
    fn from(err: std::num::ParseIntError) -> Self {
        ApplicationError::bad_request(None, Some("BAD_INTEGER"), Some("Invalid integer format"))
            .with_source(err)
    }
}

impl From<std::num::ParseFloatError> for ApplicationError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ApplicationError::bad_request(None, Some("BAD_FLOAT"), Some("Invalid float format"))
            .with_source(err)
    }
}

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for ApplicationError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            let message = format!("JSON parse error: {}", err);
            ApplicationError::bad_request(None, Some("JSON_PARSE_ERROR"), Some(&message))
                .with_source(err)
        } else {
            ApplicationError::internal(
                None,
                Some("JSON_SERIALIZATION_ERROR"),
                Some("JSON serialization error"),
            )
            .with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for ApplicationError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        use super::description::ErrorDescription;

        self.log();

        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(ErrorDescription::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: ApplicationError = io_err.into();
        assert_eq!(app_err.category(), ErrorCategory::NotFound);

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let app_err: ApplicationError = io_err.into();
        assert_eq!(app_err.category(), ErrorCategory::Unauthorized);

        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        let app_err: ApplicationError = io_err.into();
        assert_eq!(app_err.category(), ErrorCategory::FileError);
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_err: Result<i32, _> = "abc".parse();
        let app_err: ApplicationError = parse_err.unwrap_err().into();
        assert_eq!(app_err.category(), ErrorCategory::BadRequest);
        assert_eq!(app_err.code(), "BAD_INTEGER");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let app_err: ApplicationError = json_err.into();
        assert_eq!(app_err.category(), ErrorCategory::BadRequest);
        assert_eq!(app_err.code(), "JSON_PARSE_ERROR");
    }
}

//! Application Error - Unified error type for microservices
//!
//! Defines [`ApplicationError`] and the [`CommonsResult<T>`] alias.
//!
//! There is one error struct rather than one type per category. The
//! category is a tag on the error and per-category factory functions
//! (`config`, `connection`, `file`, ...) fix the category and its
//! default status.

use std::error::Error;
use std::fmt;

use serde_json::{Map, Value};

use super::category::ErrorCategory;
use crate::refer::locator::Locator;

/// Code assigned when the caller does not supply one
pub const DEFAULT_CODE: &str = "UNKNOWN";

/// Message assigned when the caller does not supply one
pub const DEFAULT_MESSAGE: &str = "Unknown error";

/// Code of errors raised for unresolved references
pub const REFERENCE_ERROR_CODE: &str = "REF_ERROR";

/// Application error carrying category, correlation id, code and details
///
/// Errors are created at the error site, optionally enriched with builder
/// methods while they propagate, and consumed by a caller or logger at the
/// boundary.
///
/// ## Fields
/// * `category` - error classification
/// * `correlation_id` - transaction id used to trace the call chain
/// * `code` - unique error code, `"UNKNOWN"` by default
/// * `message` - human-readable description
/// * `status` - HTTP-like status, the category default unless overridden
/// * `details` - ordered key/value attachments
///
/// ## Examples
/// ```rust
/// use commons::error::application_error::ApplicationError;
/// use commons::error::category::ErrorCategory;
///
/// let err = ApplicationError::config(Some("123"), Some("MISSING_HOST"), Some("Host is not set"))
///     .with_details("param", "host");
///
/// assert_eq!(err.category(), ErrorCategory::Misconfiguration);
/// assert_eq!(err.status(), 500);
/// assert_eq!(err.details()["param"], "host");
/// ```
pub struct ApplicationError {
    category: ErrorCategory,
    correlation_id: Option<String>,
    code: String,
    message: String,
    status: u16,
    stack_trace: Option<String>,
    cause: Option<String>,
    details: Map<String, Value>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// Result alias used across the crate
pub type CommonsResult<T> = Result<T, ApplicationError>;

impl ApplicationError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Creates an error of the given category
    ///
    /// Missing code and message fall back to [`DEFAULT_CODE`] and
    /// [`DEFAULT_MESSAGE`]; the status is the category default.
    pub fn new(
        category: ErrorCategory,
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self {
            category,
            correlation_id: correlation_id.map(str::to_string),
            code: code.unwrap_or(DEFAULT_CODE).to_string(),
            message: message.unwrap_or(DEFAULT_MESSAGE).to_string(),
            status: category.default_status(),
            stack_trace: None,
            cause: None,
            details: Map::new(),
            source: None,
        }
    }

    // ========================================================================
    // Category factories
    // ========================================================================

    /// Unknown or unexpected error
    #[inline]
    pub fn unknown(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::Unknown, correlation_id, code, message)
    }

    /// Internal error caused by a programming mistake
    #[inline]
    pub fn internal(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::Internal, correlation_id, code, message)
    }

    /// Mistake in user-defined configuration
    #[inline]
    pub fn config(correlation_id: Option<&str>, code: Option<&str>, message: Option<&str>) -> Self {
        Self::new(ErrorCategory::Misconfiguration, correlation_id, code, message)
    }

    /// Operation called in the wrong object state
    #[inline]
    pub fn invalid_state(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::InvalidState, correlation_id, code, message)
    }

    /// Failure to connect to a remote service
    #[inline]
    pub fn connection(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::NoResponse, correlation_id, code, message)
    }

    /// Remote call returned a failure
    #[inline]
    pub fn invocation(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::FailedInvocation, correlation_id, code, message)
    }

    /// Local disk read/write failure
    #[inline]
    pub fn file(correlation_id: Option<&str>, code: Option<&str>, message: Option<&str>) -> Self {
        Self::new(ErrorCategory::FileError, correlation_id, code, message)
    }

    /// Invalid caller parameters
    #[inline]
    pub fn bad_request(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::BadRequest, correlation_id, code, message)
    }

    /// Access denied
    #[inline]
    pub fn unauthorized(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::Unauthorized, correlation_id, code, message)
    }

    /// Requested object is missing
    #[inline]
    pub fn not_found(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::NotFound, correlation_id, code, message)
    }

    /// Concurrent update or duplicate
    #[inline]
    pub fn conflict(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::Conflict, correlation_id, code, message)
    }

    /// Call to unsupported or unimplemented functionality
    #[inline]
    pub fn unsupported(
        correlation_id: Option<&str>,
        code: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self::new(ErrorCategory::Unsupported, correlation_id, code, message)
    }

    /// Required component dependency cannot be found
    ///
    /// The locator is rendered into the message and attached as the
    /// `locator` detail.
    ///
    /// ```rust
    /// use commons::error::application_error::ApplicationError;
    /// use commons::refer::locator::Locator;
    ///
    /// let err = ApplicationError::reference(None, Some(&Locator::from("my-locator")));
    /// assert_eq!(err.message(), "Cannot locate reference: my-locator");
    /// assert_eq!(err.code(), "REF_ERROR");
    /// ```
    pub fn reference(correlation_id: Option<&str>, locator: Option<&Locator>) -> Self {
        let rendered = locator.map(|l| l.to_string());
        let message = format!(
            "Cannot locate reference: {}",
            rendered.as_deref().unwrap_or("<None>")
        );
        let detail = rendered.map(Value::String).unwrap_or(Value::Null);

        Self::new(
            ErrorCategory::Internal,
            correlation_id,
            Some(REFERENCE_ERROR_CODE),
            Some(&message),
        )
        .with_details("locator", detail)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Attaches a detail value under `key`
    ///
    /// Re-using a key replaces the value but keeps its original position.
    #[inline]
    pub fn with_details(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Replaces the error code
    #[inline]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Overrides the category default status
    #[inline]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Sets the correlation id
    #[inline]
    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }

    /// Sets a textual description of the original cause
    #[inline]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Sets the stack trace, usually one received from a remote service
    #[inline]
    pub fn with_stack_trace(mut self, stack_trace: impl Into<String>) -> Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Wraps the original error
    ///
    /// The cause text is filled from the source unless already set.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if self.cause.is_none() {
            self.cause = Some(source.to_string());
        }
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Error classification
    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    /// Transaction id, if one was supplied
    #[inline]
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    /// Unique error code
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable description
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP-like status code
    #[inline]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Stack trace, usually received from a remote service
    #[inline]
    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }

    /// Text of the original cause
    #[inline]
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_deref()
    }

    /// Detail attachments in insertion order
    #[inline]
    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }

    /// Status is 5xx
    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }

    /// Status is 4xx
    #[inline]
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Emits the error as a tracing event
    ///
    /// Server errors are logged at `error`, access denials at `warn`,
    /// everything else at `debug`.
    pub fn log(&self) {
        let correlation_id = self.correlation_id().unwrap_or_default();
        if self.is_server_error() {
            tracing::error!(
                category = %self.category,
                code = %self.code,
                correlation_id,
                cause = self.cause().unwrap_or_default(),
                "{}",
                self.message
            );
        } else if self.category == ErrorCategory::Unauthorized {
            tracing::warn!(code = %self.code, correlation_id, "{}", self.message);
        } else {
            tracing::debug!(
                category = %self.category,
                code = %self.code,
                correlation_id,
                "{}",
                self.message
            );
        }
    }
}

impl fmt::Debug for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("ApplicationError");
        builder.field("category", &self.category);
        builder.field("code", &self.code);
        builder.field("message", &self.message);
        builder.field("status", &self.status);
        if let Some(correlation_id) = &self.correlation_id {
            builder.field("correlation_id", correlation_id);
        }
        if !self.details.is_empty() {
            builder.field("details", &self.details);
        }
        if let Some(cause) = &self.cause {
            builder.field("cause", cause);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

impl Error for ApplicationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Result extension traits
// ============================================================================

/// Wraps foreign errors into [`ApplicationError`]
pub trait ResultExt<T, E> {
    /// Converts the error into an `ApplicationError` of the given category
    /// and code, keeping the original error as source.
    fn map_app_err(
        self,
        category: ErrorCategory,
        code: &str,
        message: &str,
    ) -> CommonsResult<T>
    where
        E: Error + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn map_app_err(self, category: ErrorCategory, code: &str, message: &str) -> CommonsResult<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(|e| {
            ApplicationError::new(category, None, Some(code), Some(message)).with_source(e)
        })
    }
}

/// Turns `None` into an [`ApplicationError`]
pub trait OptionExt<T> {
    fn ok_or_app_err(self, category: ErrorCategory, code: &str, message: &str) -> CommonsResult<T>;

    /// `None` becomes a NotFound error
    fn ok_or_not_found(self, code: &str, message: &str) -> CommonsResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_app_err(self, category: ErrorCategory, code: &str, message: &str) -> CommonsResult<T> {
        self.ok_or_else(|| ApplicationError::new(category, None, Some(code), Some(message)))
    }

    fn ok_or_not_found(self, code: &str, message: &str) -> CommonsResult<T> {
        self.ok_or_app_err(ErrorCategory::NotFound, code, message)
    }
}

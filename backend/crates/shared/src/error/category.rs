//! Error Category - Classification of application errors
//!
//! Defines the [`ErrorCategory`] enum. Categories are purely descriptive
//! tags; the only behavior attached to them is the default status used
//! when an error is created.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::parse::ParseEnumError;

/// Error category tags
///
/// Each category maps to a default HTTP-like status. Callers may override
/// the status on an individual error.
///
/// ## Examples
/// ```rust
/// use commons::error::category::ErrorCategory;
///
/// let category = ErrorCategory::Misconfiguration;
/// assert_eq!(category.default_status(), 500);
/// assert_eq!(category.as_str(), "Misconfiguration");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCategory {
    /// Unknown or unexpected errors
    Unknown,
    /// Internal errors caused by programming mistakes
    Internal,
    /// Errors in user-defined configuration
    Misconfiguration,
    /// Operation called on an object in the wrong state
    InvalidState,
    /// Remote service did not respond (connectivity)
    NoResponse,
    /// Remote call failed
    FailedInvocation,
    /// Local disk read/write failed
    FileError,
    /// Caller sent invalid parameters
    BadRequest,
    /// Access denied
    Unauthorized,
    /// Requested object was not found
    NotFound,
    /// Optimistic concurrency conflict or duplicate
    Conflict,
    /// Functionality is not supported or not implemented
    Unsupported,
}

impl ErrorCategory {
    /// All categories in declaration order
    pub const ALL: [ErrorCategory; 12] = [
        ErrorCategory::Unknown,
        ErrorCategory::Internal,
        ErrorCategory::Misconfiguration,
        ErrorCategory::InvalidState,
        ErrorCategory::NoResponse,
        ErrorCategory::FailedInvocation,
        ErrorCategory::FileError,
        ErrorCategory::BadRequest,
        ErrorCategory::Unauthorized,
        ErrorCategory::NotFound,
        ErrorCategory::Conflict,
        ErrorCategory::Unsupported,
    ];

    /// Default status for errors of this category
    ///
    /// Client-side categories map to their 4xx code, everything else to 500.
    #[inline]
    pub const fn default_status(&self) -> u16 {
        match self {
            ErrorCategory::BadRequest => 400,
            ErrorCategory::Unauthorized => 401,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Conflict => 409,
            _ => 500,
        }
    }

    /// Wire name of the category
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Unknown => "Unknown",
            ErrorCategory::Internal => "Internal",
            ErrorCategory::Misconfiguration => "Misconfiguration",
            ErrorCategory::InvalidState => "InvalidState",
            ErrorCategory::NoResponse => "NoResponse",
            ErrorCategory::FailedInvocation => "FailedInvocation",
            ErrorCategory::FileError => "FileError",
            ErrorCategory::BadRequest => "BadRequest",
            ErrorCategory::Unauthorized => "Unauthorized",
            ErrorCategory::NotFound => "NotFound",
            ErrorCategory::Conflict => "Conflict",
            ErrorCategory::Unsupported => "Unsupported",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError::new("error category", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status() {
        assert_eq!(ErrorCategory::BadRequest.default_status(), 400);
        assert_eq!(ErrorCategory::Unauthorized.default_status(), 401);
        assert_eq!(ErrorCategory::NotFound.default_status(), 404);
        assert_eq!(ErrorCategory::Conflict.default_status(), 409);
        assert_eq!(ErrorCategory::Misconfiguration.default_status(), 500);
        assert_eq!(ErrorCategory::NoResponse.default_status(), 500);
        assert_eq!(ErrorCategory::Unsupported.default_status(), 500);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "filEerror".parse::<ErrorCategory>().unwrap(),
            ErrorCategory::FileError
        );
        assert!("Explosion".parse::<ErrorCategory>().is_err());
    }

    #[test]
    fn test_serialized_as_tag() {
        let json = serde_json::to_string(&ErrorCategory::NoResponse).unwrap();
        assert_eq!(json, "\"NoResponse\"");
    }
}

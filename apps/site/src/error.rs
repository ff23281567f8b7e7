//! # API Error Type
//!
//! Unified error type for site commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow                                           │
//! │                                                                         │
//! │  Validation failure ──► NOT an error: SubmissionOutcome::Rejected      │
//! │                         (shown as an error notification)               │
//! │                                                                         │
//! │  Malformed form (CoreError) ──┐                                         │
//! │  Unparsable command line ─────┼──► ApiError { code, message } ──► page │
//! │  Unknown notification id ─────┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The page receives both a machine-readable `code` and a human-readable
//! `message`:
//! ```json
//! { "code": "BAD_REQUEST", "message": "expected value at line 1 column 1" }
//! ```

use serde::Serialize;
use swiftconnect_core::CoreError;
use thiserror::Error;

/// API error returned from site commands.
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// The form is missing something its handler needs
    InvalidForm,

    /// The request itself could not be read
    BadRequest,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownField(name) => ApiError::new(
                ErrorCode::InvalidForm,
                format!("Form is missing the '{}' field", name),
            ),
        }
    }
}

/// Converts unreadable command JSON to API errors.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::UnknownField("weight".to_string()).into();
        assert_eq!(err.code, ErrorCode::InvalidForm);
        assert_eq!(err.message, "Form is missing the 'weight' field");
        assert_eq!(err.to_string(), "[InvalidForm] Form is missing the 'weight' field");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Notification", "7")).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Notification not found: 7");
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err().into();
        assert_eq!(err.code, ErrorCode::BadRequest);
    }
}

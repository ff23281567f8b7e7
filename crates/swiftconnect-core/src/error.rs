//! # Error Types
//!
//! Domain-specific error types for swiftconnect-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  swiftconnect-core errors (this file)                                  │
//! │  ├── CoreError        - Malformed requests from the host               │
//! │  └── ValidationError  - A field the user has to fix                    │
//! │                                                                         │
//! │  site app errors (separate crate)                                      │
//! │  └── ApiError         - What the page sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → notification text                             │
//! │        CoreError → ApiError → page                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation Errors Are Data
//! A form with three blank fields produces three `ValidationError`s in a
//! `Vec`, which the page shows as one combined notification. They are never
//! returned through `Err` by the form validator.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Errors for requests the pipeline cannot act on at all.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The host asked for a field the form does not carry.
    #[error("Form has no field named '{0}'")]
    UnknownField(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// One problem with one form field.
///
/// ## Message Text
/// The `Display` output is exactly what the visitor reads:
/// ```text
/// Pickup Location is required
/// Please enter a valid email address
/// Please enter a valid Kenyan phone number (e.g., +254 700 000 000)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field is empty (after trimming).
    #[error("{label} is required")]
    Required { field: String, label: String },

    /// An email field does not look like `local@domain.tld`.
    #[error("Please enter a valid email address")]
    InvalidEmail { field: String },

    /// A telephone field is not a Kenyan mobile number.
    #[error("Please enter a valid Kenyan phone number (e.g., +254 700 000 000)")]
    InvalidPhone { field: String },
}

impl ValidationError {
    /// Name of the field this error belongs to, so the page can mark it.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::InvalidEmail { field }
            | ValidationError::InvalidPhone { field } => field,
        }
    }

    /// The visitor-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

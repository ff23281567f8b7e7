//! # Validation Module
//!
//! Field rules applied to a form before anything else happens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Per Required Field, In Document Order                  │
//! │                                                                         │
//! │  value.trim() empty? ──yes──► "<Label> is required"                    │
//! │        │ no                                                             │
//! │        ▼                                                                │
//! │  kind == Email and not local@domain.tld?                               │
//! │        └──yes──► "Please enter a valid email address"                  │
//! │        ▼                                                                │
//! │  kind == Tel and not a Kenyan mobile number?                           │
//! │        └──yes──► "Please enter a valid Kenyan phone number (...)"      │
//! │                                                                         │
//! │  Optional fields are never examined.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use swiftconnect_core::validation::{is_valid_email, is_valid_kenyan_phone};
//!
//! assert!(is_valid_email("a@b.co"));
//! assert!(is_valid_kenyan_phone("+254 712 345 678"));
//! ```

use crate::error::ValidationError;
use crate::types::{FieldKind, FormField, FormSubmission};

/// Country code prefixes accepted in front of a Kenyan mobile number.
const PHONE_PREFIXES: [&str; 3] = ["+254", "254", "0"];

/// Digits after the `7`/`1` network digit.
const PHONE_SUBSCRIBER_DIGITS: usize = 8;

// =============================================================================
// Form Validator
// =============================================================================

/// Validates every required field of a submission.
///
/// Returns one error per failing field, in encounter order. An empty list
/// means the form may proceed. Never panics.
///
/// ## Example
/// ```rust
/// use swiftconnect_core::types::{FieldKind, FormField, FormSubmission};
/// use swiftconnect_core::validation::validate_form;
///
/// let form = FormSubmission::new("contact")
///     .with_field(FormField::new("name", "Full Name", FieldKind::Text).required())
///     .with_field(FormField::new("email", "Email", FieldKind::Email).required().with_value("a@b"));
///
/// let errors = validate_form(&form);
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].to_string(), "Full Name is required");
/// ```
pub fn validate_form(form: &FormSubmission) -> Vec<ValidationError> {
    form.fields
        .iter()
        .filter(|f| f.required)
        .filter_map(validate_field)
        .collect()
}

/// Applies the rules to a single field regardless of its required flag.
pub fn validate_field(field: &FormField) -> Option<ValidationError> {
    if field.is_blank() {
        return Some(ValidationError::Required {
            field: field.name.clone(),
            label: field.label.clone(),
        });
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(&field.value) => Some(ValidationError::InvalidEmail {
            field: field.name.clone(),
        }),
        FieldKind::Tel if !is_valid_kenyan_phone(&field.value) => {
            Some(ValidationError::InvalidPhone {
                field: field.name.clone(),
            })
        }
        _ => None,
    }
}

// =============================================================================
// Format Checks
// =============================================================================

/// Permissive `local@domain.tld` check.
///
/// ## Rules
/// - exactly one `@`, with something on both sides
/// - no whitespace anywhere
/// - the domain has a `.` that is neither its first nor its last character
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Kenyan mobile number check.
///
/// Whitespace is removed first. Then the number must be one of
/// `+254`, `254` or `0`, followed by `7` or `1`, followed by 8 digits.
///
/// ```text
/// +254 700 000 000   ✓
/// 0712345678         ✓
/// 0812345678         ✗  (network digit must be 7 or 1)
/// 12345              ✗
/// ```
pub fn is_valid_kenyan_phone(phone: &str) -> bool {
    let compact: String = phone.chars().filter(|c| !c.is_whitespace()).collect();

    PHONE_PREFIXES.iter().any(|prefix| {
        compact
            .strip_prefix(prefix)
            .is_some_and(is_mobile_subscriber_part)
    })
}

/// `[17]` followed by exactly eight ASCII digits.
fn is_mobile_subscriber_part(rest: &str) -> bool {
    let mut chars = rest.chars();
    matches!(chars.next(), Some('7' | '1'))
        && rest.len() == PHONE_SUBSCRIBER_DIGITS + 1
        && chars.all(|c| c.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================

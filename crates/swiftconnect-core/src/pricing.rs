//! # Pricing Module
//!
//! The `Kes` amount type and the delivery price estimate.
//!
//! ## The Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  estimate = round( 200 KES × service multiplier × weight factor )       │
//! │                                                                         │
//! │  service multiplier:  Standard Delivery  1.0                            │
//! │                       Express Delivery   1.8                            │
//! │                       Same-Day           2.5                            │
//! │                       Cargo Transport    1.2                            │
//! │                       (anything else)    1.0                            │
//! │                                                                         │
//! │  weight factor:       leading integer of the input, at least 1          │
//! │                       "5" → 5   "2.9" → 2   "abc" → 1   "0" → 1         │
//! │                                                                         │
//! │  Pickup and delivery locations do not change the amount.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Integer Math
//! Multipliers are basis points, so the whole computation is
//! `(200 × bps × factor + 5000) / 10000` on integers.
//!
//! ## Usage
//! ```rust
//! use swiftconnect_core::pricing::estimate;
//!
//! assert_eq!(estimate("Standard Delivery", 5_u32).amount(), 1000);
//! assert_eq!(estimate("Same-Day", "2").to_string(), "KES 1,000");
//! assert_eq!(estimate("Unknown", "abc"), estimate("Unknown", 1_u32));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::types::{field_names, FormSubmission, ServiceType};
use crate::BASE_RATE_KES;

/// Basis points in 1.0×.
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Kes Type
// =============================================================================

/// A whole number of Kenyan shillings.
///
/// ## Display
/// `KES` label plus grouped thousands, the way the page shows prices:
/// ```rust
/// use swiftconnect_core::pricing::Kes;
///
/// assert_eq!(Kes::from_amount(1_234_567).to_string(), "KES 1,234,567");
/// assert_eq!(Kes::from_amount(360).grouped(), "360");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Kes(i64);

impl Kes {
    #[inline]
    pub const fn from_amount(amount: i64) -> Self {
        Kes(amount)
    }

    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// The amount with `,` between groups of three digits, no label.
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        if self.0 < 0 {
            out.push('-');
        }
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Kes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KES {}", self.grouped())
    }
}

// =============================================================================
// Weight Input
// =============================================================================

/// Weight as it reaches the calculator: typed text from the page, or a
/// number from code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightInput<'a> {
    Text(&'a str),
    Kilograms(f64),
}

impl<'a> From<&'a str> for WeightInput<'a> {
    fn from(text: &'a str) -> Self {
        WeightInput::Text(text)
    }
}

impl<'a> From<&'a String> for WeightInput<'a> {
    fn from(text: &'a String) -> Self {
        WeightInput::Text(text.as_str())
    }
}

impl From<f64> for WeightInput<'_> {
    fn from(kg: f64) -> Self {
        WeightInput::Kilograms(kg)
    }
}

impl From<u32> for WeightInput<'_> {
    fn from(kg: u32) -> Self {
        WeightInput::Kilograms(f64::from(kg))
    }
}

impl WeightInput<'_> {
    /// Whole kilograms charged for, never below 1.
    pub fn factor(&self) -> i64 {
        let parsed = match self {
            WeightInput::Text(text) => parse_leading_integer(text),
            WeightInput::Kilograms(kg) if kg.is_finite() => Some(kg.trunc() as i64),
            WeightInput::Kilograms(_) => None,
        };

        match parsed {
            Some(n) if n >= 1 => n,
            _ => 1,
        }
    }
}

/// Reads the integer at the start of `text`: leading whitespace, an
/// optional sign, then decimal digits. Whatever follows the digits is
/// ignored. `None` when there are no digits.
fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = &rest[..rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len())];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.bytes().fold(0_i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

// =============================================================================
// Estimate
// =============================================================================

/// Multiplier for a service option text, 1.0× when it is not one of ours.
pub fn multiplier_bps(service_type: &str) -> i64 {
    ServiceType::from_label(service_type)
        .map(|s| s.multiplier_bps())
        .unwrap_or(BPS_SCALE as i64)
}

/// Estimates the delivery price.
///
/// Unknown service types and unreadable weights never fail; they price as
/// 1.0× and 1 kg respectively.
///
/// ## User Workflow
/// ```text
/// Booking form: service = "Express Delivery", weight = "3"
///      │
///      ▼
/// estimate() ← THIS FUNCTION (on submit and on every keystroke)
///      │
///      ▼
/// 200 × 1.8 × 3 = KES 1,080
/// ```
pub fn estimate<'a>(service_type: &str, weight: impl Into<WeightInput<'a>>) -> Kes {
    let factor = weight.into().factor();
    let raw = i128::from(BASE_RATE_KES) * i128::from(multiplier_bps(service_type)) * i128::from(factor);
    let rounded = (raw + BPS_SCALE / 2) / BPS_SCALE;
    Kes::from_amount(i64::try_from(rounded).unwrap_or(i64::MAX))
}

/// Live price for the booking form's submit button.
///
/// Only offered once pickup, delivery and weight all have values; the
/// service select always has one.
pub fn preview_price(form: &FormSubmission) -> Option<Kes> {
    let value = |name: &str| form.field(name).map(|f| f.value.as_str()).unwrap_or("");

    let pickup = value(field_names::PICKUP);
    let delivery = value(field_names::DELIVERY);
    let weight = value(field_names::WEIGHT);

    if pickup.is_empty() || delivery.is_empty() || weight.is_empty() {
        return None;
    }

    Some(estimate(value(field_names::SERVICE), weight))
}

// =============================================================================
// Unit Tests
// =============================================================================

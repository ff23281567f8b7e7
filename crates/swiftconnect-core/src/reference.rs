//! # Reference Module
//!
//! Clock and entropy seams, plus the booking reference generator.
//!
//! ## Why Injected Sources?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  generate_booking_reference(clock, rng)                                 │
//! │                                                                         │
//! │   production:  SystemClock  + ThreadRandom   → SC250105417 (varies)     │
//! │   tests:       FixedClock   + SequenceRandom → SC250105042 (always)     │
//! │                                                                         │
//! │  The core never reads the wall clock or a global RNG by itself.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reference Format
//! `SC` + `YYMMDD` (UTC date) + three zero-padded random digits.
//! References are not checked for uniqueness and are never stored.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::REFERENCE_PREFIX;

// =============================================================================
// Clock
// =============================================================================

/// Source of "now".
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

// =============================================================================
// Random Source
// =============================================================================

/// Source of uniformly distributed fractions in `[0, 1)`.
pub trait RandomSource {
    fn next_fraction(&mut self) -> f64;
}

/// Fractions from the thread-local generator.
///
/// Holds no generator itself so it stays `Send` and can move into
/// spawned tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_fraction(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Replays a fixed list of fractions, wrapping around at the end.
/// An empty list always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        SequenceRandom {
            values: values.into(),
            next: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_fraction(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next = (self.next + 1) % self.values.len();
        value
    }
}

/// Uniform index into a collection of `len` items. `len` must be non-zero.
pub(crate) fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    let fraction = rng.next_fraction().clamp(0.0, 1.0);
    ((fraction * len as f64) as usize).min(len - 1)
}

// =============================================================================
// Booking Reference
// =============================================================================

/// A booking reference such as `SC250105042`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds a fresh booking reference from the clock and entropy given.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use swiftconnect_core::reference::{generate_booking_reference, FixedClock, SequenceRandom};
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 5, 9, 30, 0).unwrap());
/// let mut rng = SequenceRandom::new(vec![0.042]);
///
/// let reference = generate_booking_reference(&clock, &mut rng);
/// assert_eq!(reference.as_str(), "SC250105042");
/// ```
pub fn generate_booking_reference(
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> BookingReference {
    BookingReference(format!(
        "{}{}{:03}",
        REFERENCE_PREFIX,
        date_code(clock.now()),
        three_digit_suffix(rng)
    ))
}

/// Placeholder text for an empty tracking input that just gained focus,
/// e.g. `"e.g., SC250105042"`.
pub fn suggest_tracking_placeholder(clock: &dyn Clock, rng: &mut dyn RandomSource) -> String {
    format!("e.g., {}", generate_booking_reference(clock, rng))
}

/// `YYMMDD` of the UTC date.
fn date_code(now: DateTime<Utc>) -> String {
    now.format("%y%m%d").to_string()
}

/// `floor(fraction × 1000)`, kept inside `0..=999`.
fn three_digit_suffix(rng: &mut dyn RandomSource) -> u32 {
    let fraction = rng.next_fraction().clamp(0.0, 1.0);
    ((fraction * 1000.0) as u32).min(999)
}

// =============================================================================
// Unit Tests
// =============================================================================

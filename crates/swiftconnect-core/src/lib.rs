//! # swiftconnect-core: Pure Form Pipeline for SwiftConnect Logistics
//!
//! This crate holds every piece of the website's form handling that has
//! actual logic in it, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   SwiftConnect Website Architecture                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Page (static markup)                     │   │
//! │  │   Booking form ──► Tracking form ──► Contact form               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ submit / input events                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/site (host adapter)                     │   │
//! │  │   submit_form, preview_price, dismiss_notification, timers      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ swiftconnect-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌──────────┐ ┌────────────┐ ┌──────────────┐  │   │
//! │  │  │ validation │ │ pricing  │ │ reference  │ │ notification │  │   │
//! │  │  │  required  │ │  Kes     │ │ tracking   │ │  slot        │  │   │
//! │  │  │  email/tel │ │ estimate │ │ generators │ │  messages    │  │   │
//! │  │  └────────────┘ └──────────┘ └────────────┘ └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • INJECTED CLOCK AND ENTROPY               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Form submissions, fields, service types
//! - [`validation`] - Required / email / Kenyan phone rules
//! - [`pricing`] - `Kes` amounts and the price estimate
//! - [`reference`] - Clock and entropy seams, booking references
//! - [`tracking`] - Mock tracking results
//! - [`notification`] - Single-slot notification state machine
//! - [`messages`] - User-facing message text
//! - [`submission`] - The whole pipeline, one submit at a time
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use swiftconnect_core::pricing::estimate;
//!
//! let price = estimate("Express Delivery", 1_u32);
//! assert_eq!(price.amount(), 360);
//! assert_eq!(price.to_string(), "KES 360");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod messages;
pub mod notification;
pub mod pricing;
pub mod reference;
pub mod submission;
pub mod tracking;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use notification::{Notice, Notification, NotificationId, NotificationSlot, Severity};
pub use pricing::{estimate, Kes};
pub use reference::{BookingReference, Clock, RandomSource, SystemClock, ThreadRandom};
pub use submission::{process_submission, SubmissionOutcome};
pub use tracking::TrackingResult;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Base rate of every delivery estimate, in KES.
pub const BASE_RATE_KES: i64 = 200;

/// Prefix shared by booking references and tracking numbers.
pub const REFERENCE_PREFIX: &str = "SC";

/// How long a notification stays up before it expires on its own.
pub const NOTIFICATION_TTL_SECS: u64 = 6;

/// Simulated latency of a tracking lookup.
pub const TRACKING_LOOKUP_DELAY_SECS: u64 = 1;

/// How long a submit button shows "Processing..." before it re-enables.
pub const BUTTON_RESET_DELAY_SECS: u64 = 2;

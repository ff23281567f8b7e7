//! # Tracking Module
//!
//! Mock tracking lookups. There is no shipment database behind this: a
//! result is one of three canned statuses paired with whatever number the
//! visitor typed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::reference::{pick_index, RandomSource};

/// Delivery estimate shown on every tracking result.
pub const ESTIMATED_DELIVERY: &str = "Tomorrow, 2:00 PM";

/// One canned step of a shipment's journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CannedStatus {
    pub status: &'static str,
    pub location: &'static str,
    pub time_ago: &'static str,
}

/// The statuses a lookup can return, picked uniformly.
pub const CANNED_STATUSES: [CannedStatus; 3] = [
    CannedStatus {
        status: "Package Received",
        location: "Nairobi Hub",
        time_ago: "2 hours ago",
    },
    CannedStatus {
        status: "In Transit",
        location: "Nakuru Sorting Center",
        time_ago: "4 hours ago",
    },
    CannedStatus {
        status: "Out for Delivery",
        location: "Eldoret Hub",
        time_ago: "30 minutes ago",
    },
];

/// What the tracking result block displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TrackingResult {
    pub tracking_number: String,
    pub status: String,
    pub location: String,
    pub last_update: String,
    pub estimated_delivery: String,
}

/// Produces a mock result for `tracking_number`.
///
/// ## Example
/// ```rust
/// use swiftconnect_core::reference::SequenceRandom;
/// use swiftconnect_core::tracking::generate_tracking_result;
///
/// let result = generate_tracking_result("SC25010500", &mut SequenceRandom::new(vec![0.5]));
/// assert_eq!(result.tracking_number, "SC25010500");
/// assert_eq!(result.status, "In Transit");
/// ```
pub fn generate_tracking_result(tracking_number: &str, rng: &mut dyn RandomSource) -> TrackingResult {
    let canned = CANNED_STATUSES[pick_index(rng, CANNED_STATUSES.len())];

    TrackingResult {
        tracking_number: tracking_number.to_string(),
        status: canned.status.to_string(),
        location: canned.location.to_string(),
        last_update: canned.time_ago.to_string(),
        estimated_delivery: ESTIMATED_DELIVERY.to_string(),
    }
}

//! # Tracking Commands
//!
//! Result blocks under the tracking forms, and the example number shown in
//! an empty tracking input.

use serde::Serialize;
use swiftconnect_core::messages::tracking_block;
use swiftconnect_core::reference;
use swiftconnect_core::tracking::TrackingResult;
use tracing::debug;

use crate::state::{ButtonsState, SourcesState, SubmitButton, TrackingBoardState};

/// A rendered result block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingBlock {
    pub result: TrackingResult,

    /// Display text, one line per row of the block.
    pub text: String,
}

/// The block under `form_id`, once its lookup has finished.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Tracking Number [SC25010500]  [ Track ]                                │
/// │                                                                         │
/// │  ┌─ 1s later ───────────────────────────────────────────────────┐      │
/// │  │ Tracking Result:                                              │      │
/// │  │ SC25010500                                                    │      │
/// │  │ Status: In Transit                                            │      │
/// │  │ Location: Nakuru Sorting Center                               │      │
/// │  │ Last Update: 4 hours ago                                      │      │
/// │  │ Expected Delivery: Tomorrow, 2:00 PM                          │      │
/// │  └───────────────────────────────────────────────────────────────┘      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_tracking_result(board: &TrackingBoardState, form_id: &str) -> Option<TrackingBlock> {
    debug!(form_id = %form_id, "get_tracking_result command");

    board.get(form_id).map(|result| TrackingBlock {
        text: tracking_block(&result),
        result,
    })
}

/// Placeholder for an empty tracking input that just gained focus.
pub fn suggest_tracking_placeholder(sources: &SourcesState) -> String {
    debug!("suggest_tracking_placeholder command");
    sources.with_rng(|rng| reference::suggest_tracking_placeholder(sources.clock(), rng))
}

/// Current state of a form's submit button.
pub fn get_button_state(buttons: &ButtonsState, form_id: &str) -> SubmitButton {
    debug!(form_id = %form_id, "get_button_state command");
    buttons.get(form_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use swiftconnect_core::reference::{FixedClock, SequenceRandom};
    use swiftconnect_core::tracking::generate_tracking_result;

    #[test]
    fn test_block_text_follows_result() {
        let board = TrackingBoardState::new();
        assert!(get_tracking_result(&board, "track").is_none());

        let result = generate_tracking_result("SC25010500", &mut SequenceRandom::new(vec![0.5]));
        board.upsert("track", result.clone());

        let block = get_tracking_result(&board, "track").unwrap();
        assert_eq!(block.result, result);
        assert!(block.text.contains("SC25010500"));
        assert!(block.text.contains(&result.status));
    }

    #[test]
    fn test_placeholder_uses_sources() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap());
        let sources = SourcesState::new(clock, SequenceRandom::new(vec![0.25]));

        assert_eq!(suggest_tracking_placeholder(&sources), "e.g., SC250105250");
    }

    #[test]
    fn test_unregistered_button() {
        let buttons = ButtonsState::new();
        assert_eq!(get_button_state(&buttons, "contact").label, "Submit");
    }
}

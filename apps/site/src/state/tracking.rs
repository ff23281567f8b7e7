//! # Tracking Board State
//!
//! Persistent tracking result blocks, one per originating form. A second
//! lookup from the same form overwrites that form's block in place; blocks
//! never expire.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use swiftconnect_core::tracking::{generate_tracking_result, TrackingResult};
use swiftconnect_core::TRACKING_LOOKUP_DELAY_SECS;
use tracing::info;

use super::SourcesState;

#[derive(Debug, Clone, Default)]
pub struct TrackingBoardState {
    blocks: Arc<Mutex<HashMap<String, TrackingResult>>>,
}

impl TrackingBoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The block currently shown under `form_id`, if any.
    pub fn get(&self, form_id: &str) -> Option<TrackingResult> {
        let blocks = self.blocks.lock().expect("Tracking board mutex poisoned");
        blocks.get(form_id).cloned()
    }

    /// Writes or replaces the block under `form_id`.
    pub fn upsert(&self, form_id: &str, result: TrackingResult) {
        let mut blocks = self.blocks.lock().expect("Tracking board mutex poisoned");
        blocks.insert(form_id.to_string(), result);
    }

    /// Simulates the lookup: waits the fixed delay, then renders the result
    /// block for `form_id`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule_lookup(&self, sources: &SourcesState, form_id: String, tracking_number: String) {
        let board = self.clone();
        let sources = sources.clone();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(TRACKING_LOOKUP_DELAY_SECS)).await;

            let result = sources.with_rng(|rng| generate_tracking_result(&tracking_number, rng));
            info!(
                form_id = %form_id,
                tracking_number = %result.tracking_number,
                status = %result.status,
                "tracking result ready"
            );
            board.upsert(&form_id, result);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftconnect_core::reference::SequenceRandom;
    use swiftconnect_core::tracking::CANNED_STATUSES;

    #[tokio::test(start_paused = true)]
    async fn test_lookup_renders_after_delay() {
        let board = TrackingBoardState::new();
        let sources = SourcesState::with_random(SequenceRandom::new(vec![0.9]));

        board.schedule_lookup(&sources, "track".to_string(), "SC25010500".to_string());
        assert!(board.get("track").is_none());

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        let block = board.get("track").unwrap();
        assert_eq!(block.tracking_number, "SC25010500");
        assert_eq!(block.status, CANNED_STATUSES[2].status);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_lookup_updates_block_in_place() {
        let board = TrackingBoardState::new();
        let sources = SourcesState::with_random(SequenceRandom::new(vec![0.0]));

        board.schedule_lookup(&sources, "track".to_string(), "SC1".to_string());
        tokio::time::sleep(Duration::from_secs(2)).await;
        board.schedule_lookup(&sources, "track".to_string(), "SC2".to_string());
        board.schedule_lookup(&sources, "hero-track".to_string(), "SC3".to_string());
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(board.get("track").unwrap().tracking_number, "SC2");
        assert_eq!(board.get("hero-track").unwrap().tracking_number, "SC3");
    }
}

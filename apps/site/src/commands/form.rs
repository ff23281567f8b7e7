//! # Form Commands
//!
//! The submit path for every form on the page.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    submit_form                                          │
//! │                                                                         │
//! │  click ──► press button ──► already processing? ──► Ignored            │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │         process_submission (validation, then the form's handler)       │
//! │                 │                                                       │
//! │      ┌──────────┼──────────────┬──────────────┬─────────────┐          │
//! │      ▼          ▼              ▼              ▼             ▼          │
//! │   Rejected    Booked     TrackingPending  ContactSent    Ignored       │
//! │   (error)   (success)        (info)        (success)                   │
//! │      │          │              │              │                        │
//! │      └──────────┴──────┬───────┴──────────────┘                        │
//! │                        ▼                                                │
//! │              notification slot (6s)                                     │
//! │                                                                         │
//! │  TrackingPending also schedules the lookup (1s) for that form's block. │
//! │  The button re-enables itself after 2s whatever the outcome.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use swiftconnect_core::submission::{process_submission, SubmissionOutcome};
use swiftconnect_core::types::FormSubmission;
use tracing::{debug, info};

use crate::commands::notification::NotificationView;
use crate::error::ApiError;
use crate::state::{SiteState, SubmitButton};

/// Everything the page updates after a submit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub outcome: SubmissionOutcome,

    /// The notification now on screen, if this submit raised one.
    pub notification: Option<NotificationView>,

    /// The submit button as it looks right after the click.
    pub button: SubmitButton,

    /// Whether the page should clear the form's fields.
    pub reset_form: bool,
}

/// Submits a form.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Booking form                                                           │
/// │                                                                         │
/// │  Pickup  [Nairobi ]   Delivery [Kisumu  ]                               │
/// │  Service [Standard Delivery ▾]   Weight [5 ]                            │
/// │                                                                         │
/// │  [ Book Now - KES 1,000 ]  ──click──►  [ Processing... ]               │
/// │                                                                         │
/// │  ┌───────────────────────────────────────────────────────────────┐     │
/// │  │ ✓ Booking Confirmed! ... Booking Reference: SC250105250       │     │
/// │  └───────────────────────────────────────────────────────────────┘     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// Validation failures are NOT errors; they come back as
/// `SubmissionOutcome::Rejected`. `Err` means the form itself is malformed
/// (a booking form without a `weight` field, say).
///
/// Must be called from within a tokio runtime.
pub fn submit_form(state: &SiteState, form: FormSubmission) -> Result<SubmitResponse, ApiError> {
    debug!(form_id = %form.form_id, fields = form.fields.len(), "submit_form command");

    if !state.buttons.press(&form.form_id) {
        debug!(form_id = %form.form_id, "submit button still processing, click ignored");
        return Ok(SubmitResponse {
            outcome: SubmissionOutcome::Ignored,
            notification: None,
            button: state.buttons.get(&form.form_id),
            reset_form: false,
        });
    }
    let button = state.buttons.get(&form.form_id);

    let branding = state.config.branding();
    let outcome = state.sources.with_rng(|rng| {
        process_submission(&form, &branding, state.sources.clock(), rng)
    })?;

    match &outcome {
        SubmissionOutcome::Rejected { errors, .. } => {
            info!(form_id = %form.form_id, errors = errors.len(), "submission rejected");
        }
        SubmissionOutcome::Booked { quote, reference, .. } => {
            info!(form_id = %form.form_id, reference = %reference, quote = %quote, "booking confirmed");
        }
        SubmissionOutcome::TrackingPending { tracking_number, .. } => {
            info!(form_id = %form.form_id, tracking_number = %tracking_number, "tracking lookup started");
            state.tracking.schedule_lookup(
                &state.sources,
                form.form_id.clone(),
                tracking_number.clone(),
            );
        }
        SubmissionOutcome::ContactSent { .. } => {
            info!(form_id = %form.form_id, "contact message accepted");
        }
        SubmissionOutcome::Ignored => {
            debug!(form_id = %form.form_id, "form has no handler");
        }
    }

    let notification = outcome
        .notice()
        .cloned()
        .map(|notice| state.notifications.notify(notice, state.sources.now()))
        .map(NotificationView::from);

    Ok(SubmitResponse {
        reset_form: outcome.resets_form(),
        outcome,
        notification,
        button,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::{ConfigState, SourcesState};
    use chrono::{TimeZone, Utc};
    use std::time::Duration;
    use swiftconnect_core::notification::Severity;
    use swiftconnect_core::reference::{FixedClock, SequenceRandom};
    use swiftconnect_core::tracking::CANNED_STATUSES;
    use swiftconnect_core::types::{FieldKind, FormField};

    fn site() -> SiteState {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 5, 10, 0, 0).unwrap());
        SiteState::new(
            ConfigState::default(),
            SourcesState::new(clock, SequenceRandom::new(vec![0.25])),
        )
    }

    fn booking_form(pickup: &str, weight: &str) -> FormSubmission {
        FormSubmission::new("booking")
            .with_field(FormField::new("pickup", "Pickup Location", FieldKind::Text).required().with_value(pickup))
            .with_field(FormField::new("delivery", "Delivery Location", FieldKind::Text).required().with_value("Kisumu"))
            .with_field(FormField::new("service", "Service Type", FieldKind::Select).with_value("Standard Delivery"))
            .with_field(FormField::new("weight", "Weight (kg)", FieldKind::Number).with_value(weight))
    }

    #[tokio::test(start_paused = true)]
    async fn test_booking_confirms_and_button_recovers() {
        let state = site();
        let response = submit_form(&state, booking_form("Nairobi", "5")).unwrap();

        match &response.outcome {
            SubmissionOutcome::Booked { quote, reference, .. } => {
                assert_eq!(quote.amount(), 1000);
                assert_eq!(reference.as_str(), "SC250105250");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(response.reset_form);
        assert_eq!(response.button.label, "Processing...");
        assert!(response.button.disabled);

        let shown = response.notification.unwrap();
        assert_eq!(shown.notification.severity, Severity::Success);
        assert_eq!(shown.colour_token, "--success-green");
        assert!(shown.notification.message.contains("SC250105250"));

        tokio::time::sleep(Duration::from_millis(2_100)).await;
        let button = state.buttons.get("booking");
        assert_eq!(button.label, "Calculate Price & Book");
        assert!(!button.disabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_required_field_is_rejected() {
        let state = site();
        let response = submit_form(&state, booking_form("", "5")).unwrap();

        assert!(response.outcome.is_rejected());
        assert!(!response.reset_form);
        let shown = state.notifications.current().unwrap();
        assert_eq!(shown.severity, Severity::Error);
        assert!(shown.message.starts_with("Please correct the following errors:"));
        assert!(shown.message.contains("Pickup Location is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tracking_submission_renders_block_after_delay() {
        let state = site();
        let form = FormSubmission::new("track").with_field(
            FormField::new("tracking_number", "Tracking Number", FieldKind::Text)
                .required()
                .with_value("SC25010500"),
        );

        let response = submit_form(&state, form).unwrap();
        assert_eq!(
            response.notification.unwrap().notification.message,
            "Looking up tracking information..."
        );
        assert!(state.tracking.get("track").is_none());

        tokio::time::sleep(Duration::from_millis(1_100)).await;
        let block = state.tracking.get("track").unwrap();
        assert_eq!(block.tracking_number, "SC25010500");
        assert!(CANNED_STATUSES.iter().any(|s| s.status == block.status));
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_while_processing_is_ignored() {
        let state = site();
        submit_form(&state, booking_form("Nairobi", "5")).unwrap();
        let first = state.notifications.current().unwrap();

        let again = submit_form(&state, booking_form("Nairobi", "5")).unwrap();
        assert_eq!(again.outcome, SubmissionOutcome::Ignored);
        assert!(again.notification.is_none());
        assert_eq!(state.notifications.current().unwrap().id, first.id);
    }

    #[tokio::test(start_paused = true)]
    async fn test_booking_without_weight_field_is_invalid_form() {
        let state = site();
        let form = FormSubmission::new("booking")
            .with_field(FormField::new("pickup", "Pickup Location", FieldKind::Text).required().with_value("Nairobi"))
            .with_field(FormField::new("delivery", "Delivery Location", FieldKind::Text).required().with_value("Kisumu"))
            .with_field(FormField::new("service", "Service Type", FieldKind::Select).with_value("Express Delivery"));

        let err = submit_form(&state, form).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidForm);
    }
}

//! # Submission Pipeline
//!
//! One submit event, start to finish.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  FormSubmission                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_form ──errors──► Rejected { errors, notice: error }          │
//! │       │ ok                                                              │
//! │       ▼                                                                 │
//! │  classify                                                               │
//! │   ├── Booking  ──► estimate + reference ──► Booked { notice: success } │
//! │   ├── Tracking ──────────────────────────► TrackingPending { info }    │
//! │   │                (host runs the lookup delay, then                    │
//! │   │                 generate_tracking_result)                           │
//! │   ├── Contact  ──────────────────────────► ContactSent { success }     │
//! │   └── (none)   ──────────────────────────► Ignored                     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationError};
use crate::messages::{self, BookingDetails};
use crate::notification::{Notice, Severity};
use crate::pricing::{estimate, Kes};
use crate::reference::{generate_booking_reference, BookingReference, Clock, RandomSource};
use crate::types::{field_names, FormKind, FormSubmission};
use crate::validation::validate_form;

/// Company details quoted back in confirmations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub company_name: String,
    pub support_line: String,
}

impl Default for Branding {
    fn default() -> Self {
        Branding {
            company_name: messages::DEFAULT_COMPANY_NAME.to_string(),
            support_line: messages::DEFAULT_SUPPORT_LINE.to_string(),
        }
    }
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// Validation failed; nothing else ran.
    Rejected {
        errors: Vec<ValidationError>,
        notice: Notice,
    },

    Booked {
        quote: Kes,
        reference: BookingReference,
        notice: Notice,
    },

    /// The lookup result follows after the simulated delay.
    #[serde(rename_all = "camelCase")]
    TrackingPending {
        tracking_number: String,
        notice: Notice,
    },

    ContactSent { notice: Notice },

    /// Valid, but not one of the site's forms.
    Ignored,
}

impl SubmissionOutcome {
    /// The notification to show, if any.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            SubmissionOutcome::Rejected { notice, .. }
            | SubmissionOutcome::Booked { notice, .. }
            | SubmissionOutcome::TrackingPending { notice, .. }
            | SubmissionOutcome::ContactSent { notice } => Some(notice),
            SubmissionOutcome::Ignored => None,
        }
    }

    /// Whether the page should clear the form.
    pub fn resets_form(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Booked { .. } | SubmissionOutcome::ContactSent { .. }
        )
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SubmissionOutcome::Rejected { .. })
    }
}

/// Runs validation and the matching form handler.
///
/// Fails only when a booking form lacks one of the fields its handler
/// reads (`delivery`, `service`, `weight`).
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use swiftconnect_core::reference::{FixedClock, SequenceRandom};
/// use swiftconnect_core::submission::{process_submission, Branding, SubmissionOutcome};
/// use swiftconnect_core::types::{FieldKind, FormField, FormSubmission};
///
/// let form = FormSubmission::new("booking")
///     .with_field(FormField::new("pickup", "Pickup Location", FieldKind::Text).required().with_value("Nairobi"))
///     .with_field(FormField::new("delivery", "Delivery Location", FieldKind::Text).required().with_value("Kisumu"))
///     .with_field(FormField::new("service", "Service Type", FieldKind::Select).with_value("Same-Day"))
///     .with_field(FormField::new("weight", "Weight (kg)", FieldKind::Number).with_value("2"));
///
/// let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 5, 8, 0, 0).unwrap());
/// let outcome = process_submission(&form, &Branding::default(), &clock, &mut SequenceRandom::new(vec![0.5])).unwrap();
///
/// match outcome {
///     SubmissionOutcome::Booked { quote, reference, .. } => {
///         assert_eq!(quote.amount(), 1000);
///         assert_eq!(reference.as_str(), "SC250105500");
///     }
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
pub fn process_submission(
    form: &FormSubmission,
    branding: &Branding,
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> CoreResult<SubmissionOutcome> {
    let errors = validate_form(form);
    if !errors.is_empty() {
        let notice = Notice::new(messages::validation_summary(&errors), Severity::Error);
        return Ok(SubmissionOutcome::Rejected { errors, notice });
    }

    let outcome = match form.kind() {
        Some(FormKind::Booking) => handle_booking(form, clock, rng)?,
        Some(FormKind::Tracking) => SubmissionOutcome::TrackingPending {
            tracking_number: form.value_of(field_names::TRACKING_NUMBER)?.to_string(),
            notice: Notice::new(messages::TRACKING_LOOKUP_MESSAGE, Severity::Info),
        },
        Some(FormKind::Contact) => SubmissionOutcome::ContactSent {
            notice: Notice::new(
                messages::contact_confirmation(&branding.company_name, &branding.support_line),
                Severity::Success,
            ),
        },
        None => SubmissionOutcome::Ignored,
    };

    Ok(outcome)
}

fn handle_booking(
    form: &FormSubmission,
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> CoreResult<SubmissionOutcome> {
    let pickup = form.value_of(field_names::PICKUP)?;
    let delivery = form.value_of(field_names::DELIVERY)?;
    let service = form.value_of(field_names::SERVICE)?;
    let weight = form.value_of(field_names::WEIGHT)?;

    let quote = estimate(service, weight);
    let reference = generate_booking_reference(clock, rng);

    let message = messages::booking_confirmation(&BookingDetails {
        pickup,
        delivery,
        service,
        weight,
        price: quote,
        reference: &reference,
    });

    Ok(SubmissionOutcome::Booked {
        quote,
        reference,
        notice: Notice::new(message, Severity::Success),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::reference::{FixedClock, SequenceRandom};
    use crate::types::{FieldKind, FormField};
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 1, 5, 8, 0, 0).unwrap())
    }

    fn run(form: &FormSubmission) -> CoreResult<SubmissionOutcome> {
        process_submission(form, &Branding::default(), &clock(), &mut SequenceRandom::new(vec![0.25]))
    }

    fn booking(pickup: &str, service: &str, weight: &str) -> FormSubmission {
        FormSubmission::new("booking")
            .with_field(
                FormField::new(field_names::PICKUP, "Pickup Location", FieldKind::Text)
                    .required()
                    .with_value(pickup),
            )
            .with_field(
                FormField::new(field_names::DELIVERY, "Delivery Location", FieldKind::Text)
                    .required()
                    .with_value("Eldoret"),
            )
            .with_field(FormField::new(field_names::SERVICE, "Service Type", FieldKind::Select).with_value(service))
            .with_field(FormField::new(field_names::WEIGHT, "Weight (kg)", FieldKind::Number).with_value(weight))
    }

    #[test]
    fn test_booking_is_priced_and_referenced() {
        let outcome = run(&booking("Nairobi", "Cargo Transport", "10")).unwrap();

        let SubmissionOutcome::Booked { quote, reference, notice } = &outcome else {
            panic!("expected booking, got {outcome:?}");
        };
        assert_eq!(*quote, Kes::from_amount(2400));
        assert_eq!(reference.as_str(), "SC250105250");
        assert_eq!(notice.severity, Severity::Success);
        assert!(notice.message.contains("Estimated Cost: KES 2,400"));
        assert!(outcome.resets_form());
    }

    #[test]
    fn test_invalid_booking_is_rejected_without_pricing() {
        let outcome = run(&booking("  ", "Express Delivery", "3")).unwrap();

        let SubmissionOutcome::Rejected { errors, notice } = &outcome else {
            panic!("expected rejection, got {outcome:?}");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(
            notice.message,
            "Please correct the following errors:\nPickup Location is required"
        );
        assert!(!outcome.resets_form());
    }

    #[test]
    fn test_booking_without_weight_field_is_an_error() {
        let form = FormSubmission::new("booking")
            .with_field(FormField::new(field_names::PICKUP, "Pickup", FieldKind::Text).with_value("Nairobi"))
            .with_field(FormField::new(field_names::DELIVERY, "Delivery", FieldKind::Text).with_value("Nakuru"))
            .with_field(FormField::new(field_names::SERVICE, "Service", FieldKind::Select).with_value("Same-Day"));

        assert!(matches!(run(&form), Err(CoreError::UnknownField(name)) if name == "weight"));
    }

    #[test]
    fn test_tracking_is_pending_with_info_notice() {
        let form = FormSubmission::new("track")
            .with_field(
                FormField::new(field_names::TRACKING_NUMBER, "Tracking Number", FieldKind::Text)
                    .required()
                    .with_value("SC25010500"),
            )
            .with_field(
                FormField::new(field_names::PHONE, "Phone Number", FieldKind::Tel)
                    .required()
                    .with_value("0712345678"),
            );

        let outcome = run(&form).unwrap();
        assert_eq!(
            outcome,
            SubmissionOutcome::TrackingPending {
                tracking_number: "SC25010500".to_string(),
                notice: Notice::new("Looking up tracking information...", Severity::Info),
            }
        );
        assert!(!outcome.resets_form());
    }

    #[test]
    fn test_tracking_with_bad_phone_is_rejected() {
        let form = FormSubmission::new("track")
            .with_field(
                FormField::new(field_names::TRACKING_NUMBER, "Tracking Number", FieldKind::Text)
                    .required()
                    .with_value("SC25010500"),
            )
            .with_field(
                FormField::new(field_names::PHONE, "Phone Number", FieldKind::Tel)
                    .required()
                    .with_value("12345"),
            );

        let outcome = run(&form).unwrap();
        assert!(outcome.is_rejected());
        assert!(outcome
            .notice()
            .unwrap()
            .message
            .ends_with("Please enter a valid Kenyan phone number (e.g., +254 700 000 000)"));
    }

    #[test]
    fn test_contact_uses_branding() {
        let form = FormSubmission::new("contact")
            .with_field(
                FormField::new(field_names::EMAIL, "Email", FieldKind::Email)
                    .required()
                    .with_value("wanjiru@example.co.ke"),
            )
            .with_field(
                FormField::new(field_names::MESSAGE, "Message", FieldKind::TextArea)
                    .required()
                    .with_value("Do you deliver to Garissa?"),
            );

        let branding = Branding {
            company_name: "SwiftConnect Test".to_string(),
            support_line: "+254 711 000 000".to_string(),
        };
        let outcome =
            process_submission(&form, &branding, &clock(), &mut SequenceRandom::default()).unwrap();

        let notice = outcome.notice().unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert!(notice.message.contains("Thank you for contacting SwiftConnect Test."));
        assert!(notice.message.ends_with("+254 711 000 000"));
        assert!(outcome.resets_form());
    }

    #[test]
    fn test_unclassified_form_is_ignored() {
        let form = FormSubmission::new("newsletter").with_field(
            FormField::new(field_names::EMAIL, "Email", FieldKind::Email)
                .required()
                .with_value("a@b.co"),
        );
        let outcome = run(&form).unwrap();
        assert_eq!(outcome, SubmissionOutcome::Ignored);
        assert!(outcome.notice().is_none());
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = run(&booking("Nairobi", "Standard Delivery", "5")).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["outcome"], "booked");
        assert_eq!(json["quote"], 1000);
        assert_eq!(json["reference"], "SC250105250");
        assert_eq!(json["notice"]["severity"], "success");
    }
}

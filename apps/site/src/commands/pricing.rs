//! # Pricing Commands
//!
//! Live price preview while the visitor fills in the booking form.

use serde::Serialize;
use swiftconnect_core::pricing::{self, Kes};
use swiftconnect_core::types::FormSubmission;
use tracing::debug;

use crate::state::{ButtonsState, ConfigState, SubmitButton};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePreview {
    /// `None` until pickup, delivery and weight all have values.
    pub price: Option<Kes>,

    /// The booking button after the update; `None` for other forms.
    pub button: Option<SubmitButton>,
}

/// Recomputes the estimate after any change to the booking inputs.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Weight [5 ]  ──input──►  preview_price  ──►  [ Book Now - KES 1,000 ] │
/// │  Service [Express ▾] ──change──►  preview_price  ──►  [ ... 1,800 ]    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn preview_price(
    buttons: &ButtonsState,
    config: &ConfigState,
    form: &FormSubmission,
) -> PricePreview {
    debug!(form_id = %form.form_id, "preview_price command");

    let price = pricing::preview_price(form);
    let button = match price {
        Some(price) if form.form_id == config.booking_form_id => {
            Some(buttons.show_price(&form.form_id, price))
        }
        _ => None,
    };

    PricePreview { price, button }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftconnect_core::types::{FieldKind, FormField};

    fn form(form_id: &str, service: &str, weight: &str) -> FormSubmission {
        FormSubmission::new(form_id)
            .with_field(FormField::new("pickup", "Pickup Location", FieldKind::Text).with_value("Nairobi"))
            .with_field(FormField::new("delivery", "Delivery Location", FieldKind::Text).with_value("Mombasa"))
            .with_field(FormField::new("service", "Service Type", FieldKind::Select).with_value(service))
            .with_field(FormField::new("weight", "Weight (kg)", FieldKind::Number).with_value(weight))
    }

    fn setup() -> (ButtonsState, ConfigState) {
        let config = ConfigState::default();
        let buttons = ButtonsState::new();
        buttons.register(config.booking_form_id.clone(), config.booking_button_label.clone());
        (buttons, config)
    }

    #[test]
    fn test_preview_updates_booking_button() {
        let (buttons, config) = setup();

        let preview = preview_price(&buttons, &config, &form("booking", "Express Delivery", "5"));
        assert_eq!(preview.price, Some(Kes::from_amount(1800)));
        assert_eq!(preview.button.unwrap().label, "Book Now - KES 1,800");

        let preview = preview_price(&buttons, &config, &form("booking", "Standard Delivery", "5"));
        assert_eq!(preview.button.unwrap().label, "Book Now - KES 1,000");
    }

    #[test]
    fn test_incomplete_form_has_no_price() {
        let (buttons, config) = setup();

        let preview = preview_price(&buttons, &config, &form("booking", "Cargo Transport", ""));
        assert_eq!(preview.price, None);
        assert!(preview.button.is_none());
        assert_eq!(buttons.get("booking").label, "Calculate Price & Book");
    }

    #[test]
    fn test_other_forms_leave_buttons_alone() {
        let (buttons, config) = setup();

        let preview = preview_price(&buttons, &config, &form("quote-widget", "Cargo Transport", "10"));
        assert_eq!(preview.price, Some(Kes::from_amount(2400)));
        assert!(preview.button.is_none());
        assert_eq!(buttons.get("booking").label, "Calculate Price & Book");
    }

    #[test]
    fn test_abbreviated_service_label_prices_at_base_rate() {
        let (buttons, config) = setup();

        // only exact labels carry a multiplier
        let preview = preview_price(&buttons, &config, &form("booking", "Cargo", "10"));
        assert_eq!(preview.price, Some(Kes::from_amount(2000)));
        assert_eq!(preview.button.unwrap().label, "Book Now - KES 2,000");
    }
}

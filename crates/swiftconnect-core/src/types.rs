//! # Domain Types
//!
//! The values a submit event hands to the pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ FormSubmission  │   │   FormField     │   │   FieldKind     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  form_id        │──►│  name           │   │  Text  Email    │       │
//! │  │  fields[]       │   │  label          │   │  Tel   Number   │       │
//! │  └─────────────────┘   │  kind ──────────┼──►│  Select         │       │
//! │          │             │  required       │   │  TextArea       │       │
//! │          ▼             │  value          │   └─────────────────┘       │
//! │  ┌─────────────────┐   └─────────────────┘   ┌─────────────────┐       │
//! │  │    FormKind     │                         │  ServiceType    │       │
//! │  │  Booking        │                         │  Standard  1.0  │       │
//! │  │  Tracking       │                         │  Express   1.8  │       │
//! │  │  Contact        │                         │  Same-Day  2.5  │       │
//! │  └─────────────────┘                         │  Cargo     1.2  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is persisted. A submission lives for one submit event.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Well-Known Field Names
// =============================================================================

/// Field names the pipeline looks for when classifying and handling a form.
pub mod field_names {
    pub const PICKUP: &str = "pickup";
    pub const DELIVERY: &str = "delivery";
    pub const SERVICE: &str = "service";
    pub const WEIGHT: &str = "weight";
    pub const TRACKING_NUMBER: &str = "tracking_number";
    pub const PHONE: &str = "phone";
    pub const EMAIL: &str = "email";
    pub const MESSAGE: &str = "message";
}

// =============================================================================
// Field Kind
// =============================================================================

/// The input type of a field, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Number,
    Select,
    #[serde(rename = "textarea")]
    TextArea,
}

// =============================================================================
// Form Field
// =============================================================================

/// One named input of a submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Machine name (see [`field_names`]).
    pub name: String,

    /// Label shown next to the input; used in "is required" messages.
    pub label: String,

    #[serde(default)]
    pub kind: FieldKind,

    #[serde(default)]
    pub required: bool,

    /// Raw value as typed. Never trimmed here.
    #[serde(default)]
    pub value: String,
}

impl FormField {
    /// Creates an optional, empty field.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        FormField {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
            value: String::new(),
        }
    }

    /// Marks the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the current value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// True when the value is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

// =============================================================================
// Form Kind
// =============================================================================

/// Which of the site's three forms was submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Booking,
    Tracking,
    Contact,
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormKind::Booking => write!(f, "booking"),
            FormKind::Tracking => write!(f, "tracking"),
            FormKind::Contact => write!(f, "contact"),
        }
    }
}

// =============================================================================
// Form Submission
// =============================================================================

/// Everything one submit event carries.
///
/// ## Classification
/// ```text
/// has "pickup" field?           ──yes──► Booking
///        │ no
///        ▼
/// has "tracking_number" field?  ──yes──► Tracking
///        │ no
///        ▼
/// has a textarea?               ──yes──► Contact
///        │ no
///        ▼
///     (unclassified)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormSubmission {
    /// Identifies the originating form on the page. Tracking result blocks
    /// are scoped to it.
    pub form_id: String,

    /// Fields in document order.
    #[serde(default)]
    pub fields: Vec<FormField>,
}

impl FormSubmission {
    /// Creates an empty submission for the given form.
    pub fn new(form_id: impl Into<String>) -> Self {
        FormSubmission {
            form_id: form_id.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field (builder style).
    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the raw value of a field the form must have.
    pub fn value_of(&self, name: &str) -> CoreResult<&str> {
        self.field(name)
            .map(|f| f.value.as_str())
            .ok_or_else(|| CoreError::UnknownField(name.to_string()))
    }

    /// Classifies the form from the fields it carries.
    pub fn kind(&self) -> Option<FormKind> {
        if self.field(field_names::PICKUP).is_some() {
            Some(FormKind::Booking)
        } else if self.field(field_names::TRACKING_NUMBER).is_some() {
            Some(FormKind::Tracking)
        } else if self.fields.iter().any(|f| f.kind == FieldKind::TextArea) {
            Some(FormKind::Contact)
        } else {
            None
        }
    }

    /// Clears every value, like a page form reset.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }
}

// =============================================================================
// Service Type
// =============================================================================

/// Delivery services offered on the booking form.
///
/// Multipliers are stored in basis points (10000 = 1.0×) so the price
/// estimate never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ServiceType {
    #[serde(rename = "Standard Delivery")]
    Standard,
    #[serde(rename = "Express Delivery")]
    Express,
    #[serde(rename = "Same-Day")]
    SameDay,
    #[serde(rename = "Cargo Transport")]
    Cargo,
}

impl ServiceType {
    /// All services, in the order the select lists them.
    pub const ALL: [ServiceType; 4] = [
        ServiceType::Standard,
        ServiceType::Express,
        ServiceType::SameDay,
        ServiceType::Cargo,
    ];

    /// The option text on the booking form.
    pub const fn label(&self) -> &'static str {
        match self {
            ServiceType::Standard => "Standard Delivery",
            ServiceType::Express => "Express Delivery",
            ServiceType::SameDay => "Same-Day",
            ServiceType::Cargo => "Cargo Transport",
        }
    }

    /// Price multiplier in basis points.
    pub const fn multiplier_bps(&self) -> i64 {
        match self {
            ServiceType::Standard => 10_000,
            ServiceType::Express => 18_000,
            ServiceType::SameDay => 25_000,
            ServiceType::Cargo => 12_000,
        }
    }

    /// Matches the exact option text. Anything else is not a known service.
    pub fn from_label(label: &str) -> Option<Self> {
        ServiceType::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_form() -> FormSubmission {
        FormSubmission::new("booking")
            .with_field(FormField::new(field_names::PICKUP, "Pickup Location", FieldKind::Text).required())
            .with_field(FormField::new(field_names::DELIVERY, "Delivery Location", FieldKind::Text).required())
            .with_field(FormField::new(field_names::SERVICE, "Service Type", FieldKind::Select))
            .with_field(FormField::new(field_names::WEIGHT, "Weight (kg)", FieldKind::Number))
    }

    #[test]
    fn test_classify_forms() {
        assert_eq!(booking_form().kind(), Some(FormKind::Booking));

        let tracking = FormSubmission::new("track")
            .with_field(FormField::new(field_names::TRACKING_NUMBER, "Tracking Number", FieldKind::Text))
            .with_field(FormField::new(field_names::PHONE, "Phone Number", FieldKind::Tel));
        assert_eq!(tracking.kind(), Some(FormKind::Tracking));

        let contact = FormSubmission::new("contact")
            .with_field(FormField::new(field_names::EMAIL, "Email", FieldKind::Email))
            .with_field(FormField::new(field_names::MESSAGE, "Message", FieldKind::TextArea));
        assert_eq!(contact.kind(), Some(FormKind::Contact));

        let other = FormSubmission::new("newsletter")
            .with_field(FormField::new(field_names::EMAIL, "Email", FieldKind::Email));
        assert_eq!(other.kind(), None);
    }

    #[test]
    fn test_booking_wins_over_other_markers() {
        let form = booking_form()
            .with_field(FormField::new(field_names::MESSAGE, "Notes", FieldKind::TextArea));
        assert_eq!(form.kind(), Some(FormKind::Booking));
    }

    #[test]
    fn test_value_of_and_reset() {
        let mut form = FormSubmission::new("booking").with_field(
            FormField::new(field_names::PICKUP, "Pickup Location", FieldKind::Text)
                .with_value("Nairobi"),
        );
        assert_eq!(form.value_of(field_names::PICKUP).unwrap(), "Nairobi");
        assert!(matches!(
            form.value_of(field_names::WEIGHT),
            Err(CoreError::UnknownField(name)) if name == "weight"
        ));

        form.reset();
        assert!(form.field(field_names::PICKUP).unwrap().is_blank());
    }

    #[test]
    fn test_service_type_labels() {
        assert_eq!(ServiceType::from_label("Same-Day"), Some(ServiceType::SameDay));
        assert_eq!(ServiceType::from_label("same-day"), None);
        assert_eq!(ServiceType::Cargo.to_string(), "Cargo Transport");
        assert_eq!(ServiceType::Express.multiplier_bps(), 18_000);
    }

    #[test]
    fn test_submission_deserializes_from_page_json() {
        let json = r#"{
            "formId": "track",
            "fields": [
                { "name": "tracking_number", "label": "Tracking Number", "required": true, "value": "SC25010500" },
                { "name": "phone", "label": "Phone Number", "kind": "tel", "value": "" }
            ]
        }"#;
        let form: FormSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(form.kind(), Some(FormKind::Tracking));
        assert_eq!(form.fields[0].kind, FieldKind::Text);
        assert_eq!(form.fields[1].kind, FieldKind::Tel);
        assert!(!form.fields[1].required);
    }
}

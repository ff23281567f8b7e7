//! # Configuration State
//!
//! Site details loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SWIFTCONNECT_*`)
//! 2. Defaults (this file)
//!
//! The lookup, button and notification delays are fixed and are not part of
//! the configuration.
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use swiftconnect_core::messages::{DEFAULT_COMPANY_NAME, DEFAULT_SUPPORT_LINE};
use swiftconnect_core::submission::Branding;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Company name quoted in the contact confirmation.
    pub company_name: String,

    /// Urgent-matters phone line quoted in the contact confirmation.
    pub support_line: String,

    /// Form id of the booking form (its button carries the live price).
    pub booking_form_id: String,

    /// Booking button label before any price is known.
    pub booking_button_label: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            support_line: DEFAULT_SUPPORT_LINE.to_string(),
            booking_form_id: "booking".to_string(),
            booking_button_label: "Calculate Price & Book".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SWIFTCONNECT_COMPANY_NAME`
    /// - `SWIFTCONNECT_SUPPORT_LINE`
    /// - `SWIFTCONNECT_BOOKING_FORM_ID`
    /// - `SWIFTCONNECT_BOOKING_BUTTON_LABEL`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(name) = non_blank("SWIFTCONNECT_COMPANY_NAME") {
            config.company_name = name;
        }
        if let Some(line) = non_blank("SWIFTCONNECT_SUPPORT_LINE") {
            config.support_line = line;
        }
        if let Some(id) = non_blank("SWIFTCONNECT_BOOKING_FORM_ID") {
            config.booking_form_id = id;
        }
        if let Some(label) = non_blank("SWIFTCONNECT_BOOKING_BUTTON_LABEL") {
            config.booking_button_label = label;
        }

        config
    }

    pub fn branding(&self) -> Branding {
        Branding {
            company_name: self.company_name.clone(),
            support_line: self.support_line.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.company_name, "SwiftConnect Logistics");
        assert_eq!(config.branding(), Branding::default());
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let vars: HashMap<&str, &str> = [
            ("SWIFTCONNECT_COMPANY_NAME", "SwiftConnect Mombasa"),
            ("SWIFTCONNECT_SUPPORT_LINE", "   "),
            ("SWIFTCONNECT_BOOKING_FORM_ID", "quote"),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.company_name, "SwiftConnect Mombasa");
        assert_eq!(config.support_line, "+254 700 SWIFT (794338)");
        assert_eq!(config.booking_form_id, "quote");
        assert_eq!(config.booking_button_label, "Calculate Price & Book");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["bookingFormId"], "booking");
    }
}

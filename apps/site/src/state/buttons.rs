//! # Submit Button State
//!
//! Each form's submit button shows "Processing..." and stays disabled for a
//! fixed two seconds after a click, then gets its label back.
//!
//! ```text
//! idle("Book Now - KES 1,000") ──press──► processing("Processing...", disabled)
//!          ▲                                        │
//!          └────────────── 2s timer ────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use swiftconnect_core::messages::{book_now_label, PROCESSING_LABEL};
use swiftconnect_core::pricing::Kes;
use swiftconnect_core::BUTTON_RESET_DELAY_SECS;
use tracing::debug;

/// Label of a button nobody registered.
const DEFAULT_LABEL: &str = "Submit";

/// What the page renders for one submit button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,

    /// Label to restore once processing ends.
    #[serde(skip)]
    idle_label: String,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        SubmitButton {
            idle_label: label.clone(),
            label,
            disabled: false,
        }
    }

    fn is_price_label(label: &str) -> bool {
        label.contains("Calculate") || label.starts_with("Book Now - ")
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        SubmitButton::new(DEFAULT_LABEL)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ButtonsState {
    buttons: Arc<Mutex<HashMap<String, SubmitButton>>>,
}

impl ButtonsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a button with its initial label.
    pub fn register(&self, form_id: impl Into<String>, label: impl Into<String>) {
        self.with_buttons_mut(|buttons| {
            buttons.insert(form_id.into(), SubmitButton::new(label));
        });
    }

    pub fn get(&self, form_id: &str) -> SubmitButton {
        self.with_buttons_mut(|buttons| buttons.get(form_id).cloned().unwrap_or_default())
    }

    /// Click on a submit button. Returns `false` if it was already
    /// processing. Must be called from within a tokio runtime.
    ///
    /// Only registered buttons hold state; a click on any other form is
    /// always accepted and leaves nothing behind.
    pub fn press(&self, form_id: &str) -> bool {
        let pressed = self.with_buttons_mut(|buttons| match buttons.get_mut(form_id) {
            Some(button) if button.disabled => Some(false),
            Some(button) => {
                button.idle_label = button.label.clone();
                button.label = PROCESSING_LABEL.to_string();
                button.disabled = true;
                Some(true)
            }
            None => None,
        });

        match pressed {
            Some(true) => {
                self.schedule_release(form_id.to_string());
                true
            }
            Some(false) => false,
            None => {
                debug!(form_id = %form_id, "click on unregistered submit button");
                true
            }
        }
    }

    /// Shows a live estimate on a price-bearing button ("Calculate ..." or a
    /// previous "Book Now - ..."). Other buttons keep their text.
    ///
    /// The label follows every change of service or weight, not only the
    /// first estimate. A change made while the button is processing shows
    /// up once it is released.
    pub fn show_price(&self, form_id: &str, price: Kes) -> SubmitButton {
        self.with_buttons_mut(|buttons| {
            let Some(button) = buttons.get_mut(form_id) else {
                return SubmitButton::default();
            };
            let label = book_now_label(price);
            if button.disabled {
                if SubmitButton::is_price_label(&button.idle_label) {
                    button.idle_label = label;
                }
            } else if SubmitButton::is_price_label(&button.label) {
                button.idle_label = label.clone();
                button.label = label;
            }
            button.clone()
        })
    }

    fn schedule_release(&self, form_id: String) {
        let state = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(BUTTON_RESET_DELAY_SECS)).await;
            state.with_buttons_mut(|buttons| {
                if let Some(button) = buttons.get_mut(&form_id) {
                    button.label = button.idle_label.clone();
                    button.disabled = false;
                }
            });
            debug!(form_id = %form_id, "submit button re-enabled");
        });
    }

    fn with_buttons_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<String, SubmitButton>) -> R,
    {
        let mut buttons = self.buttons.lock().expect("Buttons mutex poisoned");
        f(&mut buttons)
    }
}

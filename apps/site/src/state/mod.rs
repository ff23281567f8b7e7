//! # State Module
//!
//! Manages application state for the site host.
//!
//! ## Why Multiple State Types?
//! Instead of one struct everybody locks, each concern has its own state
//! type and each command takes only the ones it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐                    │
//! │  │ Notification │ │ TrackingBoard│ │   Buttons    │                    │
//! │  │ Arc<Mutex<   │ │ Arc<Mutex<   │ │ Arc<Mutex<   │                    │
//! │  │   Slot>>     │ │   HashMap>>  │ │   HashMap>>  │                    │
//! │  └──────────────┘ └──────────────┘ └──────────────┘                    │
//! │  ┌──────────────┐ ┌──────────────┐                                     │
//! │  │   Sources    │ │    Config    │                                     │
//! │  │ clock + rng  │ │  read-only   │                                     │
//! │  └──────────────┘ └──────────────┘                                     │
//! │                                                                         │
//! │  Every state type is a cheap clone around an Arc, so timer tasks can   │
//! │  take their own handle.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod buttons;
mod config;
mod notification;
mod sources;
mod tracking;

pub use buttons::{ButtonsState, SubmitButton};
pub use config::ConfigState;
pub use notification::NotificationState;
pub use sources::SourcesState;
pub use tracking::TrackingBoardState;

/// Registry of every managed state, built once at startup.
#[derive(Debug, Clone)]
pub struct SiteState {
    pub config: ConfigState,
    pub sources: SourcesState,
    pub notifications: NotificationState,
    pub tracking: TrackingBoardState,
    pub buttons: ButtonsState,
}

impl SiteState {
    pub fn new(config: ConfigState, sources: SourcesState) -> Self {
        let buttons = ButtonsState::new();
        buttons.register(config.booking_form_id.clone(), config.booking_button_label.clone());

        SiteState {
            config,
            sources,
            notifications: NotificationState::new(),
            tracking: TrackingBoardState::new(),
            buttons,
        }
    }

    /// Environment configuration, wall clock, thread RNG.
    pub fn from_env() -> Self {
        Self::new(ConfigState::from_env(), SourcesState::default())
    }
}

//! # Site Commands Module
//!
//! All commands the page can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs           ◄─── You are here (exports)
//! ├── form.rs          ◄─── Form submission
//! ├── pricing.rs       ◄─── Live price preview
//! ├── notification.rs  ◄─── Notification slot
//! ├── tracking.rs      ◄─── Tracking result blocks, placeholder text
//! └── config.rs        ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Page script                                                            │
//! │  ───────────                                                            │
//! │  {"command":"submit","form":{"formId":"booking","fields":[...]}}        │
//! │         │                                                               │
//! │         │ (one JSON line on stdin, see console.rs)                      │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn submit_form(                                                        │
//! │      state: &SiteState,       ◄── Built once at startup                │
//! │      form: FormSubmission,    ◄── From the command payload             │
//! │  ) -> Result<SubmitResponse, ApiError>                                  │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Page receives: {"ok":true,"data":{...}}                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the notification slot
//! fn get_notification(notifications: &NotificationState)
//!
//! // Needs buttons and config
//! fn preview_price(buttons: &ButtonsState, config: &ConfigState, form: &FormSubmission)
//!
//! // Touches everything
//! fn submit_form(state: &SiteState, form: FormSubmission)
//! ```
//!
//! Commands that start timers must run inside a tokio runtime.

pub mod config;
pub mod form;
pub mod notification;
pub mod pricing;
pub mod tracking;

//! # JSON Console
//!
//! The line protocol between the page and the host: one JSON command per
//! input line, one JSON response per output line.
//!
//! ```text
//! → {"command":"preview","form":{"formId":"booking","fields":[...]}}
//! ← {"ok":true,"data":{"price":1000,"button":{"label":"Book Now - KES 1,000","disabled":false}}}
//!
//! → {"command":"dismiss","id":41}
//! ← {"ok":false,"error":{"code":"NOT_FOUND","message":"Notification not found: 41"}}
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use swiftconnect_core::notification::NotificationId;
use swiftconnect_core::types::FormSubmission;
use tracing::warn;

use crate::commands;
use crate::error::ApiError;
use crate::state::SiteState;

/// Written if a response cannot be serialized at all.
const FALLBACK_RESPONSE: &str =
    r#"{"ok":false,"error":{"code":"INTERNAL","message":"response could not be encoded"}}"#;

/// One input line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ConsoleCommand {
    Submit { form: FormSubmission },
    Preview { form: FormSubmission },
    Notification,
    Dismiss { id: NotificationId },
    DismissCurrent,
    #[serde(rename_all = "camelCase")]
    Tracking { form_id: String },
    #[serde(rename_all = "camelCase")]
    Button { form_id: String },
    Placeholder,
    Config,
}

/// One output line.
#[derive(Debug, Serialize)]
struct ConsoleResponse {
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ApiError>,
}

/// Parses and runs one line, returning the response line (no newline).
///
/// Must be called from within a tokio runtime.
pub fn handle_line(state: &SiteState, line: &str) -> String {
    let response = match dispatch(state, line) {
        Ok(data) => ConsoleResponse {
            ok: true,
            data: Some(data),
            error: None,
        },
        Err(error) => {
            warn!(code = ?error.code, message = %error.message, "command failed");
            ConsoleResponse {
                ok: false,
                data: None,
                error: Some(error),
            }
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|_| FALLBACK_RESPONSE.to_string())
}

fn dispatch(state: &SiteState, line: &str) -> Result<Value, ApiError> {
    let command: ConsoleCommand = serde_json::from_str(line)?;

    match command {
        ConsoleCommand::Submit { form } => to_data(commands::form::submit_form(state, form)?),
        ConsoleCommand::Preview { form } => to_data(commands::pricing::preview_price(
            &state.buttons,
            &state.config,
            &form,
        )),
        ConsoleCommand::Notification => {
            to_data(commands::notification::get_notification(&state.notifications))
        }
        ConsoleCommand::Dismiss { id } => to_data(commands::notification::dismiss_notification(
            &state.notifications,
            id,
        )?),
        ConsoleCommand::DismissCurrent => to_data(
            commands::notification::dismiss_current_notification(&state.notifications),
        ),
        ConsoleCommand::Tracking { form_id } => to_data(
            commands::tracking::get_tracking_result(&state.tracking, &form_id),
        ),
        ConsoleCommand::Button { form_id } => {
            to_data(commands::tracking::get_button_state(&state.buttons, &form_id))
        }
        ConsoleCommand::Placeholder => {
            to_data(commands::tracking::suggest_tracking_placeholder(&state.sources))
        }
        ConsoleCommand::Config => to_data(commands::config::get_config(&state.config)),
    }
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::internal(e.to_string()))
}

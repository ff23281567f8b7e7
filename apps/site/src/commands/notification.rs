//! # Notification Commands
//!
//! Reading and dismissing the page-wide notification.

use serde::Serialize;
use swiftconnect_core::notification::{Notification, NotificationId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::NotificationState;

/// A notification plus the styling the page applies to it.
///
/// ```json
/// { "id": 3, "message": "Message Sent Successfully!", "severity": "success",
///   "shownAt": "...", "colourToken": "--success-green",
///   "cssClass": "notification notification-success" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    #[serde(flatten)]
    pub notification: Notification,
    pub colour_token: &'static str,
    pub css_class: &'static str,
}

impl From<Notification> for NotificationView {
    fn from(notification: Notification) -> Self {
        NotificationView {
            colour_token: notification.severity.colour_token(),
            css_class: notification.severity.css_class(),
            notification,
        }
    }
}

/// The notification currently on screen, if any.
pub fn get_notification(notifications: &NotificationState) -> Option<NotificationView> {
    debug!("get_notification command");
    notifications.current().map(NotificationView::from)
}

/// Closes the notification the visitor clicked.
///
/// ## Errors
/// `NotFound` when that notification is no longer on screen (replaced,
/// expired or already dismissed).
pub fn dismiss_notification(
    notifications: &NotificationState,
    id: NotificationId,
) -> Result<(), ApiError> {
    debug!(id = id.value(), "dismiss_notification command");

    if notifications.dismiss(id) {
        Ok(())
    } else {
        Err(ApiError::not_found("Notification", &id.value().to_string()))
    }
}

/// Escape key: closes whatever is showing. Nothing showing is fine.
pub fn dismiss_current_notification(notifications: &NotificationState) -> Option<NotificationView> {
    debug!("dismiss_current_notification command");
    notifications.dismiss_current().map(NotificationView::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use chrono::Utc;
    use swiftconnect_core::notification::{Notice, Severity};

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_by_id() {
        let notifications = NotificationState::new();
        let shown = notifications.notify(Notice::new("Message Sent", Severity::Success), Utc::now());

        assert_eq!(
            get_notification(&notifications).map(|view| view.notification),
            Some(shown.clone())
        );
        assert!(dismiss_notification(&notifications, shown.id).is_ok());
        assert!(get_notification(&notifications).is_none());

        let err = dismiss_notification(&notifications, shown.id).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_with_nothing_showing() {
        let notifications = NotificationState::new();
        assert!(dismiss_current_notification(&notifications).is_none());

        notifications.notify(Notice::new("Heads up", Severity::Warning), Utc::now());
        assert_eq!(
            dismiss_current_notification(&notifications).unwrap().notification.severity,
            Severity::Warning
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_carries_severity_style() {
        let notifications = NotificationState::new();
        notifications.notify(Notice::new("Please correct", Severity::Error), Utc::now());

        let view = get_notification(&notifications).unwrap();
        assert_eq!(view.colour_token, "--kenya-red");
        assert_eq!(view.css_class, "notification notification-error");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["colourToken"], "--kenya-red");
        assert_eq!(json["message"], "Please correct");
    }
}

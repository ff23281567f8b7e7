//! # Notification Module
//!
//! The single on-screen notification, as a state holder independent of any
//! rendering technology.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            show()                      dismiss(id) / dismiss_current() │
//! │  ┌────────┐ ─────► ┌──────────────┐ ──────────────────────► ┌────────┐ │
//! │  │ absent │        │ shown (id N) │                          │ absent │ │
//! │  └────────┘ ◄───── └──────────────┘ ──────────────────────► └────────┘ │
//! │                       │      ▲        expire(id, now ≥ shown + 6s)     │
//! │                       │      │                                          │
//! │                       └──────┘                                          │
//! │                  show() again: N replaced by N+1 immediately            │
//! │                  (no queue; stale ids no longer match anything)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Ids?
//! Expiry timers and click handlers hold the id of the notification they
//! were created for. When a newer notification has replaced it, the old id
//! matches nothing and the call is a no-op, so a late timer can never take
//! down its successor.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::NOTIFICATION_TTL_SECS;

// =============================================================================
// Severity
// =============================================================================

/// How a notification is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl Severity {
    /// Stylesheet colour variable for the notification background.
    pub const fn colour_token(&self) -> &'static str {
        match self {
            Severity::Success => "--success-green",
            Severity::Error => "--kenya-red",
            Severity::Info => "--kenya-green",
            Severity::Warning => "--warning-orange",
        }
    }

    /// CSS class the page puts on the element.
    pub const fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "notification notification-success",
            Severity::Error => "notification notification-error",
            Severity::Info => "notification notification-info",
            Severity::Warning => "notification notification-warning",
        }
    }
}

// =============================================================================
// Notice
// =============================================================================

/// A request to show something: what the pipeline hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Notice {
            message: message.into(),
            severity,
        }
    }
}

// =============================================================================
// Notification
// =============================================================================

/// Identity of one shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub const fn value(&self) -> u64 {
        self.0
    }
}

/// A notification currently on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    #[ts(as = "String")]
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    /// When this notification goes away on its own.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + Duration::seconds(NOTIFICATION_TTL_SECS as i64)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

// =============================================================================
// Notification Slot
// =============================================================================

/// Holds at most one notification.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use swiftconnect_core::notification::{NotificationSlot, Severity};
///
/// let mut slot = NotificationSlot::new();
/// let now = Utc::now();
///
/// let first = slot.show("Looking up tracking information...", Severity::Info, now);
/// let second = slot.show("Message Sent Successfully!", Severity::Success, now);
///
/// assert_eq!(slot.current().unwrap().id, second);
/// assert!(!slot.dismiss(first)); // already gone
/// assert!(slot.dismiss(second));
/// assert!(slot.current().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing whatever was visible.
    pub fn show(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);

        self.current = Some(Notification {
            id,
            message: message.into(),
            severity,
            shown_at: now,
        });
        id
    }

    /// Shows a [`Notice`] produced by the pipeline and returns a copy of
    /// what is now on screen.
    pub fn show_notice(&mut self, notice: Notice, now: DateTime<Utc>) -> Notification {
        let id = self.show(notice.message.clone(), notice.severity, now);
        Notification {
            id,
            message: notice.message,
            severity: notice.severity,
            shown_at: now,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    /// Removes the notification if it is still the one showing (a click on it).
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Removes whatever is showing (the Escape key).
    pub fn dismiss_current(&mut self) -> Option<Notification> {
        self.current.take()
    }

    /// Expiry timer callback: removes `id` once its time is up, provided it
    /// has not been replaced or dismissed in the meantime.
    pub fn expire(&mut self, id: NotificationId, now: DateTime<Utc>) -> bool {
        match &self.current {
            Some(n) if n.id == id && n.is_expired(now) => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Notification State
//!
//! The page-wide notification slot plus the timers around it.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  notify(notice) ──► slot.show() ──► spawn: sleep 6s ──► slot.expire(id)│
//! │                          │                                     │        │
//! │                          │ a newer notify() replaces it        │        │
//! │                          ▼                                     ▼        │
//! │                  old timer fires later, id no longer current: no-op    │
//! │                                                                         │
//! │  click on it ──────► dismiss(id)                                       │
//! │  Escape key  ──────► dismiss_current()                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The slot sits behind `Arc<Mutex<_>>`; the expiry task holds a clone of
//! the `Arc`. Locks are never held across an `.await`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use swiftconnect_core::notification::{Notice, Notification, NotificationId, NotificationSlot};
use swiftconnect_core::NOTIFICATION_TTL_SECS;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct NotificationState {
    slot: Arc<Mutex<NotificationSlot>>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the slot.
    pub fn with_slot<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&NotificationSlot) -> R,
    {
        let slot = self.slot.lock().expect("Notification mutex poisoned");
        f(&slot)
    }

    /// Executes a function with write access to the slot.
    pub fn with_slot_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut NotificationSlot) -> R,
    {
        let mut slot = self.slot.lock().expect("Notification mutex poisoned");
        f(&mut slot)
    }

    /// Shows `notice` and schedules its expiry.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, notice: Notice, now: DateTime<Utc>) -> Notification {
        let shown = self.with_slot_mut(|slot| slot.show_notice(notice, now));
        self.schedule_expiry(shown.id, shown.expires_at());
        shown
    }

    pub fn current(&self) -> Option<Notification> {
        self.with_slot(|slot| slot.current().cloned())
    }

    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.with_slot_mut(|slot| slot.dismiss(id))
    }

    pub fn dismiss_current(&self) -> Option<Notification> {
        self.with_slot_mut(|slot| slot.dismiss_current())
    }

    fn schedule_expiry(&self, id: NotificationId, expires_at: DateTime<Utc>) {
        let state = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(NOTIFICATION_TTL_SECS)).await;
            // The timer itself is the authority on elapsed time.
            if state.with_slot_mut(|slot| slot.expire(id, expires_at)) {
                debug!(id = id.value(), "notification expired");
            }
        });
    }
}

//! Notification centre state
//!
//! Notifications are kept newest first. `unread_count` is recomputed from
//! the list after every transition, so it always equals the number of unread
//! entries and can never go below zero.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Notification, NotificationId};

/// Immutable snapshot of the notification centre
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationState {
    notifications: Vec<Notification>,
    unread_count: usize,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from a list already ordered newest first
    pub fn from_notifications(notifications: Vec<Notification>) -> Self {
        let unread_count = notifications.iter().filter(|n| !n.is_read).count();
        Self {
            notifications,
            unread_count,
        }
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id == id)
    }

    /// Resolve a user-typed reference (short or full id)
    pub fn find(&self, reference: &str) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id.matches(reference))
    }

    /// Prepend a notification
    pub fn add(&self, notification: Notification) -> Self {
        let mut list = Vec::with_capacity(self.notifications.len() + 1);
        list.push(notification);
        list.extend(self.notifications.iter().cloned());
        Self::from_notifications(list)
    }

    /// Mark one notification read; unknown ids are a no-op
    pub fn mark_as_read(&self, id: NotificationId) -> Self {
        let list = self
            .notifications
            .iter()
            .cloned()
            .map(|mut n| {
                if n.id == id {
                    n.is_read = true;
                }
                n
            })
            .collect();
        Self::from_notifications(list)
    }

    pub fn mark_all_as_read(&self) -> Self {
        let list = self
            .notifications
            .iter()
            .cloned()
            .map(|mut n| {
                n.is_read = true;
                n
            })
            .collect();
        Self::from_notifications(list)
    }

    /// Remove one notification; unknown ids are a no-op
    pub fn remove(&self, id: NotificationId) -> Self {
        let list = self
            .notifications
            .iter()
            .filter(|n| n.id != id)
            .cloned()
            .collect();
        Self::from_notifications(list)
    }

    pub fn clear_all(&self) -> Self {
        Self::new()
    }

    /// Keep only notifications no older than `retention` at `now`
    pub fn retain_recent(&self, now: DateTime<Utc>, retention: Duration) -> Self {
        let list = self
            .notifications
            .iter()
            .filter(|n| !n.is_expired(now, retention))
            .cloned()
            .collect();
        Self::from_notifications(list)
    }
}

/// Transitions accepted by [`NotificationStore`]
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    Add(Notification),
    MarkAsRead(NotificationId),
    MarkAllAsRead,
    Remove(NotificationId),
    ClearAll,
}

/// Owner of the current notification snapshot
#[derive(Debug, Default)]
pub struct NotificationStore {
    state: NotificationState,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a previously persisted snapshot
    pub fn with_state(state: NotificationState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &NotificationState {
        &self.state
    }

    /// Apply an action and return the new snapshot
    pub fn dispatch(&mut self, action: NotificationAction) -> &NotificationState {
        self.state = match action {
            NotificationAction::Add(notification) => {
                tracing::debug!(id = %notification.id, kind = %notification.kind, "notification added");
                self.state.add(notification)
            }
            NotificationAction::MarkAsRead(id) => {
                tracing::debug!(%id, "notification marked read");
                self.state.mark_as_read(id)
            }
            NotificationAction::MarkAllAsRead => self.state.mark_all_as_read(),
            NotificationAction::Remove(id) => {
                tracing::debug!(%id, "notification removed");
                self.state.remove(id)
            }
            NotificationAction::ClearAll => self.state.clear_all(),
        };
        &self.state
    }

    /// Add a notification and return its id
    pub fn notify(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id;
        self.dispatch(NotificationAction::Add(notification));
        id
    }
}

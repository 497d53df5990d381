//! Notification centre persistence
//!
//! The file holds `{ "notifications": [...] }` with RFC 3339 timestamps.
//! Expired entries are dropped when writing only; a loaded snapshot may
//! still contain entries that expired since the last save.

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::models::Notification;
use crate::stores::NotificationState;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PersistedNotifications {
    #[serde(default)]
    notifications: Vec<Notification>,
}

pub struct NotificationRepository {
    path: PathBuf,
    retention: Duration,
}

impl NotificationRepository {
    pub fn new(path: PathBuf, retention: Duration) -> Self {
        Self { path, retention }
    }

    /// Load the persisted snapshot; the unread count is recomputed
    pub fn load(&self) -> Result<NotificationState, FolioError> {
        let data: PersistedNotifications = read_json(&self.path)?;
        Ok(NotificationState::from_notifications(data.notifications))
    }

    /// Persist `state`, dropping entries older than the retention window at `now`
    pub fn save(&self, state: &NotificationState, now: DateTime<Utc>) -> Result<(), FolioError> {
        let kept = state.retain_recent(now, self.retention);
        let dropped = state.len() - kept.len();
        if dropped > 0 {
            tracing::info!(dropped, "pruned expired notifications");
        }

        let data = PersistedNotifications {
            notifications: kept.notifications().to_vec(),
        };
        write_json_atomic(&self.path, &data)
    }
}

//! Notification service
//!
//! Loads the persisted notification centre into a store, applies one action
//! and writes the result back. Saving prunes expired entries.

use chrono::{DateTime, Utc};

use crate::error::{FolioError, FolioResult};
use crate::models::Notification;
use crate::storage::Storage;
use crate::stores::{NotificationAction, NotificationState, NotificationStore};

/// Service for the persisted notification centre
pub struct NotificationService<'a> {
    storage: &'a Storage,
}

impl<'a> NotificationService<'a> {
    /// Create a new notification service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the persisted snapshot into a store
    pub fn open(&self) -> FolioResult<NotificationStore> {
        Ok(NotificationStore::with_state(
            self.storage.notifications.load()?,
        ))
    }

    /// Persist the store's snapshot as of `now`
    pub fn commit(&self, store: &NotificationStore, now: DateTime<Utc>) -> FolioResult<()> {
        self.storage.notifications.save(store.state(), now)
    }

    /// Current snapshot, newest first
    pub fn list(&self) -> FolioResult<NotificationState> {
        self.storage.notifications.load()
    }

    /// Add a notification and persist
    pub fn add(&self, notification: Notification) -> FolioResult<Notification> {
        let mut store = self.open()?;
        store.notify(notification.clone());
        self.commit(&store, Utc::now())?;
        Ok(notification)
    }

    /// Mark the notification matching `reference` as read
    pub fn mark_read(&self, reference: &str) -> FolioResult<Notification> {
        let mut store = self.open()?;
        let id = store
            .state()
            .find(reference)
            .map(|n| n.id)
            .ok_or_else(|| FolioError::notification_not_found(reference))?;

        store.dispatch(NotificationAction::MarkAsRead(id));
        let updated = store
            .state()
            .get(id)
            .cloned()
            .ok_or_else(|| FolioError::notification_not_found(reference))?;
        self.commit(&store, Utc::now())?;
        Ok(updated)
    }

    /// Mark everything read, returning how many were unread
    pub fn mark_all_read(&self) -> FolioResult<usize> {
        let mut store = self.open()?;
        let unread = store.state().unread_count();
        store.dispatch(NotificationAction::MarkAllAsRead);
        self.commit(&store, Utc::now())?;
        Ok(unread)
    }

    /// Remove the notification matching `reference`
    pub fn remove(&self, reference: &str) -> FolioResult<Notification> {
        let mut store = self.open()?;
        let removed = store
            .state()
            .find(reference)
            .cloned()
            .ok_or_else(|| FolioError::notification_not_found(reference))?;

        store.dispatch(NotificationAction::Remove(removed.id));
        self.commit(&store, Utc::now())?;
        Ok(removed)
    }

    /// Remove every notification, returning how many were removed
    pub fn clear(&self) -> FolioResult<usize> {
        let mut store = self.open()?;
        let count = store.state().len();
        store.dispatch(NotificationAction::ClearAll);
        self.commit(&store, Utc::now())?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FolioPaths, Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_list_newest_first() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage);

        service.add(Notification::info("first", "a")).unwrap();
        let second = service.add(Notification::warning("second", "b")).unwrap();

        let state = service.list().unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.notifications()[0].id, second.id);
        assert_eq!(state.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_by_short_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage);
        let n = service.add(Notification::info("hello", "world")).unwrap();

        let updated = service.mark_read(&n.id.short()).unwrap();
        assert!(updated.is_read);
        assert_eq!(service.list().unwrap().unread_count(), 0);
    }

    #[test]
    fn test_unknown_reference_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage);
        service.add(Notification::info("hello", "world")).unwrap();

        assert!(service.mark_read("zzzz").unwrap_err().is_not_found());
        assert!(service.remove("zzzz").unwrap_err().is_not_found());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_mark_all_remove_and_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = NotificationService::new(&storage);
        let a = service.add(Notification::info("a", "m")).unwrap();
        service.add(Notification::error("b", "m")).unwrap();
        service.add(Notification::success("c", "m")).unwrap();

        assert_eq!(service.mark_all_read().unwrap(), 3);
        assert_eq!(service.mark_all_read().unwrap(), 0);

        service.remove(&a.id.to_string()).unwrap();
        assert_eq!(service.list().unwrap().len(), 2);

        assert_eq!(service.clear().unwrap(), 2);
        assert!(service.list().unwrap().is_empty());
    }
}

//! Storage layer for Folio
//!
//! JSON files written atomically under the data directory.

pub mod expenses;
pub mod file_io;
pub mod notifications;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use notifications::NotificationRepository;

use crate::config::paths::FolioPaths;
use crate::config::settings::Settings;
use crate::error::FolioError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FolioPaths,
    pub expenses: ExpenseRepository,
    pub notifications: NotificationRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FolioPaths, settings: &Settings) -> Result<Self, FolioError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            notifications: NotificationRepository::new(
                paths.notifications_file(),
                settings.notification_retention(),
            ),
            paths,
        })
    }

    pub fn paths(&self) -> &FolioPaths {
        &self.paths
    }
}

//! User settings for Folio
//!
//! Every field has a serde default so older or hand-edited config files keep
//! loading as new settings are added.

use serde::{Deserialize, Serialize};

use super::paths::FolioPaths;
use crate::api::RetryPolicy;
use crate::error::FolioError;
use crate::models::TaxSchedule;

/// User settings for Folio
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in reports
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Income tax schedule used for take-home estimates
    #[serde(default)]
    pub tax_schedule: TaxSchedule,

    /// Days a notification is kept when the notification centre is saved
    #[serde(default = "default_notification_retention_days")]
    pub notification_retention_days: u32,

    /// Retry behaviour for backend API calls
    #[serde(default)]
    pub retry: RetryPolicy,

    /// Default tracing filter when `FOLIO_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_notification_retention_days() -> u32 {
    7
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            tax_schedule: TaxSchedule::default(),
            notification_retention_days: default_notification_retention_days(),
            retry: RetryPolicy::default(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Notification retention as a chrono duration
    pub fn notification_retention(&self) -> chrono::Duration {
        chrono::Duration::days(i64::from(self.notification_retention_days))
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), FolioError> {
        self.tax_schedule.validate().map_err(FolioError::Config)?;
        if self.notification_retention_days == 0 {
            return Err(FolioError::Config(
                "notification_retention_days must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &FolioPaths) -> Result<Self, FolioError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FolioError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FolioError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FolioPaths) -> Result<(), FolioError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FolioError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FolioError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

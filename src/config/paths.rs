//! Path management for Folio
//!
//! ## Path Resolution Order
//!
//! 1. `FOLIO_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/folio` on Linux, `~/Library/Application Support/folio` on
//!    macOS, `%APPDATA%\folio` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FolioError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FOLIO_CLI_DATA_DIR";

/// Manages all paths used by Folio
#[derive(Debug, Clone)]
pub struct FolioPaths {
    base_dir: PathBuf,
}

impl FolioPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FolioError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create FolioPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding persisted state
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Persisted expense list
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Persisted notification centre
    pub fn notifications_file(&self) -> PathBuf {
        self.data_dir().join("notification-storage.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FolioError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FolioError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FolioError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if Folio has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, FolioError> {
    ProjectDirs::from("", "", "folio")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| FolioError::Config("Could not determine a home directory".into()))
}

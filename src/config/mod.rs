//! Configuration module for Folio
//!
//! - platform path resolution with an environment override
//! - user settings persistence, including the tax schedule

pub mod paths;
pub mod settings;

pub use paths::FolioPaths;
pub use settings::Settings;

//! Folio - personal finance dashboard core
//!
//! This library provides the calculation and state layer behind the Folio
//! dashboard: expense lists with frequency normalisation and category
//! inference, CSV import, take-home pay and investment projections, the
//! notification centre and ETF drill-down navigation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, income, tax schedules, notifications)
//! - `stores`: In-memory state containers with pure transitions
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer (budget, import, projections)
//! - `api`: Backend failure classification and retry policy
//! - `display`, `export`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_cli::config::{paths::FolioPaths, settings::Settings};
//!
//! let paths = FolioPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod stores;

pub use error::{FolioError, FolioResult};

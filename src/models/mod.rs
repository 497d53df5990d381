//! Core data models for Folio
//!
//! Plain data with validation: expenses, income, tax schedules,
//! notifications and ETF navigation entities.

pub mod category;
pub mod etf;
pub mod expense;
pub mod frequency;
pub mod ids;
pub mod income;
pub mod money;
pub mod notification;
pub mod tax;

pub use category::ExpenseCategory;
pub use etf::{Breadcrumb, CrumbKind, Holding};
pub use expense::{annual_total, annual_totals_by_category, ExpenseItem, ExpenseValidationError};
pub use frequency::{annualise, Frequency};
pub use ids::{ExpenseId, NotificationId};
pub use income::{IncomeParameters, IncomeValidationError};
pub use money::Money;
pub use notification::{Notification, NotificationKind};
pub use tax::{TaxBracket, TaxSchedule};

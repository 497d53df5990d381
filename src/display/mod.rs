//! Display formatting for terminal output
//!
//! Plain-text tables and summaries for expenses, income, projections and
//! notifications.

pub mod expense;
pub mod income;
pub mod notification;
pub mod projection;
pub mod report;

pub use expense::{format_budget_summary, format_expense_list};
pub use income::format_income_summary;
pub use notification::format_notification_list;
pub use projection::format_projection;
pub use report::{format_agreement_rate, format_currency, format_percentage, format_whole};

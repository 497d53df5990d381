//! Service layer for Folio
//!
//! Business logic on top of the storage layer: expense management, CSV
//! import, projections and the notification centre.

pub mod budget;
pub mod import;
pub mod notification;
pub mod projection;

pub use budget::{summarise, BudgetService, BudgetSummary, CategoryShare, ExpenseUpdate};
pub use import::{import_expenses, import_expenses_with_report, ColumnMapping, ImportReport, TEMPLATE_CSV};
pub use notification::NotificationService;
pub use projection::{
    future_value, investment_projection, opportunity_cost, IncomeSummary, InvestmentParameters,
    OpportunityCostParameters, Projection, ProjectionPoint, CHECKPOINT_YEARS,
};

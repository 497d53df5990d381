//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod budget;
pub mod notify;
pub mod projection;
pub mod tax;

pub use budget::{handle_budget_command, BudgetCommands};
pub use notify::{handle_notify_command, NotifyCommands};
pub use projection::{handle_opportunity_command, handle_project_command, OpportunityArgs, ProjectArgs};
pub use tax::{handle_tax_command, TaxArgs};

use clap::Args;

use crate::error::{FolioError, FolioResult};
use crate::models::{Frequency, IncomeParameters, Money};

/// Parse a user-entered amount such as "2000", "$1,250.50" or "16.99"
pub fn parse_money(input: &str) -> FolioResult<Money> {
    Money::parse(input).map_err(|e| FolioError::Validation(format!("Invalid amount: {}", e)))
}

/// Optional income flags shared by commands that compare against income
#[derive(Args, Default)]
pub struct IncomeArgs {
    /// Gross salary per pay period
    #[arg(long)]
    pub salary: Option<String>,
    /// Pay frequency
    #[arg(long, default_value = "yearly")]
    pub pay_frequency: Frequency,
    /// Other taxable income per period
    #[arg(long)]
    pub other: Option<String>,
    /// Frequency of the other income
    #[arg(long, default_value = "yearly")]
    pub other_frequency: Frequency,
}

impl IncomeArgs {
    /// Income parameters, or `None` when no income was given
    pub fn to_parameters(&self) -> FolioResult<Option<IncomeParameters>> {
        if self.salary.is_none() && self.other.is_none() {
            return Ok(None);
        }
        let salary = self.salary.as_deref().map(parse_money).transpose()?.unwrap_or_default();
        let mut income = IncomeParameters::salary(salary, self.pay_frequency);
        if let Some(other) = &self.other {
            income = income.with_other_income(parse_money(other)?, self.other_frequency);
        }
        Ok(Some(income))
    }
}

//! Take-home pay command

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_income_summary;
use crate::error::FolioResult;
use crate::models::{Frequency, IncomeParameters};
use crate::services::projection::IncomeSummary;

use super::parse_money;

/// Arguments for `folio tax`
#[derive(Args)]
pub struct TaxArgs {
    /// Gross salary per pay period
    pub salary: String,
    /// Pay frequency
    #[arg(short, long, default_value = "yearly")]
    pub frequency: Frequency,
    /// Other taxable income per period
    #[arg(long)]
    pub other: Option<String>,
    /// Frequency of the other income
    #[arg(long, default_value = "yearly")]
    pub other_frequency: Frequency,
}

impl TaxArgs {
    pub fn to_parameters(&self) -> FolioResult<IncomeParameters> {
        let mut income = IncomeParameters::salary(parse_money(&self.salary)?, self.frequency);
        if let Some(other) = &self.other {
            income = income.with_other_income(parse_money(other)?, self.other_frequency);
        }
        Ok(income)
    }
}

/// Handle `folio tax`
pub fn handle_tax_command(settings: &Settings, args: TaxArgs) -> FolioResult<()> {
    let income = args.to_parameters()?;
    let summary = IncomeSummary::compute(&income, &settings.tax_schedule)?;

    println!("Tax schedule: {}", settings.tax_schedule.name);
    println!();
    print!(
        "{}",
        format_income_summary(&summary, &settings.currency_symbol)
    );
    Ok(())
}

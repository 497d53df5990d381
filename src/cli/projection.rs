//! Investment and opportunity cost commands

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_projection;
use crate::error::FolioResult;
use crate::models::Frequency;
use crate::services::projection::{
    investment_projection, opportunity_cost, InvestmentParameters, OpportunityCostParameters,
};

use super::parse_money;

/// Arguments for `folio project`
#[derive(Args)]
pub struct ProjectArgs {
    /// Monthly surplus available to invest
    pub monthly_surplus: String,
    /// Percentage of the surplus to invest (0-100)
    #[arg(short, long, default_value_t = 50.0)]
    pub allocation: f64,
    /// Expected annual return in percent (0-30)
    #[arg(short = 'r', long = "return", default_value_t = 7.0)]
    pub annual_return: f64,
    /// Time horizon in years (1-50)
    #[arg(short, long, default_value_t = 10)]
    pub years: u32,
}

/// Arguments for `folio opportunity`
#[derive(Args)]
pub struct OpportunityArgs {
    /// Amount spent per occurrence
    pub amount: String,
    /// How often the amount is spent
    #[arg(short, long, default_value = "monthly")]
    pub frequency: Frequency,
    /// Expected annual return in percent (0-30)
    #[arg(short = 'r', long = "return", default_value_t = 7.0)]
    pub annual_return: f64,
    /// Time horizon in years (1-50)
    #[arg(short, long, default_value_t = 10)]
    pub years: u32,
}

/// Handle `folio project`
pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> FolioResult<()> {
    let params = InvestmentParameters {
        monthly_surplus: parse_money(&args.monthly_surplus)?,
        allocation_pct: args.allocation,
        annual_return_pct: args.annual_return,
        years: args.years,
    };
    let projection = investment_projection(&params)?;

    let title = format!(
        "Investing {}% of surplus at {}% p.a.",
        params.allocation_pct, params.annual_return_pct
    );
    print!(
        "{}",
        format_projection(&title, &projection, &settings.currency_symbol)
    );
    Ok(())
}

/// Handle `folio opportunity`
pub fn handle_opportunity_command(settings: &Settings, args: OpportunityArgs) -> FolioResult<()> {
    let params = OpportunityCostParameters {
        amount: parse_money(&args.amount)?,
        frequency: args.frequency,
        annual_return_pct: args.annual_return,
        years: args.years,
    };
    let projection = opportunity_cost(&params)?;

    let title = format!(
        "Opportunity cost of {} {} invested at {}% p.a.",
        params.amount.format_with_symbol(&settings.currency_symbol),
        params.frequency,
        params.annual_return_pct
    );
    print!(
        "{}",
        format_projection(&title, &projection, &settings.currency_symbol)
    );
    Ok(())
}

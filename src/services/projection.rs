//! Financial projections
//!
//! Pure calculations over user-entered parameters: take-home pay from a tax
//! schedule, compound growth of regular contributions, and the opportunity
//! cost of spending instead of investing.

use serde::Serialize;

use crate::error::{FolioError, FolioResult};
use crate::models::{Frequency, IncomeParameters, Money, TaxSchedule};

/// Horizons shown in comparison tables
pub const CHECKPOINT_YEARS: [u32; 6] = [5, 10, 15, 20, 25, 30];

pub const MAX_ANNUAL_RETURN_PCT: f64 = 30.0;
pub const MAX_HORIZON_YEARS: u32 = 50;

/// Annual take-home breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeSummary {
    pub annual_gross: Money,
    pub income_tax: Money,
    pub medicare_levy: Money,
    /// Paid by the employer on top of salary; not deducted from take-home
    pub super_contribution: Money,
    pub net_annual: Money,
    pub marginal_rate_bps: u32,
}

impl IncomeSummary {
    pub fn compute(income: &IncomeParameters, schedule: &TaxSchedule) -> FolioResult<Self> {
        income
            .validate()
            .map_err(|e| FolioError::Validation(e.to_string()))?;

        let annual_gross = income.annual_gross();
        let income_tax = schedule.income_tax(annual_gross);
        let medicare_levy = schedule.medicare_levy(annual_gross);
        let super_contribution = schedule.super_contribution(annual_gross);

        Ok(Self {
            annual_gross,
            income_tax,
            medicare_levy,
            super_contribution,
            net_annual: annual_gross - income_tax - medicare_levy,
            marginal_rate_bps: schedule.marginal_rate_bps(annual_gross),
        })
    }

    /// Take-home pay per period of `frequency`
    pub fn net_per(&self, frequency: Frequency) -> Money {
        frequency.from_annual(self.net_annual)
    }

    /// Tax plus levy as a percentage of gross
    pub fn effective_rate_pct(&self) -> f64 {
        if !self.annual_gross.is_positive() {
            return 0.0;
        }
        (self.income_tax + self.medicare_levy).as_f64() / self.annual_gross.as_f64() * 100.0
    }
}

/// Future value of `periods` equal contributions made at the end of each
/// period, compounding at `rate_per_period`
///
/// `FV = c × ((1 + r)^n − 1) / r`, and `c × n` when `r` is zero.
pub fn future_value(contribution: f64, rate_per_period: f64, periods: u32) -> f64 {
    if rate_per_period == 0.0 {
        return contribution * f64::from(periods);
    }
    contribution * ((1.0 + rate_per_period).powi(periods as i32) - 1.0) / rate_per_period
}

/// One row of a projection table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    pub years: u32,
    pub contributed: Money,
    pub future_value: Money,
    pub growth: Money,
}

fn to_money(value: f64) -> FolioResult<Money> {
    Money::from_f64(value).ok_or_else(|| {
        FolioError::Validation(format!(
            "Projected value {:.0} is beyond the supported range",
            value
        ))
    })
}

impl ProjectionPoint {
    fn at(monthly_contribution: f64, annual_return_pct: f64, years: u32) -> FolioResult<Self> {
        let months = years * 12;
        let monthly_rate = annual_return_pct / 100.0 / 12.0;
        let contributed = to_money(monthly_contribution * f64::from(months))?;
        let future_value = to_money(future_value(monthly_contribution, monthly_rate, months))?;
        Ok(Self {
            years,
            contributed,
            future_value,
            growth: future_value - contributed,
        })
    }
}

/// Projection at the chosen horizon plus the fixed checkpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub monthly_contribution: Money,
    pub horizon: ProjectionPoint,
    pub checkpoints: Vec<ProjectionPoint>,
}

impl Projection {
    fn build(monthly_contribution: f64, annual_return_pct: f64, years: u32) -> FolioResult<Self> {
        Ok(Self {
            monthly_contribution: to_money(monthly_contribution)?,
            horizon: ProjectionPoint::at(monthly_contribution, annual_return_pct, years)?,
            checkpoints: CHECKPOINT_YEARS
                .iter()
                .map(|&y| ProjectionPoint::at(monthly_contribution, annual_return_pct, y))
                .collect::<FolioResult<Vec<_>>>()?,
        })
    }
}

fn validate_return(annual_return_pct: f64) -> FolioResult<()> {
    if !(0.0..=MAX_ANNUAL_RETURN_PCT).contains(&annual_return_pct) {
        return Err(FolioError::Validation(format!(
            "Expected return must be between 0% and {}%, got {}%",
            MAX_ANNUAL_RETURN_PCT, annual_return_pct
        )));
    }
    Ok(())
}

fn validate_years(years: u32) -> FolioResult<()> {
    if years == 0 || years > MAX_HORIZON_YEARS {
        return Err(FolioError::Validation(format!(
            "Time horizon must be between 1 and {} years, got {}",
            MAX_HORIZON_YEARS, years
        )));
    }
    Ok(())
}

/// Investing part of the monthly surplus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentParameters {
    pub monthly_surplus: Money,
    /// Share of the surplus invested, 0-100
    pub allocation_pct: f64,
    pub annual_return_pct: f64,
    pub years: u32,
}

impl InvestmentParameters {
    pub fn validate(&self) -> FolioResult<()> {
        if !(0.0..=100.0).contains(&self.allocation_pct) {
            return Err(FolioError::Validation(format!(
                "Allocation must be between 0% and 100%, got {}%",
                self.allocation_pct
            )));
        }
        validate_return(self.annual_return_pct)?;
        validate_years(self.years)
    }
}

/// Grow the allocated share of a monthly surplus
///
/// A negative surplus leaves nothing to invest.
pub fn investment_projection(params: &InvestmentParameters) -> FolioResult<Projection> {
    params.validate()?;
    let surplus = params.monthly_surplus.as_f64().max(0.0);
    let monthly = surplus * params.allocation_pct / 100.0;
    Projection::build(monthly, params.annual_return_pct, params.years)
}

/// A recurring expense considered as a missed investment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpportunityCostParameters {
    pub amount: Money,
    pub frequency: Frequency,
    pub annual_return_pct: f64,
    pub years: u32,
}

impl OpportunityCostParameters {
    pub fn validate(&self) -> FolioResult<()> {
        if self.amount.is_negative() {
            return Err(FolioError::Validation("Amount cannot be negative".into()));
        }
        validate_return(self.annual_return_pct)?;
        validate_years(self.years)
    }
}

/// What the spending stream would have grown to if invested monthly instead
pub fn opportunity_cost(params: &OpportunityCostParameters) -> FolioResult<Projection> {
    params.validate()?;
    let monthly = params.frequency.annualise(params.amount).as_f64() / 12.0;
    Projection::build(monthly, params.annual_return_pct, params.years)
}

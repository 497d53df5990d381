//! Income tax schedule
//!
//! Brackets change every tax year, so the schedule is data: it lives in the
//! settings file and defaults to the FY2024-25 Australian resident rates.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// One marginal bracket: income above `threshold` is taxed at `rate_bps`
/// until the next bracket's threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: Money,
    /// Marginal rate in basis points (1600 = 16%)
    pub rate_bps: u32,
}

impl TaxBracket {
    pub const fn new(threshold_dollars: i64, rate_bps: u32) -> Self {
        Self {
            threshold: Money::from_dollars(threshold_dollars),
            rate_bps,
        }
    }
}

/// A complete tax-year schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Label shown in reports, e.g. "FY2024-25"
    pub name: String,
    /// Brackets sorted by ascending threshold; the first starts at zero
    pub brackets: Vec<TaxBracket>,
    /// Flat levy on gross income
    #[serde(default = "default_medicare_levy_bps")]
    pub medicare_levy_bps: u32,
    /// Employer superannuation guarantee, reported but not deducted
    #[serde(default = "default_super_guarantee_bps")]
    pub super_guarantee_bps: u32,
}

fn default_medicare_levy_bps() -> u32 {
    200
}

fn default_super_guarantee_bps() -> u32 {
    1150
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::fy2024_25()
    }
}

impl TaxSchedule {
    /// Australian resident rates for the 2024-25 income year
    pub fn fy2024_25() -> Self {
        Self {
            name: "FY2024-25".to_string(),
            brackets: vec![
                TaxBracket::new(0, 0),
                TaxBracket::new(18_200, 1600),
                TaxBracket::new(45_000, 3000),
                TaxBracket::new(135_000, 3700),
                TaxBracket::new(190_000, 4500),
            ],
            medicare_levy_bps: default_medicare_levy_bps(),
            super_guarantee_bps: default_super_guarantee_bps(),
        }
    }

    /// Check that brackets start at zero, ascend strictly and use sane rates
    pub fn validate(&self) -> Result<(), String> {
        let first = self
            .brackets
            .first()
            .ok_or_else(|| format!("Tax schedule '{}' has no brackets", self.name))?;
        if !first.threshold.is_zero() {
            return Err(format!(
                "Tax schedule '{}' must start its first bracket at 0",
                self.name
            ));
        }
        for pair in self.brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(format!(
                    "Tax schedule '{}' thresholds must be strictly ascending",
                    self.name
                ));
            }
        }
        let rates = self
            .brackets
            .iter()
            .map(|b| b.rate_bps)
            .chain([self.medicare_levy_bps, self.super_guarantee_bps]);
        for rate in rates {
            if rate > 10_000 {
                return Err(format!("Rate of {} basis points exceeds 100%", rate));
            }
        }
        Ok(())
    }

    /// Progressive income tax on an annual gross amount
    ///
    /// Each bracket taxes the slice of income between its threshold and the
    /// next one, so the fixed offsets of published tables fall out of the sum.
    pub fn income_tax(&self, annual_gross: Money) -> Money {
        if !annual_gross.is_positive() {
            return Money::zero();
        }

        let mut tax = Money::zero();
        for (idx, bracket) in self.brackets.iter().enumerate() {
            if annual_gross <= bracket.threshold {
                break;
            }
            let upper = self
                .brackets
                .get(idx + 1)
                .map(|next| next.threshold.min(annual_gross))
                .unwrap_or(annual_gross);
            tax += (upper - bracket.threshold).apply_bps(bracket.rate_bps);
        }
        tax
    }

    /// Marginal rate (basis points) applying to the last dollar of income
    pub fn marginal_rate_bps(&self, annual_gross: Money) -> u32 {
        self.brackets
            .iter()
            .rev()
            .find(|b| annual_gross > b.threshold)
            .map(|b| b.rate_bps)
            .unwrap_or(0)
    }

    /// Flat levy on gross income
    pub fn medicare_levy(&self, annual_gross: Money) -> Money {
        if !annual_gross.is_positive() {
            return Money::zero();
        }
        annual_gross.apply_bps(self.medicare_levy_bps)
    }

    /// Employer superannuation contribution on gross income
    pub fn super_contribution(&self, annual_gross: Money) -> Money {
        if !annual_gross.is_positive() {
            return Money::zero();
        }
        annual_gross.apply_bps(self.super_guarantee_bps)
    }
}

//! Payment frequency and annualisation
//!
//! Expenses and income arrive with free-text frequencies ("fn", "2 weeks",
//! "annually"). [`Frequency::normalise`] folds them onto five canonical values
//! and falls back to monthly for anything it does not recognise.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// How often an amount recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    /// All canonical frequencies, shortest period first
    pub const ALL: [Frequency; 5] = [
        Self::Weekly,
        Self::Fortnightly,
        Self::Monthly,
        Self::Quarterly,
        Self::Yearly,
    ];

    /// Number of occurrences per year
    pub const fn multiplier(&self) -> i64 {
        match self {
            Self::Weekly => 52,
            Self::Fortnightly => 26,
            Self::Monthly => 12,
            Self::Quarterly => 4,
            Self::Yearly => 1,
        }
    }

    /// Canonical lowercase name, as written in CSV files
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Fortnightly => "fortnightly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Recognise a frequency synonym, or `None` if the text is unknown
    pub fn recognise(input: &str) -> Option<Self> {
        let key: String = input
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match key.as_str() {
            "w" | "wk" | "week" | "weekly" => Some(Self::Weekly),
            "f" | "fn" | "fortnight" | "fortnightly" | "2weeks" | "2w" | "biweekly" => {
                Some(Self::Fortnightly)
            }
            "m" | "mo" | "month" | "monthly" => Some(Self::Monthly),
            "q" | "qtr" | "quarter" | "quarterly" => Some(Self::Quarterly),
            "y" | "yr" | "year" | "yearly" | "annual" | "annually" | "pa" => Some(Self::Yearly),
            _ => None,
        }
    }

    /// Normalise free text to a frequency, defaulting to monthly
    pub fn normalise(input: &str) -> Self {
        Self::recognise(input).unwrap_or_default()
    }

    /// Convert a per-occurrence amount to its yearly total
    pub fn annualise(&self, amount: Money) -> Money {
        amount.times(self.multiplier())
    }

    /// Convert a yearly total back to a per-occurrence amount
    pub fn from_annual(&self, annual: Money) -> Money {
        annual.split(self.multiplier())
    }
}

/// Yearly equivalent of `amount` paid at `frequency`
pub fn annualise(amount: Money, frequency: Frequency) -> Money {
    frequency.annualise(amount)
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Strict parsing, used for command-line arguments where silently falling
/// back to monthly would hide typos
impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::recognise(s).ok_or_else(|| format!("Unknown frequency: '{}'", s))
    }
}

//! Income parameters
//!
//! Gross salary and any other income, each with its own pay frequency.

use serde::{Deserialize, Serialize};

use super::frequency::Frequency;
use super::money::Money;

/// Validation errors for income parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeSalary,
    NegativeOtherIncome,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeSalary => write!(f, "Gross salary cannot be negative"),
            Self::NegativeOtherIncome => write!(f, "Other income cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IncomeParameters {
    /// Gross salary per pay period
    pub gross_salary: Money,
    pub pay_frequency: Frequency,
    #[serde(default)]
    pub other_income: Money,
    #[serde(default)]
    pub other_income_frequency: Frequency,
}

impl IncomeParameters {
    /// Salary-only income
    pub fn salary(gross_salary: Money, pay_frequency: Frequency) -> Self {
        Self {
            gross_salary,
            pay_frequency,
            other_income: Money::zero(),
            other_income_frequency: Frequency::Monthly,
        }
    }

    /// Add other income (rent received, side work) at its own frequency
    pub fn with_other_income(mut self, amount: Money, frequency: Frequency) -> Self {
        self.other_income = amount;
        self.other_income_frequency = frequency;
        self
    }

    /// Yearly salary
    pub fn annual_salary(&self) -> Money {
        self.pay_frequency.annualise(self.gross_salary)
    }

    /// Yearly other income
    pub fn annual_other_income(&self) -> Money {
        self.other_income_frequency.annualise(self.other_income)
    }

    /// Total yearly gross income
    pub fn annual_gross(&self) -> Money {
        self.annual_salary() + self.annual_other_income()
    }

    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.gross_salary.is_negative() {
            return Err(IncomeValidationError::NegativeSalary);
        }
        if self.other_income.is_negative() {
            return Err(IncomeValidationError::NegativeOtherIncome);
        }
        Ok(())
    }
}

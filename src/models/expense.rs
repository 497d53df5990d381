//! Expense line items
//!
//! An expense is a recurring outgoing amount with a frequency and category.
//! Amounts are never negative; imports take the absolute value and manual
//! entry validates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::ExpenseCategory;
use super::frequency::Frequency;
use super::ids::ExpenseId;
use super::money::Money;

/// Validation errors for expense items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyLabel,
    NegativeAmount,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Expense label cannot be empty"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recurring expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: ExpenseId,
    pub label: String,
    pub amount: Money,
    pub frequency: Frequency,
    pub category: ExpenseCategory,
}

impl ExpenseItem {
    /// Create an expense with a fresh id, inferring the category from the label
    pub fn new(label: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        let label = label.into();
        let category = ExpenseCategory::classify(&label);
        Self {
            id: ExpenseId::new(),
            label,
            amount,
            frequency,
            category,
        }
    }

    /// Override the inferred category
    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    /// Yearly equivalent of this expense
    pub fn annual_amount(&self) -> Money {
        self.frequency.annualise(self.amount)
    }

    /// Monthly equivalent of this expense
    pub fn monthly_amount(&self) -> Money {
        self.annual_amount().split(12)
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.label.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyLabel);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}

/// Sum of the yearly equivalents of `items`
pub fn annual_total(items: &[ExpenseItem]) -> Money {
    items.iter().map(ExpenseItem::annual_amount).sum()
}

/// Yearly totals per category; categories without expenses are omitted
pub fn annual_totals_by_category(items: &[ExpenseItem]) -> BTreeMap<ExpenseCategory, Money> {
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(item.category).or_insert_with(Money::zero) += item.annual_amount();
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_infers_category() {
        let item = ExpenseItem::new("Weekly groceries", Money::from_dollars(150), Frequency::Weekly);
        assert_eq!(item.category, ExpenseCategory::Food);
        assert!(item.id.as_str().starts_with("exp-"));
    }

    #[test]
    fn test_annual_and_monthly_amount() {
        let item = ExpenseItem::new("Rent", Money::from_dollars(500), Frequency::Weekly);
        assert_eq!(item.annual_amount(), Money::from_dollars(26_000));
        assert_eq!(item.monthly_amount().cents(), 216_667);
    }

    #[test]
    fn test_validation() {
        let blank = ExpenseItem::new("  ", Money::from_dollars(1), Frequency::Monthly);
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyLabel));

        let negative = ExpenseItem::new("Rent", Money::from_cents(-1), Frequency::Monthly);
        assert_eq!(negative.validate(), Err(ExpenseValidationError::NegativeAmount));

        let ok = ExpenseItem::new("Rent", Money::zero(), Frequency::Monthly);
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_totals_by_category() {
        let items = vec![
            ExpenseItem::new("Rent", Money::from_dollars(2_000), Frequency::Monthly),
            ExpenseItem::new("Groceries", Money::from_dollars(100), Frequency::Weekly),
            ExpenseItem::new("Coffee", Money::from_dollars(5), Frequency::Weekly),
        ];

        assert_eq!(annual_total(&items), Money::from_dollars(24_000 + 5_200 + 260));

        let totals = annual_totals_by_category(&items);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&ExpenseCategory::Housing], Money::from_dollars(24_000));
        assert_eq!(totals[&ExpenseCategory::Food], Money::from_dollars(5_460));
    }

    #[test]
    fn test_serialization() {
        let item = ExpenseItem::new("Gym", Money::from_cents(2_500), Frequency::Fortnightly);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"frequency\":\"fortnightly\""));
        assert!(json.contains("\"category\":\"health\""));
        let back: ExpenseItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }
}

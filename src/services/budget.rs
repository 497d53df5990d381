//! Budget service
//!
//! Expense list management on top of the expense repository, plus the
//! summary that combines expenses with income.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{FolioError, FolioResult};
use crate::models::{
    annual_total, annual_totals_by_category, ExpenseCategory, ExpenseItem, Frequency,
    IncomeParameters, Money, TaxSchedule,
};
use crate::storage::Storage;

use super::import::{import_expenses_with_report, ImportReport};
use super::projection::IncomeSummary;

/// Service for expense list management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Fields to change on an existing expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub label: Option<String>,
    pub amount: Option<Money>,
    pub frequency: Option<Frequency>,
    pub category: Option<ExpenseCategory>,
}

/// One category's share of annual spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub annual: Money,
    pub monthly: Money,
    pub share_pct: f64,
}

/// Spending totals, optionally set against income
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub expense_count: usize,
    pub annual_expenses: Money,
    pub monthly_expenses: Money,
    /// Largest share first
    pub categories: Vec<CategoryShare>,
    pub income: Option<IncomeSummary>,
    pub monthly_surplus: Option<Money>,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All expenses in stored order
    pub fn list(&self) -> FolioResult<Vec<ExpenseItem>> {
        self.storage.expenses.load()
    }

    /// Find an expense by id or label (case-insensitive)
    pub fn find(&self, reference: &str) -> FolioResult<Option<ExpenseItem>> {
        let reference = reference.trim();
        let expenses = self.storage.expenses.load()?;

        if let Some(item) = expenses.iter().find(|e| e.id.as_str() == reference) {
            return Ok(Some(item.clone()));
        }
        Ok(expenses
            .into_iter()
            .find(|e| e.label.eq_ignore_ascii_case(reference)))
    }

    /// Add an expense; the category is inferred from the label unless given
    pub fn add(
        &self,
        label: &str,
        amount: Money,
        frequency: Frequency,
        category: Option<ExpenseCategory>,
    ) -> FolioResult<ExpenseItem> {
        let mut item = ExpenseItem::new(label.trim(), amount, frequency);
        if let Some(category) = category {
            item = item.with_category(category);
        }
        item.validate()
            .map_err(|e| FolioError::Validation(e.to_string()))?;

        let mut expenses = self.storage.expenses.load()?;
        expenses.push(item.clone());
        self.storage.expenses.save(&expenses)?;

        tracing::debug!(id = %item.id, category = %item.category, "added expense");
        Ok(item)
    }

    /// Apply `update` to the expense matching `reference`
    pub fn update(&self, reference: &str, update: ExpenseUpdate) -> FolioResult<ExpenseItem> {
        let target = self
            .find(reference)?
            .ok_or_else(|| FolioError::expense_not_found(reference))?;

        let mut expenses = self.storage.expenses.load()?;
        let item = expenses
            .iter_mut()
            .find(|e| e.id == target.id)
            .ok_or_else(|| FolioError::expense_not_found(reference))?;

        if let Some(label) = update.label {
            item.label = label.trim().to_string();
        }
        if let Some(amount) = update.amount {
            item.amount = amount;
        }
        if let Some(frequency) = update.frequency {
            item.frequency = frequency;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        item.validate()
            .map_err(|e| FolioError::Validation(e.to_string()))?;

        let updated = item.clone();
        self.storage.expenses.save(&expenses)?;
        Ok(updated)
    }

    /// Remove the expense matching `reference`
    pub fn remove(&self, reference: &str) -> FolioResult<ExpenseItem> {
        let target = self
            .find(reference)?
            .ok_or_else(|| FolioError::expense_not_found(reference))?;

        let mut expenses = self.storage.expenses.load()?;
        expenses.retain(|e| e.id != target.id);
        self.storage.expenses.save(&expenses)?;
        Ok(target)
    }

    /// Remove every expense, returning how many were removed
    pub fn clear(&self) -> FolioResult<usize> {
        let count = self.storage.expenses.load()?.len();
        self.storage.expenses.save(&[])?;
        Ok(count)
    }

    /// Import expenses from CSV text, replacing the list unless `append`
    ///
    /// Nothing is written when the import fails.
    pub fn import_csv(
        &self,
        text: &str,
        append: bool,
        imported_at: DateTime<Utc>,
    ) -> FolioResult<ImportReport> {
        let report = import_expenses_with_report(text, imported_at)?;

        let mut expenses = if append {
            self.storage.expenses.load()?
        } else {
            Vec::new()
        };
        expenses.extend(report.items.iter().cloned());
        self.storage.expenses.save(&expenses)?;

        Ok(report)
    }

    /// Totals by category, and take-home surplus when income is known
    pub fn summary(
        &self,
        income: Option<&IncomeParameters>,
        schedule: &TaxSchedule,
    ) -> FolioResult<BudgetSummary> {
        let expenses = self.storage.expenses.load()?;
        summarise(&expenses, income, schedule)
    }
}

/// Build a summary from an expense list without touching storage
pub fn summarise(
    expenses: &[ExpenseItem],
    income: Option<&IncomeParameters>,
    schedule: &TaxSchedule,
) -> FolioResult<BudgetSummary> {
    let annual_expenses = annual_total(expenses);

    let mut categories: Vec<CategoryShare> = annual_totals_by_category(expenses)
        .into_iter()
        .map(|(category, annual)| CategoryShare {
            category,
            annual,
            monthly: annual.split(12),
            share_pct: if annual_expenses.is_positive() {
                annual.as_f64() / annual_expenses.as_f64() * 100.0
            } else {
                0.0
            },
        })
        .collect();
    categories.sort_by(|a, b| b.annual.cmp(&a.annual));

    let income = income
        .map(|params| IncomeSummary::compute(params, schedule))
        .transpose()?;
    let monthly_surplus = income
        .as_ref()
        .map(|summary| (summary.net_annual - annual_expenses).split(12));

    Ok(BudgetSummary {
        expense_count: expenses.len(),
        annual_expenses,
        monthly_expenses: annual_expenses.split(12),
        categories,
        income,
        monthly_surplus,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{paths::FolioPaths, settings::Settings};
    use crate::services::import::TEMPLATE_CSV;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FolioPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        (temp_dir, storage)
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_add_infers_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let item = service
            .add("  Electricity bill ", Money::from_dollars(300), Frequency::Quarterly, None)
            .unwrap();
        assert_eq!(item.label, "Electricity bill");
        assert_eq!(item.category, ExpenseCategory::Utilities);
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_add_rejects_empty_label() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service
            .add("   ", Money::from_dollars(10), Frequency::Monthly, None)
            .unwrap_err();
        assert!(err.is_validation());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_find_by_id_or_label() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        let item = service
            .add("Rent", Money::from_dollars(2_000), Frequency::Monthly, None)
            .unwrap();

        assert_eq!(service.find(item.id.as_str()).unwrap(), Some(item.clone()));
        assert_eq!(service.find("rent").unwrap(), Some(item));
        assert_eq!(service.find("mortgage").unwrap(), None);
    }

    #[test]
    fn test_update_and_remove() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .add("Gym", Money::from_dollars(25), Frequency::Fortnightly, None)
            .unwrap();

        let updated = service
            .update(
                "gym",
                ExpenseUpdate {
                    amount: Some(Money::from_dollars(30)),
                    category: Some(ExpenseCategory::Personal),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.amount, Money::from_dollars(30));
        assert_eq!(updated.category, ExpenseCategory::Personal);
        assert_eq!(updated.frequency, Frequency::Fortnightly);

        let removed = service.remove("Gym").unwrap();
        assert_eq!(removed.id, updated.id);
        assert!(service.list().unwrap().is_empty());

        let err = service.remove("Gym").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_import_replaces_or_appends() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .add("Coffee", Money::from_dollars(5), Frequency::Weekly, None)
            .unwrap();

        let report = service.import_csv(TEMPLATE_CSV, false, at()).unwrap();
        assert_eq!(report.items.len(), 7);
        assert_eq!(service.list().unwrap().len(), 7);

        service
            .import_csv("name,amount\nParking,12\n", true, at())
            .unwrap();
        let expenses = service.list().unwrap();
        assert_eq!(expenses.len(), 8);
        assert_eq!(expenses[7].label, "Parking");
    }

    #[test]
    fn test_failed_import_keeps_existing() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service
            .add("Coffee", Money::from_dollars(5), Frequency::Weekly, None)
            .unwrap();

        assert!(service.import_csv("foo,bar\n1,2\n", false, at()).is_err());
        assert_eq!(service.list().unwrap().len(), 1);
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service.import_csv(TEMPLATE_CSV, false, at()).unwrap();
        assert_eq!(service.clear().unwrap(), 7);
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_summary_with_income() {
        let expenses = vec![
            ExpenseItem::new("Rent", Money::from_dollars(2_000), Frequency::Monthly),
            ExpenseItem::new("Groceries", Money::from_dollars(150), Frequency::Weekly),
        ];
        let income = IncomeParameters::salary(Money::from_dollars(90_000), Frequency::Yearly);

        let summary = summarise(&expenses, Some(&income), &TaxSchedule::default()).unwrap();
        assert_eq!(summary.annual_expenses, Money::from_dollars(31_800));
        assert_eq!(summary.monthly_expenses, Money::from_dollars(2_650));
        assert_eq!(summary.categories[0].category, ExpenseCategory::Housing);
        assert!((summary.categories[0].share_pct - 75.471_698).abs() < 1e-4);

        // (70,412 - 31,800) / 12
        assert_eq!(summary.monthly_surplus, Some(Money::from_cents(321_767)));
    }

    #[test]
    fn test_summary_empty() {
        let summary = summarise(&[], None, &TaxSchedule::default()).unwrap();
        assert!(summary.annual_expenses.is_zero());
        assert!(summary.categories.is_empty());
        assert_eq!(summary.monthly_surplus, None);
    }
}

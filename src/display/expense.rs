//! Expense display formatting
//!
//! Formats the expense list and budget summary for terminal output.

use crate::models::{annual_total, ExpenseItem};
use crate::services::budget::BudgetSummary;

use super::income::format_income_summary;
use super::report::{format_currency, format_percentage, format_whole, separator};

/// Format the expense list as a table with per-item annual amounts
pub fn format_expense_list(expenses: &[ExpenseItem], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n\nAdd one with 'folio budget add' or import a CSV with 'folio budget import'."
            .to_string();
    }

    let id_width = expenses.iter().map(|e| e.id.as_str().len()).max().unwrap_or(2).max(2);
    let label_width = expenses.iter().map(|e| e.label.len()).max().unwrap_or(5).max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<id_width$}  {:<label_width$}  {:>12}  {:<11}  {:<13}  {:>12}\n",
        "ID",
        "Label",
        "Amount",
        "Frequency",
        "Category",
        "Annual",
    ));
    output.push_str(&format!(
        "{:-<id_width$}  {:-<label_width$}  {:->12}  {:-<11}  {:-<13}  {:->12}\n",
        "", "", "", "", "", "",
    ));

    for item in expenses {
        output.push_str(&format!(
            "{:<id_width$}  {:<label_width$}  {:>12}  {:<11}  {:<13}  {:>12}\n",
            item.id.as_str(),
            item.label,
            format_currency(item.amount, symbol),
            item.frequency,
            item.category.label(),
            format_currency(item.annual_amount(), symbol),
        ));
    }

    let total = annual_total(expenses);
    output.push_str(&format!(
        "{:<id_width$}  {:<label_width$}  {:>12}  {:<11}  {:<13}  {:>12}\n",
        "",
        "Total",
        "",
        "",
        "",
        format_currency(total, symbol),
    ));

    output
}

/// Format a budget summary: category breakdown, then income and surplus
pub fn format_budget_summary(summary: &BudgetSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Expenses: {} items, {} / year, {} / month\n",
        summary.expense_count,
        format_whole(summary.annual_expenses, symbol),
        format_whole(summary.monthly_expenses, symbol),
    ));

    if !summary.categories.is_empty() {
        output.push_str(&format!("{}\n", separator(48)));
        output.push_str(&format!(
            "{:<15}  {:>12}  {:>10}  {:>6}\n",
            "Category", "Annual", "Monthly", "Share"
        ));
        for share in &summary.categories {
            output.push_str(&format!(
                "{:<15}  {:>12}  {:>10}  {:>6}\n",
                share.category.label(),
                format_whole(share.annual, symbol),
                format_whole(share.monthly, symbol),
                format_percentage(share.share_pct, 1),
            ));
        }
    }

    if let Some(income) = &summary.income {
        output.push_str(&format!("{}\n", separator(48)));
        output.push_str(&format_income_summary(income, symbol));
    }

    if let Some(surplus) = summary.monthly_surplus {
        output.push_str(&format!("{}\n", separator(48)));
        let label = if surplus.is_negative() { "Monthly shortfall" } else { "Monthly surplus" };
        output.push_str(&format!("{}: {}\n", label, format_whole(surplus.abs(), symbol)));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, IncomeParameters, Money, TaxSchedule};
    use crate::services::budget::summarise;

    #[test]
    fn test_empty_list() {
        assert!(format_expense_list(&[], "$").starts_with("No expenses found."));
    }

    #[test]
    fn test_list_shows_annual_total() {
        let items = vec![
            ExpenseItem::new("Rent", Money::from_dollars(2_000), Frequency::Monthly),
            ExpenseItem::new("Fuel", Money::from_dollars(60), Frequency::Weekly),
        ];
        let output = format_expense_list(&items, "$");
        assert!(output.contains("Rent"));
        assert!(output.contains("Transport"));
        assert!(output.contains("$24,000.00"));
        assert!(output.contains("$27,120.00"));
    }

    #[test]
    fn test_summary_with_surplus() {
        let items = vec![ExpenseItem::new(
            "Rent",
            Money::from_dollars(2_000),
            Frequency::Monthly,
        )];
        let income = IncomeParameters::salary(Money::from_dollars(90_000), Frequency::Yearly);
        let summary = summarise(&items, Some(&income), &TaxSchedule::default()).unwrap();

        let output = format_budget_summary(&summary, "$");
        assert!(output.contains("$24,000 / year"));
        assert!(output.contains("100.0%"));
        // (70,412 - 24,000) / 12 = 3,867.67
        assert!(output.contains("Monthly surplus: $3,868"));
    }
}

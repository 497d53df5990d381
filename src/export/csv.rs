//! CSV export of the expense list
//!
//! Output uses the import format (`name,amount,frequency,category`) so an
//! exported file can be imported again unchanged.

use std::io::Write;

use crate::error::{FolioError, FolioResult};
use crate::models::{ExpenseItem, Money};

/// Plain decimal amount without a currency symbol, e.g. `1200.50`
fn plain_amount(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();
    format!("{}{}.{:02}", sign, abs.dollars(), abs.cents_part())
}

/// Write expenses as CSV
pub fn write_expenses_csv<W: Write>(expenses: &[ExpenseItem], writer: W) -> FolioResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["name", "amount", "frequency", "category"])
        .map_err(|e| FolioError::Export(e.to_string()))?;
    for item in expenses {
        csv_writer.write_record([
            item.label.as_str(),
            plain_amount(item.amount).as_str(),
            item.frequency.as_str(),
            item.category.as_str(),
        ])
        .map_err(|e| FolioError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FolioError::Export(e.to_string()))
}

/// Render expenses to a CSV string
pub fn expenses_to_csv(expenses: &[ExpenseItem]) -> FolioResult<String> {
    let mut buffer = Vec::new();
    write_expenses_csv(expenses, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| FolioError::Export(e.to_string()))
}

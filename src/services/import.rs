//! CSV expense import
//!
//! Accepts a header row plus data rows. Headers are matched
//! case-insensitively against synonym sets; name and amount are required,
//! frequency and category optional. Rows with an empty name or an amount that
//! does not parse are skipped rather than failing the whole import.
//!
//! Each line is tokenized on its own, so a stray `"` can only spoil its own
//! row. A quote opens a quoted field only at the start of a field; doubled
//! quotes are not treated as escapes and a quote inside a field is kept.

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{FolioError, FolioResult};
use crate::models::{ExpenseCategory, ExpenseId, ExpenseItem, Frequency, Money};

/// Downloadable template in the import format
pub const TEMPLATE_CSV: &str = "\
name,amount,frequency,category
Rent,2000,monthly,housing
Groceries,150,weekly,food
Electricity,300,quarterly,utilities
Car Insurance,1200,yearly,insurance
Fuel,60,weekly,transport
Netflix,16.99,monthly,subscriptions
Gym Membership,25,fortnightly,health
";

const NAME_HEADERS: &[&str] = &["name", "label", "description", "expense", "item"];
const AMOUNT_HEADERS: &[&str] = &["amount", "cost", "value", "price", "total"];
const FREQUENCY_HEADERS: &[&str] = &["frequency", "freq", "period", "interval"];
const CATEGORY_HEADERS: &[&str] = &["category", "type", "group"];

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub name: usize,
    pub amount: usize,
    pub frequency: Option<usize>,
    pub category: Option<usize>,
}

impl ColumnMapping {
    /// Locate columns in a header record
    pub fn detect(headers: &StringRecord) -> FolioResult<Self> {
        let normalised: Vec<String> = headers
            .iter()
            .map(|h| h.replace('"', "").trim().to_lowercase())
            .collect();

        let find = |synonyms: &[&str]| {
            normalised
                .iter()
                .position(|h| synonyms.contains(&h.as_str()))
        };

        match (find(NAME_HEADERS), find(AMOUNT_HEADERS)) {
            (Some(name), Some(amount)) => Ok(Self {
                name,
                amount,
                frequency: find(FREQUENCY_HEADERS),
                category: find(CATEGORY_HEADERS),
            }),
            (None, None) => Err(FolioError::Import(
                "Could not find required columns: name and amount".into(),
            )),
            (None, Some(_)) => Err(FolioError::Import(format!(
                "Could not find required column: name (expected one of: {})",
                NAME_HEADERS.join(", ")
            ))),
            (Some(_), None) => Err(FolioError::Import(format!(
                "Could not find required column: amount (expected one of: {})",
                AMOUNT_HEADERS.join(", ")
            ))),
        }
    }
}

/// Outcome of an import, including the rows that were skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub items: Vec<ExpenseItem>,
    /// 1-based data row numbers (header excluded) that were skipped
    pub skipped_rows: Vec<usize>,
}

/// Parse CSV text into expense items
pub fn import_expenses(text: &str, imported_at: DateTime<Utc>) -> FolioResult<Vec<ExpenseItem>> {
    import_expenses_with_report(text, imported_at).map(|report| report.items)
}

/// Parse CSV text into expense items and report skipped rows
pub fn import_expenses_with_report(
    text: &str,
    imported_at: DateTime<Utc>,
) -> FolioResult<ImportReport> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let headers = match (lines.next(), lines.clone().next()) {
        (Some(header), Some(_)) => read_line(header)?,
        _ => {
            return Err(FolioError::Import(
                "CSV must contain a header row and at least one data row".into(),
            ))
        }
    };
    let mapping = ColumnMapping::detect(&headers)?;
    tracing::debug!(?mapping, "detected csv columns");

    let timestamp = imported_at.timestamp_millis();
    let mut items = Vec::new();
    let mut skipped_rows = Vec::new();

    for (row, line) in lines.enumerate() {
        let parsed = read_line(line)
            .ok()
            .and_then(|record| parse_row(&record, &mapping));
        match parsed {
            Some((label, amount, frequency, category)) => items.push(ExpenseItem {
                id: ExpenseId::imported(timestamp, row),
                label,
                amount,
                frequency,
                category,
            }),
            None => {
                tracing::debug!(row = row + 1, "skipping csv row");
                skipped_rows.push(row + 1);
            }
        }
    }

    if items.is_empty() {
        return Err(FolioError::Import("No valid expense rows found in CSV".into()));
    }

    tracing::info!(
        imported = items.len(),
        skipped = skipped_rows.len(),
        "parsed expense csv"
    );
    Ok(ImportReport {
        items,
        skipped_rows,
    })
}

/// Tokenize a single line; quotes never carry over to the next line
fn read_line(line: &str) -> FolioResult<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .double_quote(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

fn parse_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
) -> Option<(String, Money, Frequency, ExpenseCategory)> {
    let label = record.get(mapping.name)?.trim();
    if label.is_empty() {
        return None;
    }

    let amount = parse_amount(record.get(mapping.amount)?)?;

    let frequency = mapping
        .frequency
        .and_then(|idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Frequency::normalise)
        .unwrap_or_default();

    let category = mapping
        .category
        .and_then(|idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ExpenseCategory::classify)
        .unwrap_or_else(|| ExpenseCategory::classify(label));

    Some((label.to_string(), amount, frequency, category))
}

/// Keep digits, `.` and `-`, parse, and drop the sign
///
/// Amounts beyond [`Money::MAX_ENTRY`] are rejected.
fn parse_amount(raw: &str) -> Option<Money> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    let value: f64 = cleaned.parse().ok()?;
    Money::from_entry(value.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annual_total;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_template_round_trip_total() {
        let items = import_expenses(TEMPLATE_CSV, at()).unwrap();
        assert_eq!(items.len(), 7);

        // 24,000 + 7,800 + 1,200 + 1,200 + 3,120 + 203.88 + 650
        assert_eq!(annual_total(&items), Money::from_cents(38_173_88));
        assert_eq!(items[3].category, ExpenseCategory::Insurance);
        assert_eq!(items[6].frequency, Frequency::Fortnightly);
    }

    #[test]
    fn test_ids_combine_timestamp_and_row() {
        let items = import_expenses(TEMPLATE_CSV, at()).unwrap();
        let millis = at().timestamp_millis();
        assert_eq!(items[0].id, ExpenseId::imported(millis, 0));
        assert_eq!(items[6].id, ExpenseId::imported(millis, 6));
    }

    #[test]
    fn test_missing_both_columns() {
        let err = import_expenses("foo,bar\n1,2\n", at()).unwrap_err();
        assert!(err.to_string().contains("Could not find required columns"));
    }

    #[test]
    fn test_missing_single_column_messages_differ() {
        let no_name = import_expenses("amount,frequency\n10,monthly\n", at()).unwrap_err();
        assert!(no_name.to_string().contains("required column: name"));

        let no_amount = import_expenses("label,frequency\nRent,monthly\n", at()).unwrap_err();
        assert!(no_amount.to_string().contains("required column: amount"));
    }

    #[test]
    fn test_too_few_lines() {
        assert!(import_expenses("", at()).is_err());
        let err = import_expenses("name,amount\n\n  \n", at()).unwrap_err();
        assert!(err.to_string().contains("header row and at least one data row"));
    }

    #[test]
    fn test_non_numeric_amount_row_skipped() {
        let csv = "name,amount,frequency,category\nRent,abc,monthly,housing\nFood,100,weekly,food\n";
        let report = import_expenses_with_report(csv, at()).unwrap();
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].label, "Food");
        assert_eq!(report.skipped_rows, vec![1]);
        // ids keep the original row position
        assert_eq!(report.items[0].id, ExpenseId::imported(at().timestamp_millis(), 1));
    }

    #[test]
    fn test_no_valid_rows() {
        let err = import_expenses("name,amount\n,10\nRent,n/a\n", at()).unwrap_err();
        assert!(err.to_string().contains("No valid expense rows"));
    }

    #[test]
    fn test_header_synonyms_and_case() {
        let csv = "\"Description\",\"COST\",Period,Type\nPhone plan,$45.50,m,\n";
        let items = import_expenses(csv, at()).unwrap();
        assert_eq!(items[0].label, "Phone plan");
        assert_eq!(items[0].amount, Money::from_cents(4_550));
        assert_eq!(items[0].frequency, Frequency::Monthly);
        // empty category cell falls back to the label
        assert_eq!(items[0].category, ExpenseCategory::Utilities);
    }

    #[test]
    fn test_optional_columns_absent() {
        let items = import_expenses("item,price\nCoffee,4.50\n", at()).unwrap();
        assert_eq!(items[0].frequency, Frequency::Monthly);
        assert_eq!(items[0].category, ExpenseCategory::Food);
    }

    #[test]
    fn test_quoted_fields_and_amount_cleanup() {
        let csv = "name,amount,frequency\n\"Rent, unit 4\",\"$1,200.50\",fn\nRefund,-30,w\n";
        let items = import_expenses(csv, at()).unwrap();
        assert_eq!(items[0].label, "Rent, unit 4");
        assert_eq!(items[0].amount, Money::from_cents(120_050));
        assert_eq!(items[0].frequency, Frequency::Fortnightly);
        // sign is discarded
        assert_eq!(items[1].amount, Money::from_dollars(30));
        assert_eq!(items[1].frequency, Frequency::Weekly);
    }

    #[test]
    fn test_unknown_frequency_defaults_monthly() {
        let items = import_expenses("name,amount,frequency\nGym,20,daily\n", at()).unwrap();
        assert_eq!(items[0].frequency, Frequency::Monthly);
    }

    #[test]
    fn test_category_cell_is_classified() {
        let csv = "name,amount,category\nThing,10,Groceries\nOther thing,10,nonsense\n";
        let items = import_expenses(csv, at()).unwrap();
        assert_eq!(items[0].category, ExpenseCategory::Food);
        assert_eq!(items[1].category, ExpenseCategory::Other);
    }

    #[test]
    fn test_short_rows_are_skipped() {
        let csv = "name,amount\nLonely\nRent,500\n";
        let report = import_expenses_with_report(csv, at()).unwrap();
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.skipped_rows, vec![1]);
    }

    #[test]
    fn test_unbalanced_quote_only_skips_its_row() {
        let csv = "name,amount\n\"Rent,100\nFood,50\nGym,20\n";
        let report = import_expenses_with_report(csv, at()).unwrap();

        let labels: Vec<&str> = report.items.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Food", "Gym"]);
        assert_eq!(report.skipped_rows, vec![1]);
        assert_eq!(report.items[0].id, ExpenseId::imported(at().timestamp_millis(), 1));
    }

    #[test]
    fn test_quoted_row_does_not_affect_neighbours() {
        let csv = "name,amount,frequency\r\nPower,90,quarterly\r\n\"Car, loan\",\"450\",monthly\r\n\"Water,80\r\nNetflix,16.99,monthly\r\n";
        let report = import_expenses_with_report(csv, at()).unwrap();

        assert_eq!(report.items.len(), 3);
        assert_eq!(report.items[0].label, "Power");
        assert_eq!(report.items[1].label, "Car, loan");
        assert_eq!(report.items[1].amount, Money::from_dollars(450));
        assert_eq!(report.items[2].label, "Netflix");
        assert_eq!(report.skipped_rows, vec![3]);
    }

    #[test]
    fn test_quote_inside_field_is_kept() {
        let items = import_expenses("name,amount\n12\" Pizza,10\n", at()).unwrap();
        assert_eq!(items[0].label, "12\" Pizza");
        assert_eq!(items[0].amount, Money::from_dollars(10));
    }

    #[test]
    fn test_oversized_amount_row_skipped() {
        let csv = "name,amount,frequency\nBig,10000000000000000,weekly\nRent,500,weekly\n";
        let report = import_expenses_with_report(csv, at()).unwrap();

        assert_eq!(report.items.len(), 1);
        assert_eq!(report.skipped_rows, vec![1]);
        assert_eq!(annual_total(&report.items), Money::from_dollars(26_000));
    }

    #[test]
    fn test_amount_at_entry_limit_annualises() {
        let csv = "name,amount,frequency\nBig,1000000000000,weekly\n";
        let items = import_expenses(csv, at()).unwrap();
        assert_eq!(items[0].amount, Money::MAX_ENTRY);
        assert_eq!(annual_total(&items), Money::MAX_ENTRY.times(52));
    }

    #[test]
    fn test_column_mapping_detect() {
        let headers = StringRecord::from(vec!["Category", "Expense", "Total", "Freq"]);
        let mapping = ColumnMapping::detect(&headers).unwrap();
        assert_eq!(
            mapping,
            ColumnMapping {
                name: 1,
                amount: 2,
                frequency: Some(3),
                category: Some(0),
            }
        );
    }
}

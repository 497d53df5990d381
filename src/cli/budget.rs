//! Budget CLI commands
//!
//! Expense list management, CSV import/export and the budget summary.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_expense_list};
use crate::error::{FolioError, FolioResult};
use crate::export::write_expenses_csv;
use crate::models::{ExpenseCategory, Frequency};
use crate::services::budget::{BudgetService, ExpenseUpdate};
use crate::services::import::TEMPLATE_CSV;
use crate::storage::Storage;

use super::{parse_money, IncomeArgs};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// List expenses with annual amounts
    List,

    /// Add an expense
    Add {
        /// Expense label (e.g., "Rent")
        label: String,
        /// Amount per occurrence (e.g., "2000" or "$16.99")
        amount: String,
        /// How often the amount is paid
        #[arg(short, long, default_value = "monthly")]
        frequency: Frequency,
        /// Category (inferred from the label when omitted)
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
    },

    /// Change fields of an existing expense
    Edit {
        /// Expense ID or label
        expense: String,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New frequency
        #[arg(short, long)]
        frequency: Option<Frequency>,
        /// New category
        #[arg(short, long)]
        category: Option<ExpenseCategory>,
    },

    /// Remove an expense
    Remove {
        /// Expense ID or label
        expense: String,
    },

    /// Remove all expenses
    Clear,

    /// Import expenses from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
        /// Add to the existing list instead of replacing it
        #[arg(long)]
        append: bool,
    },

    /// Export expenses to a CSV file
    Export {
        /// Output path
        file: PathBuf,
    },

    /// Write the CSV import template
    Template {
        /// Output path (prints to stdout when omitted)
        file: Option<PathBuf>,
    },

    /// Show spending by category and, given income, the monthly surplus
    Summary {
        #[command(flatten)]
        income: IncomeArgs,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FolioResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_list(&expenses, symbol));
            if expenses.is_empty() {
                println!();
            }
        }

        BudgetCommands::Add {
            label,
            amount,
            frequency,
            category,
        } => {
            let amount = parse_money(&amount)?;
            let item = service.add(&label, amount, frequency, category)?;
            println!(
                "Added '{}' ({} {}, {})",
                item.label,
                item.amount.format_with_symbol(symbol),
                item.frequency,
                item.category.label()
            );
            println!("  ID: {}", item.id);
        }

        BudgetCommands::Edit {
            expense,
            label,
            amount,
            frequency,
            category,
        } => {
            if label.is_none() && amount.is_none() && frequency.is_none() && category.is_none() {
                println!("No changes specified.");
                return Ok(());
            }
            let update = ExpenseUpdate {
                label,
                amount: amount.as_deref().map(parse_money).transpose()?,
                frequency,
                category,
            };
            let item = service.update(&expense, update)?;
            println!(
                "Updated '{}' ({} {}, {})",
                item.label,
                item.amount.format_with_symbol(symbol),
                item.frequency,
                item.category.label()
            );
        }

        BudgetCommands::Remove { expense } => {
            let removed = service.remove(&expense)?;
            println!("Removed '{}'", removed.label);
        }

        BudgetCommands::Clear => {
            let count = service.clear()?;
            println!("Removed {} expenses", count);
        }

        BudgetCommands::Import { file, append } => {
            let text = fs::read_to_string(&file).map_err(|e| {
                FolioError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let report = service.import_csv(&text, append, Utc::now())?;

            println!(
                "Imported {} expenses from {}",
                report.items.len(),
                file.display()
            );
            if !report.skipped_rows.is_empty() {
                let rows: Vec<String> = report.skipped_rows.iter().map(|r| r.to_string()).collect();
                println!(
                    "Skipped {} rows with a missing name or invalid amount: {}",
                    report.skipped_rows.len(),
                    rows.join(", ")
                );
            }
        }

        BudgetCommands::Export { file } => {
            let expenses = service.list()?;
            let out = fs::File::create(&file).map_err(|e| {
                FolioError::Export(format!("Failed to create {}: {}", file.display(), e))
            })?;
            write_expenses_csv(&expenses, out)?;
            println!("Exported {} expenses to {}", expenses.len(), file.display());
        }

        BudgetCommands::Template { file } => match file {
            Some(path) => {
                fs::write(&path, TEMPLATE_CSV).map_err(|e| {
                    FolioError::Export(format!("Failed to write {}: {}", path.display(), e))
                })?;
                println!("Wrote template to {}", path.display());
            }
            None => print!("{}", TEMPLATE_CSV),
        },

        BudgetCommands::Summary { income } => {
            let income = income.to_parameters()?;
            let summary = service.summary(income.as_ref(), &settings.tax_schedule)?;
            print!("{}", format_budget_summary(&summary, symbol));
        }
    }

    Ok(())
}

//! Expense list repository

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;
use crate::models::ExpenseItem;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<ExpenseItem>,
}

/// Persists the ordered expense list as `{ "expenses": [...] }`
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the expense list; a missing file is an empty list
    pub fn load(&self) -> Result<Vec<ExpenseItem>, FolioError> {
        let data: ExpenseData = read_json(&self.path)?;
        Ok(data.expenses)
    }

    pub fn save(&self, expenses: &[ExpenseItem]) -> Result<(), FolioError> {
        let data = ExpenseData {
            expenses: expenses.to_vec(),
        };
        write_json_atomic(&self.path, &data)?;
        tracing::info!(count = expenses.len(), "saved expenses");
        Ok(())
    }
}

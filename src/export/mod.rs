//! Export of the expense list

pub mod csv;

pub use self::csv::{expenses_to_csv, write_expenses_csv};

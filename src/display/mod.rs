//! Display formatting for terminal output

pub mod expense;
pub mod summary;

pub use expense::{format_expense_row, format_expense_table};
pub use summary::{format_month_total, format_total};

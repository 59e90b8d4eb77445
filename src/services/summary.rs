//! Summary engine
//!
//! Aggregates expense amounts, optionally scoped to a calendar month. The
//! month of a record is derived from its creation date; the stored `Month`
//! field is write-only and never consulted here.

use chrono::Datelike;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Total of every expense, unbounded by month
pub fn total_all(expenses: &[Expense]) -> i64 {
    expenses.iter().map(|e| e.amount).sum()
}

/// Total of the expenses created in the given calendar month (1-12)
pub fn total_for_month(expenses: &[Expense], month: u32) -> ExpenseResult<i64> {
    validate_month(month)?;

    Ok(expenses
        .iter()
        .filter(|e| e.created_at.month() == month)
        .map(|e| e.amount)
        .sum())
}

/// English name of a calendar month (1-12)
pub fn month_name(month: u32) -> ExpenseResult<&'static str> {
    validate_month(month)?;
    Ok(MONTH_NAMES[(month - 1) as usize])
}

fn validate_month(month: u32) -> ExpenseResult<()> {
    if !(1..=12).contains(&month) {
        return Err(ExpenseError::Validation(format!(
            "Month {} must be between 1 and 12",
            month
        )));
    }
    Ok(())
}

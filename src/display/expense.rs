//! Expense display formatting
//!
//! Tab-separated table output for the `list` command, matching the layout of
//! the original tracker (a long description shifts the columns; that quirk is
//! part of the format).

use crate::models::Expense;

/// Format a single expense as a table row
///
/// The Date column shows `updated_at`, as the original tracker did.
pub fn format_expense_row(expense: &Expense) -> String {
    format!(
        "# {}\t\t{}\t\t{}\t\t${}",
        expense.id,
        expense.updated_at.format("%Y-%m-%d"),
        expense.description,
        expense.amount
    )
}

/// Format the expense list as a tab-separated table with a header
pub fn format_expense_table(expenses: &[Expense]) -> String {
    let mut output = String::from("# ID\tDate\t\t\tDescription\t\tAmount\n");
    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }
    output
}

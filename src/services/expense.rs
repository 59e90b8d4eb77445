//! Expense service
//!
//! Provides the record-management operations over the persisted ledger: add,
//! update, delete, list, and the renumbering pass that runs after every
//! command.
//!
//! Ids are display positions. The renumbering pass reassigns them to `1..=N`
//! in list order, so deleting a record shifts every later id down by one and
//! any id a caller remembered for those records is stale. This matches the
//! behavior of existing ledgers and is kept deliberately.

use chrono::{Local, NaiveDate};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::LedgerStore;

/// Service for expense record management
pub struct ExpenseService<'a> {
    store: &'a LedgerStore,
}

/// Validate the fields of a new expense
///
/// Only `add` calls this. `update` deliberately does not, matching the
/// original tracker; routing update through this function is the one-line
/// change if that asymmetry is ever dropped.
fn validate_new_expense(description: &str, amount: i64) -> ExpenseResult<()> {
    if amount <= 0 {
        return Err(ExpenseError::Validation(format!(
            "Amount {} must be greater than zero",
            amount
        )));
    }
    if description.trim().is_empty() {
        return Err(ExpenseError::Validation(
            "There needs to be a description".into(),
        ));
    }
    Ok(())
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Create a new expense and persist it
    ///
    /// The new record gets `counter + 1` as its id; the trailing renumber
    /// pass then normalizes all ids anyway.
    pub fn add(&self, description: &str, amount: i64) -> ExpenseResult<Expense> {
        validate_new_expense(description, amount)?;

        let mut ledger = self.store.load()?;

        let expense = Expense::new(ledger.counter + 1, description, amount, today());
        ledger.expenses.push(expense.clone());
        ledger.counter += 1;

        self.store.save(&ledger)?;
        Ok(expense)
    }

    /// Update the description and amount of an existing expense
    ///
    /// Overwrites `description`, `amount` and `updated_at` only; `id`,
    /// `created_at` and `month` are immutable after creation. No positivity
    /// or emptiness validation happens here (see `validate_new_expense`).
    pub fn update(&self, id: u64, description: &str, amount: i64) -> ExpenseResult<Expense> {
        let mut ledger = self.store.load()?;

        let expense = ledger
            .find_mut(id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        expense.apply_update(description, amount, today());
        let updated = expense.clone();

        self.store.save(&ledger)?;
        Ok(updated)
    }

    /// Delete the expense with the given id
    ///
    /// Returns whether a record was removed; an unknown id is a "not found"
    /// error and leaves the stored data untouched.
    pub fn delete(&self, id: u64) -> ExpenseResult<bool> {
        let mut ledger = self.store.load()?;

        let position = ledger
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id))?;
        ledger.expenses.remove(position);

        self.store.save(&ledger)?;
        Ok(true)
    }

    /// All expenses in stored order
    pub fn list(&self) -> ExpenseResult<Vec<Expense>> {
        Ok(self.store.load()?.expenses)
    }

    /// Reassign ids `1..=N` in list order and refresh the counter
    ///
    /// Runs unconditionally after every command, mutating or not; it is an
    /// idempotent pass, not a delta. A ledger with no records is left alone
    /// so that read-only commands on a fresh session never create the file.
    pub fn renumber(&self) -> ExpenseResult<()> {
        let mut ledger = self.store.load()?;

        if ledger.is_empty() {
            return Ok(());
        }

        ledger.renumber();
        self.store.save(&ledger)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

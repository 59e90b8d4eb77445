//! Expense model
//!
//! Represents a single tracked expense and the ledger document that holds the
//! full collection. Serde field names are pinned to the on-disk format of
//! existing `expenses.json` files (`Month` capitalized, `expense-counter`
//! kebab-case), so ledgers written by earlier versions of the tracker load
//! unchanged.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tracked expense
///
/// The `id` is a display position, not a stable handle: the renumbering pass
/// that runs after every command reassigns ids to match list order, so a
/// cached id can go stale as soon as an earlier record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Position-based identifier, reassigned by every renumbering pass
    pub id: u64,

    /// What the money was spent on (non-empty at creation)
    pub description: String,

    /// Whole currency units; positive at creation, unchecked on update
    pub amount: i64,

    /// Two-digit snapshot of the creation month. Write-only: summaries
    /// derive the month from `created_at` instead. Kept for file
    /// compatibility.
    #[serde(rename = "Month")]
    pub month: String,

    /// Creation date, never changed after creation
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,

    /// Date of the most recent update
    #[serde(rename = "updatedAt")]
    pub updated_at: NaiveDate,
}

impl Expense {
    /// Create a new expense stamped with the given date
    pub fn new(id: u64, description: impl Into<String>, amount: i64, today: NaiveDate) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            month: today.format("%m").to_string(),
            created_at: today,
            updated_at: today,
        }
    }

    /// Overwrite the mutable fields, leaving `id`, `created_at` and `month`
    /// untouched
    pub fn apply_update(&mut self, description: impl Into<String>, amount: i64, today: NaiveDate) {
        self.description = description.into();
        self.amount = amount;
        self.updated_at = today;
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ${}",
            self.updated_at.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// The persisted collection: every expense plus the running counter
///
/// `counter` is not a monotonic id source. After every command the renumber
/// pass sets it to the current number of records, so it always mirrors
/// `expenses.len()` at rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Running record count, recomputed after each command
    #[serde(rename = "expense-counter", default)]
    pub counter: u64,

    /// All expenses in insertion order
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Ledger {
    /// Check whether the ledger holds no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Find an expense by its current id
    pub fn find(&self, id: u64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by its current id, mutably
    pub fn find_mut(&mut self, id: u64) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|e| e.id == id)
    }

    /// Reassign ids sequentially in list order and refresh the counter
    pub fn renumber(&mut self) {
        for (index, expense) in self.expenses.iter_mut().enumerate() {
            expense.id = (index + 1) as u64;
        }
        self.counter = self.expenses.len() as u64;
    }
}

//! Core data models
//!
//! Contains the expense record and the ledger document it is persisted in.

pub mod expense;

pub use expense::{Expense, Ledger};

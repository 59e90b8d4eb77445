//! Custom error types for the expense shell
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for expense shell operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Validation errors (bad amount, empty description, month out of range)
    #[error("Validation error: {0}")]
    Validation(String),

    /// No expense carries the requested id
    #[error("Expense {id} does not exist")]
    NotFound { id: u64 },

    /// Ledger file present but unreadable or corrupt
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ExpenseError {
    /// Create a "not found" error for an expense id
    pub fn expense_not_found(id: u64) -> Self {
        Self::NotFound { id }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense shell operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

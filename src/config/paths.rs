//! Path management for the expense shell
//!
//! Resolves the location of the ledger file.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_SHELL_FILE` environment variable (if set)
//! 2. `expenses.json` in the current working directory (compatible with
//!    ledgers written by earlier versions of the tracker)

use std::path::{Path, PathBuf};

/// Default ledger file name, relative to the working directory
pub const DEFAULT_LEDGER_FILE: &str = "expenses.json";

/// Environment variable that overrides the ledger file location
pub const LEDGER_FILE_ENV: &str = "EXPENSE_SHELL_FILE";

/// Resolves and holds the ledger file path
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    ledger_file: PathBuf,
}

impl ExpensePaths {
    /// Create a new ExpensePaths instance
    ///
    /// Path resolution:
    /// 1. `EXPENSE_SHELL_FILE` env var (explicit override)
    /// 2. `expenses.json` in the current directory
    pub fn new() -> Self {
        let ledger_file = match std::env::var(LEDGER_FILE_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => PathBuf::from(DEFAULT_LEDGER_FILE),
        };

        Self { ledger_file }
    }

    /// Create ExpensePaths with an explicit ledger file (useful for testing)
    pub fn with_file(ledger_file: impl Into<PathBuf>) -> Self {
        Self {
            ledger_file: ledger_file.into(),
        }
    }

    /// Get the ledger file path
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new()
    }
}

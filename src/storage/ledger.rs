//! Ledger store
//!
//! Loads and saves the full expense collection as one JSON document. Every
//! command runs a complete read-modify-write cycle through this store; there
//! is no in-memory cache, so the file on disk is always the source of truth
//! between commands.

use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Persistence for the single ledger document
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store over the given ledger file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the ledger from disk
    ///
    /// A missing file loads as an empty ledger. A file that exists but cannot
    /// be read or parsed is a storage error.
    pub fn load(&self) -> ExpenseResult<Ledger> {
        read_json(&self.path)
    }

    /// Save the ledger, fully replacing the previous document
    pub fn save(&self, ledger: &Ledger) -> ExpenseResult<()> {
        write_json_atomic(&self.path, ledger)
    }

    /// Check whether the ledger file exists on disk
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

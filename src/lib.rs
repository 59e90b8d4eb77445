//! Expense shell - interactive expense tracking over a single JSON ledger
//!
//! An interactive command shell for tracking personal expenses. Commands are
//! entered one per line at a prompt; every command runs a full
//! read-modify-write cycle over one JSON document and is followed by a
//! renumbering pass that keeps ids contiguous with list order.
//!
//! # Architecture
//!
//! - `config`: ledger file location
//! - `error`: custom error types
//! - `models`: the expense record and the ledger document
//! - `storage`: JSON file storage with atomic writes
//! - `services`: record management and summary aggregation
//! - `display`: terminal output formatting
//! - `cli`: command parsing and dispatch
//! - `shell`: the interactive loop

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};

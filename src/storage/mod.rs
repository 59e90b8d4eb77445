//! Storage layer
//!
//! JSON file storage with atomic writes. The ledger store is the sole I/O
//! boundary of the application.

pub mod file_io;
pub mod ledger;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerStore;

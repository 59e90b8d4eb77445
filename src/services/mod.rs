//! Business logic layer
//!
//! Services operate on the ledger through the storage layer. Each operation
//! is one full read-modify-write cycle; there is exactly one writer and no
//! concurrent readers by design.

pub mod expense;
pub mod summary;

pub use expense::ExpenseService;
pub use summary::{month_name, total_all, total_for_month};

//! Configuration for the expense shell

pub mod paths;

pub use paths::ExpensePaths;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use expense_shell::config::ExpensePaths;
use expense_shell::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Interactive expense-tracking shell backed by a single JSON ledger"
)]
struct Cli {
    /// Ledger file to use (defaults to $EXPENSE_SHELL_FILE, then ./expenses.json)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.file {
        Some(file) => ExpensePaths::with_file(file),
        None => ExpensePaths::new(),
    };

    let store = LedgerStore::new(paths.ledger_file());
    expense_shell::shell::run(&store)?;

    Ok(())
}

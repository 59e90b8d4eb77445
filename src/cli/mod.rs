//! Shell command surface
//!
//! Defines the commands accepted at the interactive prompt and dispatches
//! them to the service layer. Each input line is tokenized with shlex and
//! parsed with a multicall clap parser, so the first word of the line is the
//! command name and `help` comes from clap for free.

use clap::{Parser, Subcommand};

use crate::display::{format_expense_table, format_month_total, format_total};
use crate::error::ExpenseResult;
use crate::services::{month_name, total_all, total_for_month, ExpenseService};
use crate::storage::LedgerStore;

/// One parsed shell invocation
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct ShellCommand {
    #[command(subcommand)]
    pub command: Command,
}

/// Commands accepted at the prompt
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new expense
    Add {
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount of the expense
        #[arg(long)]
        amount: i64,
    },
    /// Update the description and amount of an expense
    Update {
        /// Id of the expense
        #[arg(long)]
        id: u64,
        /// Description of the expense
        #[arg(long)]
        description: String,
        /// Amount of the expense
        #[arg(long)]
        amount: i64,
    },
    /// Delete an expense
    Delete {
        /// Id of the expense
        #[arg(long)]
        id: u64,
    },
    /// List all expenses
    List,
    /// Show the total of all expenses, optionally for one month
    Summary {
        /// Month of the expenses (1-12)
        #[arg(long)]
        month: Option<u32>,
    },
    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// What the shell loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Tokenize and parse one input line
///
/// Returns `None` for blank lines (and lines shlex cannot tokenize, such as
/// an unclosed quote, which clap would otherwise misreport).
pub fn parse_line(line: &str) -> Option<Result<ShellCommand, clap::Error>> {
    let tokens = shlex::split(line)?;
    if tokens.is_empty() {
        return None;
    }
    Some(ShellCommand::try_parse_from(tokens))
}

/// Execute one command against the store, printing its outcome
pub fn dispatch(store: &LedgerStore, command: Command) -> ExpenseResult<Outcome> {
    let service = ExpenseService::new(store);

    match command {
        Command::Add {
            description,
            amount,
        } => {
            let expense = service.add(&description, amount)?;
            println!("Expense added successfully: {}", expense.id);
        }

        Command::Update {
            id,
            description,
            amount,
        } => {
            let expense = service.update(id, &description, amount)?;
            println!("Expense updated successfully: {}", expense.id);
        }

        Command::Delete { id } => {
            if service.delete(id)? {
                println!("Expense deleted successfully: {}", id);
            }
        }

        Command::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_table(&expenses));
        }

        Command::Summary { month } => {
            let expenses = service.list()?;
            match month {
                None => println!("{}", format_total(total_all(&expenses))),
                Some(month) => {
                    let total = total_for_month(&expenses, month)?;
                    println!("{}", format_month_total(month_name(month)?, total));
                }
            }
        }

        Command::Quit => return Ok(Outcome::Quit),
    }

    Ok(Outcome::Continue)
}

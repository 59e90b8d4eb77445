//! Interactive shell loop
//!
//! Reads one command per line, executes it, and runs the renumbering pass
//! after every command, read-only or not. No failure inside a command ends
//! the session; errors are printed and the prompt comes back.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::cli::{dispatch, parse_line, Outcome};
use crate::error::{ExpenseError, ExpenseResult};
use crate::services::ExpenseService;
use crate::storage::LedgerStore;

/// Prompt shown before every command
pub const PROMPT: &str = "ExpenseTracker> ";

const INTRO: &str = "Welcome to the expense tracker! Type help to list commands.";

/// Run the interactive session until `quit`, `exit` or end of input
pub fn run(store: &LedgerStore) -> ExpenseResult<()> {
    let mut editor = DefaultEditor::new().map_err(readline_error)?;
    println!("{}", INTRO);

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(readline_error(e)),
        };

        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        let outcome = execute_line(store, &line);

        // The renumbering pass runs after every command, even read-only or
        // failed ones. It is idempotent, so repeating it is harmless.
        if let Err(e) = ExpenseService::new(store).renumber() {
            eprintln!("{}", e);
        }

        if outcome == Outcome::Quit {
            break;
        }
    }

    Ok(())
}

/// Parse and execute a single input line, reporting any failure
fn execute_line(store: &LedgerStore, line: &str) -> Outcome {
    let parsed = match parse_line(line) {
        Some(parsed) => parsed,
        None => return Outcome::Continue,
    };

    match parsed {
        Ok(shell_command) => match dispatch(store, shell_command.command) {
            Ok(outcome) => outcome,
            Err(e) => {
                // Not-found reads as a plain "does not exist" message; the
                // rest keep their error prefix.
                println!("{}", e);
                Outcome::Continue
            }
        },
        Err(e) => {
            // clap's error text doubles as usage guidance (and renders the
            // help command's output).
            let _ = e.print();
            Outcome::Continue
        }
    }
}

fn readline_error(e: ReadlineError) -> ExpenseError {
    ExpenseError::Io(format!("Readline error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, LedgerStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = LedgerStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_execute_line_add_then_quit() {
        let (_temp_dir, store) = create_test_store();

        let outcome = execute_line(&store, "add --description Coffee --amount 5");
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(store.load().unwrap().expenses.len(), 1);

        assert_eq!(execute_line(&store, "quit"), Outcome::Quit);
    }

    #[test]
    fn test_malformed_line_does_not_stop_session() {
        let (_temp_dir, store) = create_test_store();

        assert_eq!(execute_line(&store, "add --amount"), Outcome::Continue);
        assert_eq!(execute_line(&store, "no-such-command"), Outcome::Continue);
        // unclosed quote
        assert_eq!(
            execute_line(&store, "add --description \"oops"),
            Outcome::Continue
        );
        assert!(!store.exists());
    }

    #[test]
    fn test_failed_command_does_not_stop_session() {
        let (_temp_dir, store) = create_test_store();

        // validation failure, then not-found
        assert_eq!(
            execute_line(&store, "add --description Coffee --amount 0"),
            Outcome::Continue
        );
        assert_eq!(execute_line(&store, "delete --id 9"), Outcome::Continue);
    }
}

//! Line-by-line command loop

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

use super::output::Output;
use crate::logic::{CommandResult, Logic, LogicError};
use crate::model::Model;
use crate::storage::Storage;

const PROMPT: &str = "> ";

/// Reads commands from stdin until `exit` or end of input
///
/// Errors are printed and the session goes on. The prompt and greeting
/// only appear when stdin is a terminal.
pub fn run<S: Storage>(logic: &mut Logic<S>, output: &Output) -> Result<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        output.message(&format!(
            "{}\nType `help` to see what I can do.",
            logic.model().pet()
        ));
    }

    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{}", PROMPT);
            io::stdout().flush().context("Failed to flush stdout")?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = logic.execute(&line);
        if report(&outcome, logic.model(), output) {
            break;
        }
    }

    Ok(())
}

/// Runs each line in order, stopping at the first failure or `exit`
///
/// Returns false if a line failed.
pub fn run_lines<S: Storage>(logic: &mut Logic<S>, output: &Output, lines: &[String]) -> bool {
    for line in lines {
        let outcome = logic.execute(line);
        let exit = report(&outcome, logic.model(), output);
        if outcome.is_err() {
            return false;
        }
        if exit {
            break;
        }
    }
    true
}

/// Prints the outcome of one line and returns whether it asked to exit
///
/// A failed save still shows what the command did, reminders included.
fn report(outcome: &Result<CommandResult, LogicError>, model: &Model, output: &Output) -> bool {
    match outcome {
        Ok(result) => {
            output.result(result, model);
            result.exit
        }
        Err(err) => {
            if let Some(result) = err.result() {
                output.result(result, model);
            }
            output.error(&err.to_string());
            err.result().is_some_and(|result| result.exit)
        }
    }
}

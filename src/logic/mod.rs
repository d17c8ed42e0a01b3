//! # Logic
//!
//! Runs one line of user input end to end: parse it into a [`Command`],
//! execute it against the [`Model`], collect any reminders it raised and
//! persist the new state through a [`Storage`].

pub mod commands;
pub mod parser;

use thiserror::Error;
use tracing::{info, warn};

use crate::model::Model;
use crate::storage::Storage;

pub use commands::{Command, CommandError, CommandResult, Execute};
pub use parser::{parse_command, ParseError};

#[derive(Debug, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command ran but its new state could not be written
    ///
    /// Carries the command's result so its feedback and reminders still
    /// reach the user.
    #[error("Could not save data to file: {error:#}")]
    Storage {
        error: anyhow::Error,
        result: Box<CommandResult>,
    },
}

impl LogicError {
    /// Result of a command that ran before the failure, if any
    pub fn result(&self) -> Option<&CommandResult> {
        match self {
            LogicError::Storage { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Command engine bound to a storage backend
pub struct Logic<S> {
    model: Model,
    storage: S,
}

impl<S: Storage> Logic<S> {
    pub fn new(model: Model, storage: S) -> Self {
        Self { model, storage }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Parses and executes one line, then saves
    ///
    /// A line that fails to parse or execute leaves the model untouched and
    /// saves nothing. A failed save keeps the in-memory change and hands
    /// back the command's result inside the error.
    pub fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        info!("----------------[USER COMMAND][{}]", line);

        let command = parse_command(line)?;
        let mut result = command.execute(&mut self.model)?;

        result.reminders = self.model.take_reminder_events();
        for reminder in &result.reminders {
            info!("Reminder set: {}", reminder);
        }

        if let Err(err) = self.storage.save_model(&self.model) {
            warn!("Failed to save after {}: {:#}", command.word(), err);
            return Err(LogicError::Storage {
                error: err,
                result: Box::new(result),
            });
        }

        Ok(result)
    }
}

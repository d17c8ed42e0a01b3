//! Executable commands
//!
//! Each user action is a variant of [`Command`] holding already-validated
//! arguments. Executing a command touches state only through the
//! [`Model`] and either succeeds with a [`CommandResult`] or fails with a
//! [`CommandError`], in which case the model is left exactly as it was.

mod add;
mod delete;
mod done;
mod edit;
mod find;
mod general;
mod pet;
mod pomodoro;
mod remark;

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::{Index, ReminderEvent, Task, TaskListError};
use crate::model::Model;

pub use add::AddCommand;
pub use delete::DeleteCommand;
pub use done::DoneCommand;
pub use edit::{EditCommand, EditTaskDescriptor};
pub use find::FindCommand;
pub use pet::PetCommand;
pub use pomodoro::PomodoroCommand;
pub use remark::RemarkCommand;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("This task already exists in the task list")]
    DuplicateTask,

    #[error("The task index provided is invalid")]
    InvalidIndex(Index),

    #[error("This task has already been marked as done")]
    AlreadyDone(Index),

    #[error("Index: {index}, Remark: {remark}")]
    NotImplemented { index: usize, remark: String },

    #[error("Task not found in the task list")]
    TaskNotFound,
}

impl From<TaskListError> for CommandError {
    fn from(err: TaskListError) -> Self {
        match err {
            TaskListError::DuplicateTask => CommandError::DuplicateTask,
            TaskListError::TaskNotFound => CommandError::TaskNotFound,
        }
    }
}

/// Outcome of a successful command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Message for the user
    pub feedback: String,

    /// The user asked for the command reference
    pub show_help: bool,

    /// The user asked to end the session
    pub exit: bool,

    /// The command changed which tasks are shown and the view should be printed
    pub show_tasks: bool,

    /// Reminders raised while executing
    pub reminders: Vec<ReminderEvent>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    pub fn with_tasks(mut self) -> Self {
        self.show_tasks = true;
        self
    }
}

/// Something that can run against the model
pub trait Execute {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Delete(DeleteCommand),
    Done(DoneCommand),
    Edit(EditCommand),
    Find(FindCommand),
    Remark(RemarkCommand),
    Pomodoro(PomodoroCommand),
    Pet(PetCommand),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    /// The word that invokes this command
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::Done(_) => done::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Find(_) => find::COMMAND_WORD,
            Command::Remark(_) => remark::COMMAND_WORD,
            Command::Pomodoro(_) => pomodoro::COMMAND_WORD,
            Command::Pet(_) => pet::COMMAND_WORD,
            Command::List => general::LIST_WORD,
            Command::Clear => general::CLEAR_WORD,
            Command::Help => general::HELP_WORD,
            Command::Exit => general::EXIT_WORD,
        }
    }
}

impl Execute for Command {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Add(cmd) => cmd.execute(model),
            Command::Delete(cmd) => cmd.execute(model),
            Command::Done(cmd) => cmd.execute(model),
            Command::Edit(cmd) => cmd.execute(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::Remark(cmd) => cmd.execute(model),
            Command::Pomodoro(cmd) => cmd.execute(model),
            Command::Pet(cmd) => cmd.execute(model),
            Command::List => Ok(general::list(model)),
            Command::Clear => Ok(general::clear(model)),
            Command::Help => Ok(general::help()),
            Command::Exit => Ok(general::exit()),
        }
    }
}

/// Usage of every command, in the order shown by `help`
pub fn usages() -> [&'static str; 12] {
    [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        done::USAGE,
        find::USAGE,
        general::LIST_USAGE,
        general::CLEAR_USAGE,
        pomodoro::USAGE,
        pet::USAGE,
        remark::USAGE,
        general::HELP_USAGE,
        general::EXIT_USAGE,
    ]
}

pub(crate) use add::USAGE as ADD_USAGE;
pub(crate) use delete::USAGE as DELETE_USAGE;
pub(crate) use done::USAGE as DONE_USAGE;
pub(crate) use edit::USAGE as EDIT_USAGE;
pub(crate) use find::USAGE as FIND_USAGE;
pub(crate) use general::HELP_USAGE;
pub(crate) use pet::USAGE as PET_USAGE;
pub(crate) use pomodoro::USAGE as POMODORO_USAGE;
pub(crate) use remark::USAGE as REMARK_USAGE;

/// Looks up every target in the filtered view before anything is changed
///
/// Repeated indices resolve once, keeping the order of first appearance.
fn resolve_targets(model: &Model, targets: &[Index]) -> Result<Vec<(Index, Task)>, CommandError> {
    let view = model.filtered_tasks();
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(targets.len());

    for &index in targets {
        if !seen.insert(index) {
            continue;
        }
        let task = view.get(index).ok_or(CommandError::InvalidIndex(index))?;
        resolved.push((index, task.clone()));
    }

    Ok(resolved)
}

/// Formats the success message listing affected tasks
fn list_message<'a>(header: &str, tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut message = header.to_string();
    for task in tasks {
        message.push('\n');
        message.push_str(&task.to_string());
    }
    message
}

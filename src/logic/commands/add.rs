//! Adds a task to the end of the list

use tracing::debug;

use super::{CommandError, CommandResult, Execute};
use crate::domain::Task;
use crate::model::Model;

pub const COMMAND_WORD: &str = "add";

pub const USAGE: &str = "add: Adds a task to the task list.\n\
Parameters: n/NAME p/PRIORITY des/DESCRIPTION [t/TAG]... [r/DD/MM/YY@HH:mm]\n\
Example: add n/Homework 1 p/1 des/Pages 10 - 12 t/MA1521 r/04/11/20@10:30";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    task: Task,
}

impl AddCommand {
    pub fn new(task: Task) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }
}

impl Execute for AddCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if model.has_task(&self.task) {
            return Err(CommandError::DuplicateTask);
        }

        model.add_task(self.task.clone())?;
        debug!(task = %self.task.name(), "Added task");

        Ok(CommandResult::new(format!("New task added: {}", self.task)))
    }
}

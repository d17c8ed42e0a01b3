//! Binds a task to the pomodoro session

use super::{CommandError, CommandResult, Execute};
use crate::domain::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "pomo";

pub const USAGE: &str = "pomo: Sets the task identified by the index number used in the displayed task list \
as the task of the pomodoro session.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: pomo 1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomodoroCommand {
    index: Index,
}

impl PomodoroCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn index(&self) -> Index {
        self.index
    }
}

impl Execute for PomodoroCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let task = model
            .filtered_tasks()
            .get(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex(self.index))?;

        let message = format!("Pomodoro task set: {}", task);
        model.set_pomodoro_task(task);

        Ok(CommandResult::new(message))
    }
}

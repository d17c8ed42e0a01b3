//! Deletes tasks by their position in the displayed list

use tracing::debug;

use super::{list_message, resolve_targets, CommandError, CommandResult, Execute};
use crate::domain::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const USAGE: &str = "delete: Deletes the tasks identified by the index numbers used in the displayed task list.\n\
Parameters: INDEX[,INDEX]... (must be positive integers)\n\
Example: delete 1,3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    targets: Vec<Index>,
}

impl DeleteCommand {
    pub fn new(targets: Vec<Index>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[Index] {
        &self.targets
    }
}

impl Execute for DeleteCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let resolved = resolve_targets(model, &self.targets)?;

        for (index, task) in &resolved {
            model.delete_task(task)?;
            debug!(%index, task = %task.name(), "Deleted task");
        }

        Ok(CommandResult::new(list_message(
            "Deleted Task(s): ",
            resolved.iter().map(|(_, task)| task),
        )))
    }
}

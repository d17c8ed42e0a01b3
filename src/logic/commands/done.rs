//! Marks tasks as done and rewards the pet

use tracing::debug;

use super::{list_message, resolve_targets, CommandError, CommandResult, Execute};
use crate::domain::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "done";

pub const USAGE: &str = "done: Marks the tasks identified by the index numbers used in the displayed task list as done.\n\
Parameters: INDEX[,INDEX]... (must be positive integers)\n\
Example: done 1,2";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneCommand {
    targets: Vec<Index>,
}

impl DoneCommand {
    pub fn new(targets: Vec<Index>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[Index] {
        &self.targets
    }
}

impl Execute for DoneCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let resolved = resolve_targets(model, &self.targets)?;

        if let Some((index, _)) = resolved.iter().find(|(_, task)| task.is_done()) {
            return Err(CommandError::AlreadyDone(*index));
        }

        let mut completed = Vec::with_capacity(resolved.len());
        for (index, task) in resolved {
            let done = task.mark_done();
            model.set_task(&task, done.clone())?;
            model.increment_exp();
            debug!(%index, task = %done.name(), exp = model.pet().exp(), "Marked task done");
            completed.push(done);
        }

        Ok(CommandResult::new(list_message("Done Task(s): ", &completed)))
    }
}

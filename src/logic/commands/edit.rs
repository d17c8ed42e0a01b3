//! Replaces selected fields of a task

use std::collections::BTreeSet;

use tracing::debug;

use super::{CommandError, CommandResult, Execute};
use crate::domain::{Description, Index, Name, Priority, Reminder, Tag, Task};
use crate::model::{Model, TaskPredicate};

pub const COMMAND_WORD: &str = "edit";

pub const USAGE: &str = "edit: Edits the details of the task identified by the index number used in the displayed task list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PRIORITY] [des/DESCRIPTION] [t/TAG]... [r/DD/MM/YY@HH:mm]\n\
Example: edit 1 p/2 des/Pages 10 - 14";

/// Fields to replace; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTaskDescriptor {
    pub name: Option<Name>,
    pub priority: Option<Priority>,
    pub description: Option<Description>,
    pub tags: Option<BTreeSet<Tag>>,
    /// `Some(None)` removes the reminder
    pub reminder: Option<Option<Reminder>>,
}

impl EditTaskDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.priority.is_some()
            || self.description.is_some()
            || self.tags.is_some()
            || self.reminder.is_some()
    }

    /// Builds the edited copy of `task`
    pub fn apply(&self, task: &Task) -> Task {
        let edited = Task::new(
            self.name.clone().unwrap_or_else(|| task.name().clone()),
            self.priority.unwrap_or_else(|| task.priority()),
            self.description
                .clone()
                .unwrap_or_else(|| task.description().clone()),
            self.tags.clone().unwrap_or_else(|| task.tags().clone()),
        );

        edited
            .with_done(task.done())
            .with_reminder(self.reminder.unwrap_or_else(|| task.reminder()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditTaskDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditTaskDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditTaskDescriptor {
        &self.descriptor
    }
}

impl Execute for EditCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let target = model
            .filtered_tasks()
            .get(self.index)
            .cloned()
            .ok_or(CommandError::InvalidIndex(self.index))?;

        let edited = self.descriptor.apply(&target);
        if !target.is_same_task(&edited) && model.has_task(&edited) {
            return Err(CommandError::DuplicateTask);
        }

        model.set_task(&target, edited.clone())?;
        model.update_filtered_task_list(TaskPredicate::ShowAll);
        debug!(index = %self.index, task = %edited.name(), "Edited task");

        Ok(CommandResult::new(format!("Edited Task: {}", edited)))
    }
}

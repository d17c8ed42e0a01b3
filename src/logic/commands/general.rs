//! Commands without arguments

use super::CommandResult;
use crate::domain::TaskList;
use crate::model::{Model, TaskPredicate};

pub const LIST_WORD: &str = "list";
pub const CLEAR_WORD: &str = "clear";
pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const LIST_USAGE: &str = "list: Lists all tasks.\nExample: list";
pub const CLEAR_USAGE: &str = "clear: Removes every task from the task list.\nExample: clear";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";

pub fn list(model: &mut Model) -> CommandResult {
    model.update_filtered_task_list(TaskPredicate::ShowAll);
    CommandResult::new("Listed all tasks").with_tasks()
}

pub fn clear(model: &mut Model) -> CommandResult {
    model.set_task_list(TaskList::new());
    CommandResult::new("Task list has been cleared!")
}

pub fn help() -> CommandResult {
    CommandResult {
        show_help: true,
        ..CommandResult::new("Showing help.")
    }
}

pub fn exit() -> CommandResult {
    CommandResult {
        exit: true,
        ..CommandResult::new("Exiting task list as requested ...")
    }
}

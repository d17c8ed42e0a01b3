//! Filters the displayed list by name keywords

use super::{CommandError, CommandResult, Execute};
use crate::model::{Model, TaskPredicate};

pub const COMMAND_WORD: &str = "find";

pub const USAGE: &str = "find: Finds all tasks whose names contain any of the specified keywords (case-insensitive) \
and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find homework lab";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Execute for FindCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_task_list(TaskPredicate::NameContainsKeywords(self.keywords.clone()));
        let count = model.filtered_tasks().len();

        Ok(CommandResult::new(format!("{} tasks listed!", count)).with_tasks())
    }
}

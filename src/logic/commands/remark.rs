//! Remarks on tasks
//!
//! Storing remarks is not supported yet: executing always fails and echoes
//! what would have been stored.

use super::{CommandError, CommandResult, Execute};
use crate::domain::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "remark";

pub const USAGE: &str = "remark: Edits the remark of the task identified by the index number used in the displayed task list. \
Existing remark will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
Example: remark 1 r/Likes to swim.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: String,
}

impl RemarkCommand {
    pub fn new(index: Index, remark: impl Into<String>) -> Self {
        Self {
            index,
            remark: remark.into(),
        }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn remark(&self) -> &str {
        &self.remark
    }
}

impl Execute for RemarkCommand {
    fn execute(&self, _model: &mut Model) -> Result<CommandResult, CommandError> {
        Err(CommandError::NotImplemented {
            index: self.index.one_based(),
            remark: self.remark.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::test_support::typical_model;

    #[test]
    fn always_fails_with_arguments() {
        let mut model = typical_model();
        let before = model.clone();
        let command = RemarkCommand::new(Index::from_one_based(2).unwrap(), "Likes to swim.");

        let err = command.execute(&mut model).unwrap_err();

        assert_eq!(err.to_string(), "Index: 2, Remark: Likes to swim.");
        assert_eq!(model, before);
    }
}

//! Shows or renames the pet

use super::{CommandError, CommandResult, Execute};
use crate::domain::Name;
use crate::model::Model;

pub const COMMAND_WORD: &str = "pet";

pub const USAGE: &str = "pet: Shows the pet, or renames it when a name is given.\n\
Parameters: [n/NAME]\n\
Example: pet n/Mochi";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PetCommand {
    Show,
    Rename(Name),
}

impl Execute for PetCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if let PetCommand::Rename(name) = self {
            model.set_pet_name(name.clone());
        }
        Ok(CommandResult::new(model.pet().to_string()))
    }
}

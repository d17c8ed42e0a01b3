//! One parser per command word

use tracing::debug;

use super::tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_DESCRIPTION, PREFIX_NAME, PREFIX_PRIORITY,
    PREFIX_REMARK, PREFIX_REMINDER, PREFIX_TAG,
};
use super::util::{
    parse_description, parse_index, parse_indices, parse_name, parse_priority, parse_reminder,
    parse_tags,
};
use super::ParseError;
use crate::domain::{Index, Task};
use crate::logic::commands::{
    AddCommand, Command, DeleteCommand, DoneCommand, EditCommand, EditTaskDescriptor, FindCommand,
    PetCommand, PomodoroCommand, RemarkCommand, ADD_USAGE, DELETE_USAGE, DONE_USAGE, EDIT_USAGE,
    FIND_USAGE, PET_USAGE, POMODORO_USAGE, REMARK_USAGE,
};

/// Turns the argument tail of one command word into a [`Command`]
pub trait CommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError>;
}

fn invalid(usage: &'static str) -> ParseError {
    ParseError::InvalidFormat { usage }
}

/// Index arguments report the command's usage rather than the index rule
fn index_or_usage(value: &str, usage: &'static str) -> Result<Index, ParseError> {
    parse_index(value).map_err(|err| {
        debug!(%err, value, "Rejected index");
        invalid(usage)
    })
}

fn indices_or_usage(value: &str, usage: &'static str) -> Result<Vec<Index>, ParseError> {
    if value.trim().is_empty() {
        return Err(invalid(usage));
    }
    parse_indices(value).map_err(|err| {
        debug!(%err, value, "Rejected index list");
        invalid(usage)
    })
}

/// `add n/NAME p/PRIORITY des/DESCRIPTION [t/TAG]... [r/REMINDER]`
pub struct AddCommandParser;

impl CommandParser for AddCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PRIORITY,
                PREFIX_DESCRIPTION,
                PREFIX_TAG,
                PREFIX_REMINDER,
            ],
        );

        if !map.preamble().is_empty()
            || !map.contains_all(&[PREFIX_NAME, PREFIX_PRIORITY, PREFIX_DESCRIPTION])
        {
            return Err(invalid(ADD_USAGE));
        }

        let name = parse_name(required(&map, PREFIX_NAME, ADD_USAGE)?)?;
        let priority = parse_priority(required(&map, PREFIX_PRIORITY, ADD_USAGE)?)?;
        let description = parse_description(required(&map, PREFIX_DESCRIPTION, ADD_USAGE)?)?;
        let tags = parse_tags(map.all_values(PREFIX_TAG))?;
        let reminder = map.value(PREFIX_REMINDER).map(parse_reminder).transpose()?;

        let task = Task::new(name, priority, description, tags).with_reminder(reminder);
        Ok(Command::Add(AddCommand::new(task)))
    }
}

fn required<'a>(
    map: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> Result<&'a str, ParseError> {
    map.value(prefix).ok_or(invalid(usage))
}

/// `delete INDEX[,INDEX]...`
pub struct DeleteCommandParser;

impl CommandParser for DeleteCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let targets = indices_or_usage(args, DELETE_USAGE)?;
        Ok(Command::Delete(DeleteCommand::new(targets)))
    }
}

/// `done INDEX[,INDEX]...`
pub struct DoneCommandParser;

impl CommandParser for DoneCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let targets = indices_or_usage(args, DONE_USAGE)?;
        Ok(Command::Done(DoneCommand::new(targets)))
    }
}

/// `edit INDEX [n/NAME] [p/PRIORITY] [des/DESCRIPTION] [t/TAG]... [r/REMINDER]`
pub struct EditCommandParser;

impl CommandParser for EditCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize(
            args,
            &[
                PREFIX_NAME,
                PREFIX_PRIORITY,
                PREFIX_DESCRIPTION,
                PREFIX_TAG,
                PREFIX_REMINDER,
            ],
        );

        let index = index_or_usage(map.preamble(), EDIT_USAGE)?;

        let mut descriptor = EditTaskDescriptor {
            name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
            priority: map.value(PREFIX_PRIORITY).map(parse_priority).transpose()?,
            description: map
                .value(PREFIX_DESCRIPTION)
                .map(parse_description)
                .transpose()?,
            ..EditTaskDescriptor::default()
        };

        if map.contains(PREFIX_TAG) {
            let values = map.all_values(PREFIX_TAG);
            // A lone empty `t/` clears the tags
            descriptor.tags = if values.len() == 1 && values[0].is_empty() {
                Some(Default::default())
            } else {
                Some(parse_tags(values)?)
            };
        }

        if let Some(value) = map.value(PREFIX_REMINDER) {
            descriptor.reminder = if value.is_empty() {
                Some(None)
            } else {
                Some(Some(parse_reminder(value)?))
            };
        }

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NothingToEdit);
        }

        Ok(Command::Edit(EditCommand::new(index, descriptor)))
    }
}

/// `find KEYWORD [MORE_KEYWORDS]...`
pub struct FindCommandParser;

impl CommandParser for FindCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(invalid(FIND_USAGE));
        }
        Ok(Command::Find(FindCommand::new(keywords)))
    }
}

/// `remark INDEX [r/REMARK]`
pub struct RemarkCommandParser;

impl CommandParser for RemarkCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let map = tokenize(args, &[PREFIX_REMARK]);
        let index = index_or_usage(map.preamble(), REMARK_USAGE)?;
        let remark = map.value(PREFIX_REMARK).unwrap_or_default();

        Ok(Command::Remark(RemarkCommand::new(index, remark)))
    }
}

/// `pomo INDEX`
pub struct PomodoroCommandParser;

impl CommandParser for PomodoroCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        let index = index_or_usage(args, POMODORO_USAGE)?;
        Ok(Command::Pomodoro(PomodoroCommand::new(index)))
    }
}

/// `pet [n/NAME]`
pub struct PetCommandParser;

impl CommandParser for PetCommandParser {
    fn parse(&self, args: &str) -> Result<Command, ParseError> {
        if args.trim().is_empty() {
            return Ok(Command::Pet(PetCommand::Show));
        }

        let map = tokenize(args, &[PREFIX_NAME]);
        if !map.preamble().is_empty() {
            return Err(invalid(PET_USAGE));
        }
        let name = parse_name(required(&map, PREFIX_NAME, PET_USAGE)?)?;

        Ok(Command::Pet(PetCommand::Rename(name)))
    }
}

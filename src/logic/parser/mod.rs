//! Turns a raw input line into a [`Command`]
//!
//! The first whitespace-separated word picks the command; the rest of the
//! line goes to that command's [`CommandParser`]. Nothing is executed here,
//! so a line that fails to parse never touches the model.

mod parsers;
mod tokenizer;
mod util;

use thiserror::Error;

use crate::domain::ValidationError;
use crate::logic::commands::{Command, HELP_USAGE};

pub use parsers::{
    AddCommandParser, CommandParser, DeleteCommandParser, DoneCommandParser, EditCommandParser,
    FindCommandParser, PetCommandParser, PomodoroCommandParser, RemarkCommandParser,
};
pub use tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_DESCRIPTION, PREFIX_NAME, PREFIX_PRIORITY,
    PREFIX_REMARK, PREFIX_REMINDER, PREFIX_TAG,
};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Unknown command")]
    UnknownCommand(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,
}

/// Parses one line of user input
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, args) = match line.find(char::is_whitespace) {
        Some(split) => line.split_at(split),
        None => (line, ""),
    };

    match word {
        "" => Err(ParseError::InvalidFormat { usage: HELP_USAGE }),
        "add" => AddCommandParser.parse(args),
        "delete" => DeleteCommandParser.parse(args),
        "done" => DoneCommandParser.parse(args),
        "edit" => EditCommandParser.parse(args),
        "find" => FindCommandParser.parse(args),
        "remark" => RemarkCommandParser.parse(args),
        "pomo" => PomodoroCommandParser.parse(args),
        "pet" => PetCommandParser.parse(args),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, Name, Priority, Task};
    use crate::logic::commands::AddCommand;
    use proptest::prelude::*;

    #[test]
    fn add_round_trip() {
        let command = parse_command("add n/Homework 1 p/1 des/Pages 10 - 12").unwrap();

        let expected = Task::new(
            Name::new("Homework 1").unwrap(),
            Priority::High,
            Description::new("Pages 10 - 12").unwrap(),
            [],
        );
        assert_eq!(command, Command::Add(AddCommand::new(expected)));
    }

    #[test]
    fn word_matches_command() {
        for line in [
            "add n/A p/1 des/x",
            "delete 1",
            "done 1",
            "edit 1 n/B",
            "find a",
            "remark 1",
            "pomo 1",
            "pet",
            "list",
            "clear",
            "help",
            "exit",
        ] {
            let command = parse_command(line).unwrap();
            assert!(line.starts_with(command.word()), "line: {line}");
        }
    }

    #[test]
    fn blank_line_shows_help_usage() {
        assert_eq!(
            parse_command("   "),
            Err(ParseError::InvalidFormat { usage: HELP_USAGE })
        );
    }

    #[test]
    fn unknown_word() {
        assert_eq!(
            parse_command("jump 1"),
            Err(ParseError::UnknownCommand("jump".to_string()))
        );
        assert_eq!(parse_command("jump").unwrap_err().to_string(), "Unknown command");
    }

    #[test]
    fn words_are_case_sensitive() {
        assert!(matches!(
            parse_command("LIST"),
            Err(ParseError::UnknownCommand(_))
        ));
    }

    #[test]
    fn invalid_format_message_carries_usage() {
        let message = parse_command("delete x").unwrap_err().to_string();
        assert!(message.starts_with("Invalid command format!\ndelete:"));
    }

    #[test]
    fn validation_message_is_constraint() {
        let message = parse_command("add n/A_B p/1 des/x").unwrap_err().to_string();
        assert_eq!(
            message,
            "Names should only contain alphanumeric characters and spaces, and it should not be blank"
        );
    }

    proptest! {
        #[test]
        fn valid_adds_parse(
            name in "[A-Za-z0-9][A-Za-z0-9 ]{0,15}[A-Za-z0-9]",
            priority in 1u8..=3,
            description in "[A-Za-z0-9][A-Za-z0-9 .,-]{0,20}",
        ) {
            let line = format!("add n/{} p/{} des/{}", name, priority, description);
            let Ok(Command::Add(add)) = parse_command(&line) else {
                return Err(TestCaseError::fail(format!("did not parse: {line}")));
            };

            prop_assert_eq!(add.task().name().as_str(), name.as_str());
            prop_assert_eq!(add.task().description().as_str(), description.trim_end());
        }

        #[test]
        fn garbage_never_panics(line in ".{0,40}") {
            let _ = parse_command(&line);
        }
    }
}

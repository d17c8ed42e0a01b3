//! Validated task fields
//!
//! Every field of a [`Task`](super::Task) is an immutable value object that can
//! only be built from input satisfying its grammar:
//!
//! | Field | Grammar | Example |
//! |-------|---------|---------|
//! | [`Name`] | alphanumerics and spaces, not blank | `Homework 1` |
//! | [`Priority`] | one of `1`, `2`, `3` | `1` |
//! | [`Description`] | any text not starting with whitespace | `Pages 10 - 12` |
//! | [`Done`] | `Y` or `N` | `N` |
//! | [`Tag`] | alphanumerics only | `MA1521` |
//! | [`Reminder`] | `DD/MM/YY@HH:mm` | `04/11/20@10:30` |
//!
//! All of them serialize as their textual form and re-validate on
//! deserialization, so stored data goes through the same checks as user input.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern"));

static DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S.*$").expect("description pattern"));

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag pattern"));

static REMINDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})/(\d{2})/(\d{2})@(\d{2}):(\d{2})$").expect("reminder pattern")
});

/// Rejection of a field value. The message is the field's constraint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    Name(String),

    #[error("Priority only contain numbers {{1,2,3}}")]
    Priority(String),

    #[error("Descriptions can take any values, and it should not be blank")]
    Description(String),

    #[error("Done should only be Y or N")]
    Done(String),

    #[error("Tags names should be alphanumeric")]
    Tag(String),

    #[error("Reminder should be a valid date and time in the format DD/MM/YY@HH:mm, e.g. 04/11/20@10:30")]
    Reminder(String),

    #[error("Index is not a non-zero unsigned integer.")]
    Index(String),
}

/// Implements the string conversions shared by text-backed fields
macro_rules! text_field {
    ($ty:ident, $variant:ident) => {
        impl $ty {
            /// Returns the underlying text
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if Self::is_valid(&value) {
                    Ok(Self(value))
                } else {
                    Err(ValidationError::$variant(value))
                }
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

/// Task name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(value.into())
    }

    pub fn is_valid(value: &str) -> bool {
        NAME_PATTERN.is_match(value)
    }

    /// Whitespace-separated words of the name
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

text_field!(Name, Name);

/// Free-text description
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(value.into())
    }

    pub fn is_valid(value: &str) -> bool {
        DESCRIPTION_PATTERN.is_match(value)
    }
}

text_field!(Description, Description);

/// Tag label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::try_from(value.into())
    }

    pub fn is_valid(value: &str) -> bool {
        TAG_PATTERN.is_match(value)
    }
}

text_field!(Tag, Tag);

/// Task priority, written as `1`, `2` or `3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Returns the single-character encoding
    pub fn as_char(&self) -> char {
        match self {
            Priority::High => '1',
            Priority::Medium => '2',
            Priority::Low => '3',
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Priority::High),
            "2" => Ok(Priority::Medium),
            "3" => Ok(Priority::Low),
            other => Err(ValidationError::Priority(other.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        value.to_string()
    }
}

/// Completion flag, written as `Y` or `N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Done {
    #[default]
    No,
    Yes,
}

impl Done {
    pub fn is_done(&self) -> bool {
        matches!(self, Done::Yes)
    }
}

impl fmt::Display for Done {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_done() { "Y" } else { "N" })
    }
}

impl FromStr for Done {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Y" => Ok(Done::Yes),
            "N" => Ok(Done::No),
            other => Err(ValidationError::Done(other.to_string())),
        }
    }
}

impl TryFrom<String> for Done {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Done> for String {
    fn from(value: Done) -> Self {
        value.to_string()
    }
}

/// Point in time at which a task should be brought to the user's attention
///
/// Two-digit years are read as `20YY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Reminder(NaiveDateTime);

impl Reminder {
    pub fn new(at: NaiveDateTime) -> Self {
        Self(at)
    }

    pub fn at(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}/{:02}/{:02}@{:02}:{:02}",
            self.0.day(),
            self.0.month(),
            self.0.year().rem_euclid(100),
            self.0.hour(),
            self.0.minute()
        )
    }
}

impl FromStr for Reminder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::Reminder(s.to_string());
        let caps = REMINDER_PATTERN.captures(s).ok_or_else(invalid)?;

        // The pattern guarantees two ASCII digits per group
        let field = |i: usize| caps[i].parse::<u32>().map_err(|_| invalid());
        let (day, month, year) = (field(1)?, field(2)?, field(3)?);
        let (hour, minute) = (field(4)?, field(5)?);

        let date = NaiveDate::from_ymd_opt(2000 + year as i32, month, day).ok_or_else(invalid)?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

        Ok(Self(NaiveDateTime::new(date, time)))
    }
}

impl TryFrom<String> for Reminder {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Reminder> for String {
    fn from(value: Reminder) -> Self {
        value.to_string()
    }
}

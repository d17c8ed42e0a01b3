//! User-facing positions into the displayed task list

use std::fmt;
use std::str::FromStr;

use super::fields::ValidationError;

/// A position in the displayed list
///
/// Users address tasks 1-based; internally the offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    /// Creates an index from a 1-based position, rejecting zero
    pub fn from_one_based(position: usize) -> Result<Self, ValidationError> {
        if position == 0 {
            return Err(ValidationError::Index(position.to_string()));
        }
        Ok(Self {
            zero_based: position - 1,
        })
    }

    pub fn from_zero_based(offset: usize) -> Self {
        Self { zero_based: offset }
    }

    pub fn one_based(&self) -> usize {
        self.zero_based + 1
    }

    pub fn zero_based(&self) -> usize {
        self.zero_based
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}

impl FromStr for Index {
    type Err = ValidationError;

    /// Parses a non-zero unsigned integer; signs and other characters are rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::Index(s.to_string()));
        }

        let position: usize = s
            .parse()
            .map_err(|_| ValidationError::Index(s.to_string()))?;
        Self::from_one_based(position)
    }
}

//! Field parsers shared by the command parsers
//!
//! Each one trims its input and defers to the value object's own
//! validation, so the error message is always the field's constraint.

use std::collections::BTreeSet;

use crate::domain::{Description, Index, Name, Priority, Reminder, Tag, ValidationError};

pub fn parse_index(value: &str) -> Result<Index, ValidationError> {
    value.trim().parse()
}

/// Parses a comma-separated list of indices; one bad entry fails the lot
pub fn parse_indices(value: &str) -> Result<Vec<Index>, ValidationError> {
    value.split(',').map(parse_index).collect()
}

pub fn parse_name(value: &str) -> Result<Name, ValidationError> {
    Name::new(value.trim())
}

pub fn parse_priority(value: &str) -> Result<Priority, ValidationError> {
    value.trim().parse()
}

pub fn parse_description(value: &str) -> Result<Description, ValidationError> {
    Description::new(value.trim())
}

pub fn parse_tag(value: &str) -> Result<Tag, ValidationError> {
    Tag::new(value.trim())
}

pub fn parse_tags<S: AsRef<str>>(values: &[S]) -> Result<BTreeSet<Tag>, ValidationError> {
    values.iter().map(|v| parse_tag(v.as_ref())).collect()
}

pub fn parse_reminder(value: &str) -> Result<Reminder, ValidationError> {
    value.trim().parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_list() {
        let indices = parse_indices("1, 3 ,2").unwrap();
        let positions: Vec<usize> = indices.iter().map(Index::one_based).collect();

        assert_eq!(positions, vec![1, 3, 2]);
    }

    #[test]
    fn index_list_fails_on_any_bad_entry() {
        assert!(parse_indices("1,0").is_err());
        assert!(parse_indices("1,,2").is_err());
        assert!(parse_indices("1,a").is_err());
        assert!(parse_indices("").is_err());
        assert!(parse_indices("1 2").is_err());
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(parse_name("  Lab 2 ").unwrap().as_str(), "Lab 2");
        assert_eq!(parse_priority(" 2 ").unwrap(), Priority::Medium);
        assert_eq!(parse_description(" TCP ").unwrap().as_str(), "TCP");
        assert_eq!(parse_tag(" HELP ").unwrap().as_str(), "HELP");
    }

    #[test]
    fn invalid_fields_report_constraint() {
        assert!(matches!(parse_name("Lab_2"), Err(ValidationError::Name(_))));
        assert!(matches!(parse_priority("4"), Err(ValidationError::Priority(_))));
        assert!(matches!(parse_description("  "), Err(ValidationError::Description(_))));
        assert!(matches!(parse_tag("a b"), Err(ValidationError::Tag(_))));
        assert!(matches!(parse_reminder("32/01/20@10:00"), Err(ValidationError::Reminder(_))));
    }

    #[test]
    fn tags_collapse_to_set() {
        let tags = parse_tags(&["HELP", "home", "HELP"]).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn empty_tag_is_invalid() {
        assert!(parse_tags(&[""]).is_err());
    }

    proptest! {
        #[test]
        fn index_lists_parse_in_order(positions in prop::collection::vec(1usize..10_000, 1..8)) {
            let joined = positions
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            let parsed: Vec<usize> = parse_indices(&joined)
                .unwrap()
                .iter()
                .map(Index::one_based)
                .collect();

            prop_assert_eq!(parsed, positions);
        }

        #[test]
        fn zero_anywhere_fails_the_list(
            before in prop::collection::vec(1usize..100, 0..4),
            after in prop::collection::vec(1usize..100, 0..4),
        ) {
            let mut positions = before;
            positions.push(0);
            positions.extend(after);
            let joined = positions
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(",");

            prop_assert!(parse_indices(&joined).is_err());
        }
    }
}

//! Tasks seeded into a fresh data directory

use crate::domain::{Description, Name, Priority, Tag, Task, TaskList, ValidationError};

const SAMPLE_TASKS: &[(&str, Priority, &str, &[&str])] = &[
    ("Homework 1", Priority::High, "Pages 10 - 12", &["MA1521"]),
    ("Lab 2", Priority::Medium, "Introduction to TCP", &["CS2105"]),
    ("Read", Priority::Low, "Chapter 3 of the textbook", &[]),
    ("Project meeting", Priority::Medium, "Sync on milestone 2", &["team", "weekly"]),
    ("Gym", Priority::Low, "Leg day", &["health"]),
];

pub fn sample_tasks() -> Result<Vec<Task>, ValidationError> {
    SAMPLE_TASKS
        .iter()
        .map(|(name, priority, description, tags)| -> Result<Task, ValidationError> {
            Ok(Task::new(
                Name::new(*name)?,
                *priority,
                Description::new(*description)?,
                tags.iter()
                    .map(|tag| Tag::new(*tag))
                    .collect::<Result<Vec<_>, _>>()?,
            ))
        })
        .collect()
}

/// The task list a new user starts with
pub fn sample_task_list() -> TaskList {
    sample_tasks()
        .ok()
        .and_then(|tasks| TaskList::from_tasks(tasks).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_is_valid_and_unique() {
        let tasks = sample_tasks().unwrap();
        assert_eq!(tasks.len(), SAMPLE_TASKS.len());
        assert_eq!(sample_task_list().len(), SAMPLE_TASKS.len());
    }

    #[test]
    fn samples_start_pending() {
        assert!(sample_task_list().iter().all(|task| !task.is_done()));
    }
}

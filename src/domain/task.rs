//! Task domain model
//!
//! A task is an immutable aggregate of validated fields. Changing a task
//! always means building a new one and replacing the old one in the
//! [`TaskList`](super::TaskList).

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::fields::{Description, Done, Name, Priority, Reminder, Tag};

/// A task in the task list
///
/// `PartialEq` compares every field. Duplicate detection uses the weaker
/// [`Task::is_same_task`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    name: Name,
    priority: Priority,
    description: Description,

    #[serde(default)]
    done: Done,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    reminder: Option<Reminder>,
}

impl Task {
    /// Creates a pending task without a reminder
    pub fn new(
        name: Name,
        priority: Priority,
        description: Description,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            priority,
            description,
            done: Done::No,
            tags: tags.into_iter().collect(),
            reminder: None,
        }
    }

    /// Returns a copy with the given completion flag
    pub fn with_done(&self, done: Done) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    /// Returns a copy with the given reminder
    pub fn with_reminder(&self, reminder: Option<Reminder>) -> Self {
        Self {
            reminder,
            ..self.clone()
        }
    }

    /// Returns a copy marked as done
    pub fn mark_done(&self) -> Self {
        self.with_done(Done::Yes)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn done(&self) -> Done {
        self.done
    }

    pub fn is_done(&self) -> bool {
        self.done.is_done()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn reminder(&self) -> Option<Reminder> {
        self.reminder
    }

    /// Weak identity: same name and same priority
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.name == other.name && self.priority == other.priority
    }

    /// The notification this task asks for, if it carries a reminder
    pub fn reminder_event(&self) -> Option<ReminderEvent> {
        self.reminder.map(|reminder| ReminderEvent {
            task_name: self.name.clone(),
            description: self.description.clone(),
            firing_time: reminder.at(),
        })
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Priority: {} Description: {} Done: {} Tags: ",
            self.name, self.priority, self.description, self.done
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        if let Some(reminder) = &self.reminder {
            write!(f, " Reminder: {}", reminder)?;
        }
        Ok(())
    }
}

/// Request to notify the user about a task at a given time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderEvent {
    pub task_name: Name,
    pub description: Description,
    pub firing_time: NaiveDateTime,
}

impl fmt::Display for ReminderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} at {}",
            self.task_name,
            self.description,
            self.firing_time.format("%Y-%m-%d %H:%M")
        )
    }
}

//! Pomodoro session state
//!
//! Only the session shape and the bound task are tracked here. Binding a
//! task never starts a timer.

use serde::{Deserialize, Serialize};

use super::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pomodoro {
    /// Full session length in seconds
    length_secs: u64,

    /// Seconds left in the current session
    remaining_secs: u64,

    /// Task the session is working on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task: Option<Task>,
}

impl Pomodoro {
    /// Creates an idle session of the given length in minutes
    pub fn new(session_minutes: u32) -> Self {
        let length_secs = u64::from(session_minutes) * 60;
        Self {
            length_secs,
            remaining_secs: length_secs,
            task: None,
        }
    }

    pub fn length_secs(&self) -> u64 {
        self.length_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.length_secs.saturating_sub(self.remaining_secs)
    }

    pub fn task(&self) -> Option<&Task> {
        self.task.as_ref()
    }

    /// Binds a task to the session, leaving the clock untouched
    pub fn bind_task(&mut self, task: Task) {
        self.task = Some(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, Name, Priority};

    #[test]
    fn new_session_is_idle() {
        let pomodoro = Pomodoro::new(25);

        assert_eq!(pomodoro.length_secs(), 1500);
        assert_eq!(pomodoro.remaining_secs(), 1500);
        assert_eq!(pomodoro.elapsed_secs(), 0);
        assert!(pomodoro.task().is_none());
    }

    #[test]
    fn bind_task_does_not_touch_clock() {
        let mut pomodoro = Pomodoro::new(25);
        let task = Task::new(
            Name::new("Homework 1").unwrap(),
            Priority::High,
            Description::new("Pages 10 - 12").unwrap(),
            [],
        );

        pomodoro.bind_task(task.clone());

        assert_eq!(pomodoro.task(), Some(&task));
        assert_eq!(pomodoro.remaining_secs(), 1500);
    }

    #[test]
    fn serde_roundtrip() {
        let pomodoro = Pomodoro::new(30);
        let json = serde_json::to_string(&pomodoro).unwrap();
        let parsed: Pomodoro = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, pomodoro);
    }
}

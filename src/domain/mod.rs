//! Domain models for the task tracker
//!
//! Contains the validated value objects, the task aggregate and its
//! collection, plus the pet and pomodoro state. No I/O happens here.

mod fields;
mod index;
mod pet;
mod pomodoro;
mod task;
mod task_list;

pub use fields::{Description, Done, Name, Priority, Reminder, Tag, ValidationError};
pub use index::Index;
pub use pet::{Pet, EXP_PER_TASK};
pub use pomodoro::Pomodoro;
pub use task::{ReminderEvent, Task};
pub use task_list::{TaskList, TaskListError};

//! taskpet - a personal task list with a productivity pet
//!
//! Tasks are added, edited, found, completed and deleted through short text
//! commands such as `add n/Lab 2 p/2 des/Introduction to TCP t/CS2105`.
//! Completing tasks feeds a pet, and any task can be bound to a pomodoro
//! session.
//!
//! The engine is usable without the binary:
//!
//! ```no_run
//! use taskpet::logic::Logic;
//! use taskpet::storage::{load_model, Config, JsonStorage};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::default();
//! let storage = JsonStorage::new(std::path::Path::new("data"));
//! let mut logic = Logic::new(load_model(&storage, &config)?, storage);
//!
//! let result = logic.execute("add n/Lab 2 p/2 des/Introduction to TCP")?;
//! println!("{}", result.feedback);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod logic;
pub mod model;
pub mod storage;

pub use domain::{Index, Pet, Pomodoro, ReminderEvent, Task, TaskList};
pub use logic::{Command, CommandResult, Logic, LogicError};
pub use model::Model;

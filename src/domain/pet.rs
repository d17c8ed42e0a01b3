//! The productivity pet
//!
//! The pet gains experience every time a task is marked done. Its starting
//! name, experience and level come from configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::Name;

/// Experience gained per completed task
pub const EXP_PER_TASK: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    name: Name,
    exp: u32,
    level: u32,
}

impl Pet {
    pub fn new(name: Name, exp: u32, level: u32) -> Self {
        Self { name, exp, level }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn exp(&self) -> u32 {
        self.exp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = name;
    }

    /// Adds the experience for one completed task
    pub fn increment_exp(&mut self) {
        self.exp = self.exp.saturating_add(EXP_PER_TASK);
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hi I'm pet {}! my Exp is {} and my level is {}",
            self.name, self.exp, self.level
        )
    }
}

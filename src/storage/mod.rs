//! # Storage Layer
//!
//! Persistence for taskpet.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Tasks | JSON | `<data dir>/tasklist.json` |
//! | Pet | JSON | `<data dir>/pet.json` |
//! | Pomodoro | JSON | `<data dir>/pomodoro.json` |
//! | Config | TOML | `<config dir>/config.toml` |
//!
//! Field values are stored in the same grammar users type them in, so
//! priorities are `"1"`..`"3"`, done flags `"Y"`/`"N"` and reminders
//! `DD/MM/YY@HH:mm`.
//!
//! ## Startup
//!
//! [`load_model`] never fails on bad data: a missing task file starts the
//! user with sample tasks, an unreadable or corrupt one with an empty list.
//! The pet and the pomodoro fall back to their configured defaults.

mod config;
mod json;
mod sample;

use anyhow::Result;
use tracing::{info, warn};

use crate::domain::{Pet, Pomodoro, TaskList};
use crate::model::Model;

pub use config::{Config, ConfigError, PetConfig, PomodoroConfig, CONFIG_FILE};
pub use json::{JsonFile, JsonStorage, TaskListSnapshot, PET_FILE, POMODORO_FILE, TASK_LIST_FILE};
pub use sample::{sample_task_list, sample_tasks};

/// Where application state is kept between sessions
///
/// Reads return `Ok(None)` when nothing has been saved yet.
pub trait Storage {
    fn read_task_list(&self) -> Result<Option<TaskListSnapshot>>;
    fn save_task_list(&self, snapshot: &TaskListSnapshot) -> Result<()>;

    fn read_pet(&self) -> Result<Option<Pet>>;
    fn save_pet(&self, pet: &Pet) -> Result<()>;

    fn read_pomodoro(&self) -> Result<Option<Pomodoro>>;
    fn save_pomodoro(&self, pomodoro: &Pomodoro) -> Result<()>;

    /// Saves everything the model holds
    fn save_model(&self, model: &Model) -> Result<()> {
        self.save_task_list(&TaskListSnapshot::from(model.task_list()))?;
        self.save_pet(model.pet())?;
        self.save_pomodoro(model.pomodoro())
    }
}

/// Builds the starting model from storage, falling back per [`Config`]
///
/// Fails only if the configured pet defaults are invalid.
pub fn load_model(storage: &impl Storage, config: &Config) -> Result<Model> {
    let tasks = match storage.read_task_list() {
        Ok(Some(snapshot)) => snapshot.into_task_list().unwrap_or_else(|err| {
            warn!("Data file not in the correct format ({}). Will be starting with an empty task list", err);
            TaskList::new()
        }),
        Ok(None) if config.sample_data => {
            info!("Data file not found. Will be starting with a sample task list");
            sample_task_list()
        }
        Ok(None) => TaskList::new(),
        Err(err) => {
            warn!("Problem while reading the task list ({:#}). Will be starting with an empty task list", err);
            TaskList::new()
        }
    };

    let pet = match storage.read_pet() {
        Ok(Some(pet)) => pet,
        Ok(None) => {
            info!("Pet file not found. Will be starting with a new pet");
            config.pet.to_pet()?
        }
        Err(err) => {
            warn!("Problem while reading the pet ({:#}). Will be starting with a new pet", err);
            config.pet.to_pet()?
        }
    };

    let pomodoro = match storage.read_pomodoro() {
        Ok(Some(pomodoro)) => pomodoro,
        Ok(None) => config.pomodoro.to_pomodoro(),
        Err(err) => {
            warn!("Problem while reading the pomodoro ({:#}). Will be starting with a new session", err);
            config.pomodoro.to_pomodoro()
        }
    };

    Ok(Model::new(tasks, pet, pomodoro))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn fresh_directory_gets_samples_and_defaults() {
        let dir = TempDir::new().unwrap();
        let model = load_model(&JsonStorage::new(dir.path()), &Config::default()).unwrap();

        assert_eq!(model.task_list(), &sample_task_list());
        assert_eq!(model.pet().name().as_str(), "BB Productive");
        assert_eq!(model.pomodoro().length_secs(), 25 * 60);
    }

    #[test]
    fn samples_can_be_disabled() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            sample_data: false,
            ..Config::default()
        };

        let model = load_model(&JsonStorage::new(dir.path()), &config).unwrap();
        assert!(model.task_list().is_empty());
    }

    #[test]
    fn corrupt_files_fall_back_to_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(TASK_LIST_FILE), "not json").unwrap();
        fs::write(dir.path().join(PET_FILE), "[]").unwrap();

        let model = load_model(&JsonStorage::new(dir.path()), &Config::default()).unwrap();

        assert!(model.task_list().is_empty());
        assert_eq!(model.pet().exp(), 100);
    }

    #[test]
    fn saved_model_loads_back() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        let mut model = load_model(&storage, &Config::default()).unwrap();
        model.increment_exp();

        storage.save_model(&model).unwrap();
        let loaded = load_model(&storage, &Config::default()).unwrap();

        assert_eq!(loaded.task_list(), model.task_list());
        assert_eq!(loaded.pet().exp(), 101);
    }

    #[test]
    fn loading_raises_no_reminders() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(TASK_LIST_FILE),
            r#"{"tasks":[{"name":"Run","priority":"3","description":"5km","reminder":"04/11/20@10:30"}]}"#,
        )
        .unwrap();

        let mut model = load_model(&JsonStorage::new(dir.path()), &Config::default()).unwrap();

        assert_eq!(model.task_list().len(), 1);
        assert!(model.take_reminder_events().is_empty());
    }
}

//! JSON file storage
//!
//! Each piece of state lives in its own pretty-printed JSON file under the
//! data directory. Reads take a shared lock, writes go to a temp file under
//! an exclusive lock and are renamed into place.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::Storage;
use crate::domain::{Pet, Pomodoro, Task, TaskList, TaskListError};

pub const TASK_LIST_FILE: &str = "tasklist.json";
pub const PET_FILE: &str = "pet.json";
pub const POMODORO_FILE: &str = "pomodoro.json";

/// Serialized form of the task list
///
/// Every field is validated again on load, and a snapshot containing the
/// same task twice is rejected as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListSnapshot {
    pub tasks: Vec<Task>,
}

impl TaskListSnapshot {
    pub fn into_task_list(self) -> Result<TaskList, TaskListError> {
        TaskList::from_tasks(self.tasks)
    }
}

impl From<&TaskList> for TaskListSnapshot {
    fn from(list: &TaskList) -> Self {
        Self {
            tasks: list.as_slice().to_vec(),
        }
    }
}

/// A single JSON document on disk
pub struct JsonFile<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonFile<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the document, or `None` if the file does not exist
    pub fn read(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", self.path.display()))?;

        file.lock_shared()
            .with_context(|| format!("Failed to acquire read lock on {}", self.path.display()))?;

        let value = serde_json::from_reader(BufReader::new(&file))
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        Ok(Some(value))
    }

    /// Replaces the document atomically
    pub fn write(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .with_context(|| format!("Failed to acquire write lock on {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            serde_json::to_writer_pretty(&mut writer, value)
                .with_context(|| format!("Failed to serialize {}", self.path.display()))?;
            writeln!(writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to flush {}", temp_path.display()))?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })
    }
}

/// [`Storage`] backed by three JSON files in one directory
pub struct JsonStorage {
    task_list: JsonFile<TaskListSnapshot>,
    pet: JsonFile<Pet>,
    pomodoro: JsonFile<Pomodoro>,
}

impl JsonStorage {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            task_list: JsonFile::new(data_dir.join(TASK_LIST_FILE)),
            pet: JsonFile::new(data_dir.join(PET_FILE)),
            pomodoro: JsonFile::new(data_dir.join(POMODORO_FILE)),
        }
    }

    pub fn task_list_path(&self) -> &Path {
        self.task_list.path()
    }
}

impl Storage for JsonStorage {
    fn read_task_list(&self) -> Result<Option<TaskListSnapshot>> {
        self.task_list.read()
    }

    fn save_task_list(&self, snapshot: &TaskListSnapshot) -> Result<()> {
        self.task_list.write(snapshot)
    }

    fn read_pet(&self) -> Result<Option<Pet>> {
        self.pet.read()
    }

    fn save_pet(&self, pet: &Pet) -> Result<()> {
        self.pet.write(pet)
    }

    fn read_pomodoro(&self) -> Result<Option<Pomodoro>> {
        self.pomodoro.read()
    }

    fn save_pomodoro(&self, pomodoro: &Pomodoro) -> Result<()> {
        self.pomodoro.write(pomodoro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Description, Name, Priority, Tag};
    use tempfile::TempDir;

    fn sample_list() -> TaskList {
        TaskList::from_tasks([
            Task::new(
                Name::new("Homework 1").unwrap(),
                Priority::High,
                Description::new("Pages 10 - 12").unwrap(),
                [Tag::new("MA1521").unwrap()],
            )
            .mark_done()
            .with_reminder(Some("04/11/20@10:30".parse().unwrap())),
            Task::new(
                Name::new("Lab 2").unwrap(),
                Priority::Medium,
                Description::new("Introduction to TCP").unwrap(),
                [],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn missing_files_read_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());

        assert!(storage.read_task_list().unwrap().is_none());
        assert!(storage.read_pet().unwrap().is_none());
        assert!(storage.read_pomodoro().unwrap().is_none());
    }

    #[test]
    fn task_list_survives_save_and_read() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(&dir.path().join("nested"));
        let list = sample_list();

        storage.save_task_list(&TaskListSnapshot::from(&list)).unwrap();
        let loaded = storage
            .read_task_list()
            .unwrap()
            .unwrap()
            .into_task_list()
            .unwrap();

        assert_eq!(loaded, list);
        assert!(!dir.path().join("nested").join("tasklist.json.tmp").exists());
    }

    #[test]
    fn stored_format_uses_field_grammar() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        storage
            .save_task_list(&TaskListSnapshot::from(&sample_list()))
            .unwrap();

        let raw = fs::read_to_string(storage.task_list_path()).unwrap();
        assert!(raw.contains(r#""priority": "1""#));
        assert!(raw.contains(r#""done": "Y""#));
        assert!(raw.contains(r#""reminder": "04/11/20@10:30""#));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        fs::write(dir.path().join(TASK_LIST_FILE), "{ not json").unwrap();

        assert!(storage.read_task_list().is_err());
    }

    #[test]
    fn invalid_field_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        fs::write(
            dir.path().join(TASK_LIST_FILE),
            r#"{"tasks":[{"name":"Lab_2","priority":"2","description":"TCP"}]}"#,
        )
        .unwrap();

        assert!(storage.read_task_list().is_err());
    }

    #[test]
    fn duplicate_tasks_reject_snapshot() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());
        fs::write(
            dir.path().join(TASK_LIST_FILE),
            r#"{"tasks":[
                {"name":"Lab 2","priority":"2","description":"TCP"},
                {"name":"Lab 2","priority":"2","description":"UDP"}
            ]}"#,
        )
        .unwrap();

        let snapshot = storage.read_task_list().unwrap().unwrap();
        assert_eq!(snapshot.into_task_list(), Err(TaskListError::DuplicateTask));
    }

    #[test]
    fn pet_and_pomodoro_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(dir.path());

        let pet = Pet::new(Name::new("Mochi").unwrap(), 7, 2);
        let mut pomodoro = Pomodoro::new(30);
        pomodoro.bind_task(sample_list().as_slice()[1].clone());

        storage.save_pet(&pet).unwrap();
        storage.save_pomodoro(&pomodoro).unwrap();

        assert_eq!(storage.read_pet().unwrap(), Some(pet));
        assert_eq!(storage.read_pomodoro().unwrap(), Some(pomodoro));
    }
}

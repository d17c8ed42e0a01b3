//! Configuration handling for taskpet
//!
//! Configuration is stored in `<config dir>/taskpet/config.toml`. A missing
//! file is created with the defaults on first start. A broken one is logged
//! and ignored.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{Name, Pet, Pomodoro};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Starting state of the pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetConfig {
    pub name: String,
    pub exp: u32,
    pub level: u32,
}

impl Default for PetConfig {
    fn default() -> Self {
        Self {
            name: "BB Productive".to_string(),
            exp: 100,
            level: 1,
        }
    }
}

impl PetConfig {
    /// Builds the pet a fresh data directory starts with
    pub fn to_pet(&self) -> Result<Pet, ConfigError> {
        let name = Name::new(self.name.as_str())
            .map_err(|err| ConfigError::Invalid(format!("pet.name: {}", err)))?;
        Ok(Pet::new(name, self.exp, self.level))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroConfig {
    /// Length of one session in minutes
    pub session_minutes: u32,
}

impl Default for PomodoroConfig {
    fn default() -> Self {
        Self {
            session_minutes: 25,
        }
    }
}

impl PomodoroConfig {
    pub fn to_pomodoro(&self) -> Pomodoro {
        Pomodoro::new(self.session_minutes)
    }
}

/// User configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where task, pet and pomodoro files live
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Default log filter (e.g. "warn", "taskpet=debug")
    pub log_level: String,

    /// Seed sample tasks when no task file exists yet
    pub sample_data: bool,

    pub pet: PetConfig,

    pub pomodoro: PomodoroConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            log_level: "warn".to_string(),
            sample_data: true,
            pet: PetConfig::default(),
            pomodoro: PomodoroConfig::default(),
        }
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("dev", "taskpet", "taskpet")
    }

    /// Returns the default config file location
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Loads configuration from `path`, or from the default location
    ///
    /// Falls back to defaults if no location can be determined.
    pub fn load(path: Option<&Path>) -> Self {
        match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => Self::load_or_init(&path),
            None => Self::default(),
        }
    }

    /// Loads the file at `path`, writing the defaults there if it is missing
    ///
    /// A file that cannot be read, parsed or validated is logged and the
    /// defaults are used. The file itself is left as it is.
    pub fn load_or_init(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(err) = config.save(path) {
                warn!("Could not write default config to {}: {:#}", path.display(), err);
            }
            return config;
        }

        match Self::read(path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config");
                config
            }
            Err(err) => {
                warn!(
                    "Config file {} is not in the correct format. Using default config properties: {:#}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Reads and validates the file at `path`
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        Ok(config)
    }

    /// Writes the configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.pet.to_pet()?;
        if self.pomodoro.session_minutes == 0 {
            return Err(ConfigError::Invalid(
                "pomodoro.session_minutes must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolves the data directory
    ///
    /// An explicit override wins, then `data_dir` from the file, then the
    /// platform data directory, then `./data`.
    pub fn resolve_data_dir(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.log_level, "warn");
        assert!(config.sample_data);
        assert_eq!(config.pet.name, "BB Productive");
        assert_eq!(config.pet.exp, 100);
        assert_eq!(config.pet.level, 1);
        assert_eq!(config.pomodoro.session_minutes, 25);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
log_level = "debug"

[pet]
name = "Mochi"
"#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.pet.name, "Mochi");
        assert_eq!(config.pet.exp, 100);
        assert_eq!(config.pomodoro.session_minutes, 25);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn missing_file_is_written_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskpet").join(CONFIG_FILE);

        let config = Config::load_or_init(&path);

        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_or_init(&path), Config::default());
    }

    #[test]
    fn saved_config_is_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "sample_data = false\n[pet]\nname = \"Mochi\"\n").unwrap();

        let config = Config::load_or_init(&path);

        assert!(!config.sample_data);
        assert_eq!(config.pet.name, "Mochi");
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "log_level = [").unwrap();

        let err = Config::read(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config"));

        assert_eq!(Config::load_or_init(&path), Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "log_level = [");
    }

    #[test]
    fn invalid_pet_name_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let content = "[pet]\nname = \"no_underscores\"\n";
        fs::write(&path, content).unwrap();

        let err = Config::read(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("pet.name"));

        assert_eq!(Config::load_or_init(&path), Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn zero_length_session_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[pomodoro]\nsession_minutes = 0\n").unwrap();

        let err = Config::read(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("session_minutes"));

        let config = Config::load_or_init(&path);
        assert_eq!(config.pomodoro.session_minutes, 25);
    }

    #[test]
    fn data_dir_precedence() {
        let config = Config {
            data_dir: Some(PathBuf::from("/from/config")),
            ..Config::default()
        };

        assert_eq!(
            config.resolve_data_dir(Some(Path::new("/from/flag"))),
            PathBuf::from("/from/flag")
        );
        assert_eq!(config.resolve_data_dir(None), PathBuf::from("/from/config"));
    }

    #[test]
    fn pet_from_config() {
        let pet = PetConfig::default().to_pet().unwrap();
        assert_eq!(pet.name().as_str(), "BB Productive");
        assert_eq!(pet.exp(), 100);
        assert_eq!(pet.level(), 1);
    }
}

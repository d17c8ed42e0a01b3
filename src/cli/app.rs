//! Main CLI application structure

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::shell;
use crate::logic::Logic;
use crate::storage::{load_model, Config, JsonStorage};

#[derive(Parser)]
#[command(name = "taskpet")]
#[command(author, version, about = "A task list with a pet that grows as you get things done")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "TASKPET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the task, pet and pomodoro files
    #[arg(long, global = true, env = "TASKPET_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands from stdin, one per line (default)
    Shell,

    /// Run the given command lines and exit
    Exec {
        /// Command lines, e.g. "add n/Lab 2 p/2 des/TCP"
        #[arg(required = true)]
        lines: Vec<String>,
    },
}

/// Builds the stderr log subscriber
///
/// `RUST_LOG` wins over `--verbose`, which wins over `level`.
fn log_subscriber(verbose: bool, level: &str) -> impl tracing::Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("taskpet=debug")
        } else {
            EnvFilter::new(level)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish()
}

/// Installs the log subscriber for the configured level
fn init_logging(verbose: bool, config: &Config) {
    // A subscriber may already be set when embedded in tests
    let _ = tracing::subscriber::set_global_default(log_subscriber(verbose, &config.log_level));
}

/// Loads the config with the default log level in effect
fn load_config(cli: &Cli) -> Config {
    let subscriber = log_subscriber(cli.verbose, &Config::default().log_level);
    tracing::subscriber::with_default(subscriber, || Config::load(cli.config.as_deref()))
}

/// Main entry point for the CLI
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(&cli);
    init_logging(cli.verbose, &config);

    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref());
    debug!(data_dir = %data_dir.display(), "Resolved data directory");

    let storage = JsonStorage::new(&data_dir);
    let model = load_model(&storage, &config).context("Failed to initialize task list")?;
    let mut logic = Logic::new(model, storage);
    let output = Output::new(cli.format);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell::run(&mut logic, &output)?,
        Commands::Exec { lines } => {
            if !shell::run_lines(&mut logic, &output, &lines) {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    debug!("Session finished");
    Ok(ExitCode::SUCCESS)
}

//! Output formatting for command results

use serde::Serialize;
use tracing::warn;

use crate::domain::{ReminderEvent, Task};
use crate::logic::commands::usages;
use crate::logic::CommandResult;
use crate::model::Model;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A task as shown to the user, with its position in the view
#[derive(Debug, Serialize)]
struct ListedTask<'a> {
    index: usize,
    #[serde(flatten)]
    task: &'a Task,
}

#[derive(Debug, Serialize)]
struct JsonResult<'a> {
    success: bool,
    feedback: &'a str,
    reminders: &'a [ReminderEvent],
    tasks: Vec<ListedTask<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<Vec<&'static str>>,
    exit: bool,
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a plain message (text only)
    pub fn message(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{}", message);
        }
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        match self.format {
            OutputFormat::Text => eprintln!("{}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": false,
                        "error": message
                    })
                );
            }
        }
    }

    /// Prints the outcome of one command
    pub fn result(&self, result: &CommandResult, model: &Model) {
        match self.format {
            OutputFormat::Text => self.result_text(result, model),
            OutputFormat::Json => {
                let listed = model
                    .filtered_tasks()
                    .iter()
                    .enumerate()
                    .map(|(offset, task)| ListedTask {
                        index: offset + 1,
                        task,
                    })
                    .collect();
                let json = JsonResult {
                    success: true,
                    feedback: &result.feedback,
                    reminders: &result.reminders,
                    tasks: listed,
                    help: result.show_help.then(|| usages().to_vec()),
                    exit: result.exit,
                };
                match serde_json::to_string(&json) {
                    Ok(line) => println!("{}", line),
                    Err(err) => warn!("Failed to serialize result: {}", err),
                }
            }
        }
    }

    fn result_text(&self, result: &CommandResult, model: &Model) {
        println!("{}", result.feedback);

        for reminder in &result.reminders {
            println!("Reminder set: {}", reminder);
        }

        if result.show_tasks {
            for (offset, task) in model.filtered_tasks().iter().enumerate() {
                println!("{}. {}", offset + 1, task);
            }
        }

        if result.show_help {
            for usage in usages() {
                println!();
                println!("{}", usage);
            }
        }
    }
}

//! # Command-Line Interface
//!
//! The `taskpet` binary: argument parsing, the interactive shell and output
//! formatting.
//!
//! ## Modes
//!
//! | Mode | Usage |
//! |------|-------|
//! | Shell (default) | `taskpet` then one command per line |
//! | One-shot | `taskpet exec "add n/Lab 2 p/2 des/TCP" "list"` |
//!
//! ## Output Formats
//!
//! All modes support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - One JSON object per command, always with the shown tasks
//!
//! ## Logging
//!
//! Logs go to stderr. Use `--verbose` (or `-v`) for debug output, or set
//! `RUST_LOG` for full control:
//! ```bash
//! RUST_LOG=taskpet=trace taskpet exec list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate mode.

mod app;
mod output;
mod shell;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};

//! taskpet - a task list with a pet

use std::process::ExitCode;

fn main() -> ExitCode {
    match taskpet::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

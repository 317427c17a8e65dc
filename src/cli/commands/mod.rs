//! CLI command implementations

mod plot;
mod stats;


use std::fs;
use std::path::Path;

use crate::cli::{init_logging, LogLevel};
use crate::config::{Cli, Command};
use crate::feed::{fetch, fetch_scope, JsonFileSource};
use crate::trial::Trial;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);
    init_logging(log_level);

    match cli.command {
        Command::Plot(args) => plot::run_plot(args, log_level),
        Command::Stats(args) => stats::run_stats(args, log_level),
    }
}

/// Load the trial list named on the command line.
fn load_trials(path: &Path) -> Result<Vec<Trial>, String> {
    let (token, _handle) = fetch_scope();
    match fetch(&JsonFileSource::new(path), &token) {
        Some(result) => result.map_err(|e| format!("Trial load error: {e}")),
        None => Err(format!("Loading {} was aborted", path.display())),
    }
}

/// Write to `output`, or stdout when no path is given.
fn write_output(output: Option<&Path>, contents: &str) -> Result<(), String> {
    match output {
        Some(path) => fs::write(path, contents)
            .map_err(|e| format!("Failed to write {}: {e}", path.display())),
        None => {
            print!("{contents}");
            Ok(())
        }
    }
}

//! trialviz CLI
//!
//! Renders hyperparameter-search trials from a JSON file.
//!
//! # Usage
//!
//! ```bash
//! # Strip chart of one metric
//! trialviz plot trials.json --axis duration
//!
//! # Scatter plot of a metric against a parameter, as SVG
//! trialviz plot trials.json --axis duration --axis param:lr -o chart.svg
//!
//! # Only the best trials, highlighting trial 3
//! trialviz plot trials.json --axis duration --label best --active 3 --format text
//!
//! # Summary counts
//! trialviz stats trials.json
//! ```

use clap::Parser;
use std::process::ExitCode;
use trialviz::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

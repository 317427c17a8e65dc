//! CLI argument parsing
//!
//! This module provides the command-line interface for trialviz.
//!
//! # Usage
//!
//! ```bash
//! trialviz plot trials.json --axis duration
//! trialviz plot trials.json --axis metric:duration --axis param:lr --format svg -o chart.svg
//! trialviz plot trials.json --axis duration --label best --active 3
//! trialviz stats trials.json --format json
//! ```

mod core;
mod types;

#[cfg(test)]
mod tests;

pub use core::{parse_args, Cli, Command, PlotArgs, StatsArgs};
pub use types::OutputFormat;

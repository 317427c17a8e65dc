//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::trial::Axis;

/// trialviz: hyperparameter trial charts
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "trialviz")]
#[command(version)]
#[command(about = "Plot hyperparameter-search trials against metrics and parameters")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render a chart of completed trials
    Plot(PlotArgs),

    /// Summarize trial outcomes
    Stats(StatsArgs),
}

/// Arguments for the plot command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PlotArgs {
    /// Path to a JSON trial list
    #[arg(value_name = "TRIALS")]
    pub trials: PathBuf,

    /// Axis to plot, as NAME, metric:NAME or param:NAME (1 to 3 times)
    #[arg(short, long = "axis", required = true, num_args = 1)]
    pub axes: Vec<Axis>,

    /// Only show trials carrying one of these labels
    #[arg(short, long = "label")]
    pub labels: Vec<String>,

    /// Index of the active trial
    #[arg(long)]
    pub active: Option<usize>,

    /// YAML chart configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (svg, json, text)
    #[arg(short, long, default_value = "svg")]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the stats command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct StatsArgs {
    /// Path to a JSON trial list
    #[arg(value_name = "TRIALS")]
    pub trials: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

//! Configuration: chart geometry and command-line arguments.

mod chart;
pub mod cli;

pub use chart::{Canvas, ChartConfig, Margins, PopupSize};
pub use cli::{parse_args, Cli, Command, OutputFormat, PlotArgs, StatsArgs};

//! Stats command implementation

use super::load_trials;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, StatsArgs};
use crate::select::TrialStatistics;

pub fn run_stats(args: StatsArgs, level: LogLevel) -> Result<(), String> {
    let trials = load_trials(&args.trials)?;
    let stats = TrialStatistics::from_trials(&trials);

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Verbose, &format!("Trials from {}", args.trials.display()));
            println!("{stats}");
            if stats.in_flight() > 0 {
                log(level, LogLevel::Normal, &format!("{} trials still running", stats.in_flight()));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stats)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Svg => {
            return Err("stats supports text and json output only".to_string());
        }
    }

    Ok(())
}

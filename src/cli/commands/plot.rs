//! Plot command implementation

use super::{load_trials, write_output};
use crate::chart::{ChartInput, ChartSurface};
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{ChartConfig, OutputFormat, PlotArgs};
use crate::interaction::ChartMessage;
use crate::trial::{ActiveTrial, AxisSelection};

pub fn run_plot(args: PlotArgs, level: LogLevel) -> Result<(), String> {
    let trials = load_trials(&args.trials)?;
    let axes = AxisSelection::new(args.axes.clone()).map_err(|e| format!("Axis error: {e}"))?;
    let config = match &args.config {
        Some(path) => ChartConfig::from_yaml_file(path).map_err(|e| format!("Config error: {e}"))?,
        None => ChartConfig::for_dimensions(axes.dimensions()),
    };

    let input = ChartInput::new(&trials, &axes)
        .label_filter(&args.labels)
        .active(args.active.map(ActiveTrial::new));

    let mut messages: Vec<ChartMessage> = Vec::new();
    let mut surface = ChartSurface::new();
    let view = surface
        .render(&input, &config, &mut messages)
        .map_err(|e| format!("Render error [{}]: {e}", e.code()))?;

    if messages.contains(&ChartMessage::ClearSelection) {
        if let Some(active) = args.active {
            log(level, LogLevel::Normal, &format!("Active trial {active} is not visible"));
        }
    }
    log(level, LogLevel::Verbose, &format!("Plotted {} of {} trials", view.point_count(), trials.len()));

    let rendered = match args.format {
        OutputFormat::Svg => view.to_svg(None),
        OutputFormat::Json => {
            let mut json = view.to_json().map_err(|e| format!("JSON serialization error: {e}"))?;
            json.push('\n');
            json
        }
        OutputFormat::Text => view.to_text(),
    };

    write_output(args.output.as_deref(), &rendered)?;
    if let Some(path) = &args.output {
        log(level, LogLevel::Normal, &format!("Wrote {} chart to {}", args.format, path.display()));
    }
    Ok(())
}

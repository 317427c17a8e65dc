//! Tests for CLI argument parsing

use super::*;
use crate::trial::{Axis, AxisKind};
use std::path::PathBuf;

#[test]
fn test_parse_plot_command() {
    let cli = parse_args(["trialviz", "plot", "trials.json", "--axis", "duration"]).unwrap();
    match cli.command {
        Command::Plot(args) => {
            assert_eq!(args.trials, PathBuf::from("trials.json"));
            assert_eq!(args.axes, vec![Axis::metric("duration")]);
            assert!(args.labels.is_empty());
            assert_eq!(args.active, None);
            assert_eq!(args.format, OutputFormat::Svg);
            assert_eq!(args.output, None);
        }
        _ => panic!("Expected Plot command"),
    }
}

#[test]
fn test_parse_plot_with_all_options() {
    let cli = parse_args([
        "trialviz",
        "plot",
        "trials.json",
        "--axis",
        "metric:duration",
        "--axis",
        "param:lr",
        "--label",
        "best",
        "--label",
        "fast",
        "--active",
        "3",
        "--config",
        "chart.yaml",
        "--format",
        "json",
        "--output",
        "out.json",
    ])
    .unwrap();

    match cli.command {
        Command::Plot(args) => {
            assert_eq!(args.axes.len(), 2);
            assert_eq!(args.axes[1].kind, AxisKind::Parameter);
            assert_eq!(args.labels, vec!["best".to_string(), "fast".to_string()]);
            assert_eq!(args.active, Some(3));
            assert_eq!(args.config, Some(PathBuf::from("chart.yaml")));
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
        }
        _ => panic!("Expected Plot command"),
    }
}

#[test]
fn test_plot_requires_axis() {
    assert!(parse_args(["trialviz", "plot", "trials.json"]).is_err());
}

#[test]
fn test_plot_rejects_unknown_axis_kind() {
    assert!(parse_args(["trialviz", "plot", "t.json", "--axis", "weight:x"]).is_err());
}

#[test]
fn test_parse_stats_command() {
    let cli = parse_args(["trialviz", "stats", "trials.json"]).unwrap();
    match cli.command {
        Command::Stats(args) => {
            assert_eq!(args.trials, PathBuf::from("trials.json"));
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_global_flags() {
    let cli = parse_args(["trialviz", "stats", "t.json", "--verbose"]).unwrap();
    assert!(cli.verbose);
    assert!(!cli.quiet);

    let cli = parse_args(["trialviz", "-q", "stats", "t.json"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn test_missing_command_fails() {
    assert!(parse_args(["trialviz"]).is_err());
}

#[test]
fn test_output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("SVG".parse::<OutputFormat>().unwrap(), OutputFormat::Svg);
    assert!("yaml".parse::<OutputFormat>().is_err());
}

#[test]
fn test_output_format_display() {
    assert_eq!(OutputFormat::Svg.to_string(), "svg");
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

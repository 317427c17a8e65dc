//! Tests for the scale builder and tick generation.

use approx::assert_abs_diff_eq;

use super::*;
use crate::select::select_visible;
use crate::trial::{Trial, TrialStatus};

fn completed(values: &[f64]) -> Vec<IndexedTrial> {
    let trials: Vec<Trial> = values
        .iter()
        .enumerate()
        .map(|(i, v)| Trial::completed(format!("t{i}")).with_value("duration", *v))
        .collect();
    select_visible(&trials, &[]).completed
}

#[test]
fn test_scale_maps_endpoints_and_midpoint() {
    let scale = build_scale("duration", &completed(&[5.0, 10.0]), (0.0, 100.0)).unwrap();
    assert_eq!(scale.map(10.0), 100.0);
    assert_eq!(scale.map(5.0), 50.0);
    assert_eq!(scale.map(0.0), 0.0);
    assert_eq!(scale.domain(), (0.0, 10.0));
}

#[test]
fn test_domain_floor_is_zero_not_observed_min() {
    let scale = build_scale("duration", &completed(&[40.0, 80.0]), (0.0, 800.0)).unwrap();
    assert_eq!(scale.domain().0, 0.0);
    assert_eq!(scale.map(40.0), 400.0);
}

#[test]
fn test_inverted_range_for_vertical_axis() {
    let scale = build_scale("duration", &completed(&[2.0, 4.0]), (300.0, 0.0)).unwrap();
    assert_eq!(scale.map(0.0), 300.0);
    assert_eq!(scale.map(4.0), 0.0);
    assert_abs_diff_eq!(scale.map(1.0), 225.0, epsilon = 1e-9);
}

#[test]
fn test_invert_round_trips_pixels() {
    let scale = build_scale("duration", &completed(&[3.0, 12.0]), (20.0, 620.0)).unwrap();
    for value in [0.0, 1.5, 6.0, 12.0] {
        assert_abs_diff_eq!(scale.invert(scale.map(value)), value, epsilon = 1e-9);
    }
}

#[test]
fn test_empty_completed_is_empty_domain() {
    let err = build_scale("duration", &[], (0.0, 100.0)).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDomain { ref axis } if axis == "duration"));
    assert!(err.is_recoverable());
}

#[test]
fn test_missing_value_fails_fast() {
    let trials = vec![
        Trial::completed("ok").with_value("duration", 1.0),
        Trial::completed("bad").with_value("cost", 2.0),
    ];
    let selection = select_visible(&trials, &[]);
    let err = build_scale("duration", &selection.completed, (0.0, 10.0)).unwrap_err();
    assert!(matches!(err, ChartError::MissingAxisValue { index: 1, .. }));
}

#[test]
fn test_unfinished_trials_do_not_widen_domain() {
    let trials = vec![
        Trial::completed("c").with_value("duration", 10.0),
        Trial::new("r", TrialStatus::Running).with_value("duration", 1000.0),
        Trial::new("f", TrialStatus::Failed).with_value("duration", 500.0),
    ];
    let selection = select_visible(&trials, &[]);
    let scale = build_scale("duration", &selection.completed, (0.0, 100.0)).unwrap();
    assert_eq!(scale.domain(), (0.0, 10.0));
}

#[test]
fn test_all_zero_values_map_to_range_start() {
    let scale = build_scale("duration", &completed(&[0.0, 0.0]), (15.0, 115.0)).unwrap();
    assert!(scale.is_degenerate());
    assert_eq!(scale.map(0.0), 15.0);
    assert_eq!(scale.invert(80.0), 0.0);
    assert_eq!(scale.ticks(DEFAULT_TICK_COUNT), vec![0.0]);
}

#[test]
fn test_nan_value_counts_as_missing() {
    let err = build_scale("duration", &completed(&[4.0, f64::NAN]), (0.0, 8.0)).unwrap_err();
    assert!(matches!(err, ChartError::MissingAxisValue { index: 1, .. }));
}

#[test]
fn test_ticks_unit_steps() {
    let ticks = nice_ticks(0.0, 10.0, 10);
    assert_eq!(ticks, (0..=10).map(f64::from).collect::<Vec<_>>());
    assert_eq!(tick_step(0.0, 10.0, 10), 1.0);
}

#[test]
fn test_ticks_round_to_nice_steps() {
    assert_eq!(nice_ticks(0.0, 100.0, 10), (0..=10).map(|i| f64::from(i) * 10.0).collect::<Vec<_>>());
    // 87 / 10 = 8.7 rounds up to a step of 10
    assert_eq!(nice_ticks(0.0, 87.0, 10), (0..=8).map(|i| f64::from(i) * 10.0).collect::<Vec<_>>());
    // 30 / 10 = 3 falls between √2 and √10, so the step is 2
    assert_eq!(tick_step(0.0, 30.0, 10), 2.0);
    assert_eq!(nice_ticks(0.0, 30.0, 10).len(), 16);
}

#[test]
fn test_ticks_fractional_domain_are_exact() {
    let ticks = nice_ticks(0.0, 0.5, 10);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[1], 0.05);
    assert_eq!(ticks[3], 0.15);
    assert_eq!(ticks[10], 0.5);
    assert_eq!(tick_step(0.0, 0.5, 10), 0.05);
}

#[test]
fn test_ticks_reversed_interval_descends() {
    assert_eq!(nice_ticks(4.0, 0.0, 4), vec![4.0, 3.0, 2.0, 1.0, 0.0]);
}

#[test]
fn test_ticks_degenerate_inputs() {
    assert!(nice_ticks(0.0, 10.0, 0).is_empty());
    assert_eq!(nice_ticks(3.0, 3.0, 10), vec![3.0]);
    assert!(nice_ticks(0.0, f64::INFINITY, 10).is_empty());
}

#[test]
fn test_ticks_subnormal_domain_yields_nothing() {
    assert!(nice_ticks(0.0, 1e-310, 10).is_empty());
    assert_eq!(tick_step(0.0, 1e-310, 10), 0.0);
    assert!(LinearScale::new(1e-310, (0.0, 100.0)).ticks(DEFAULT_TICK_COUNT).is_empty());
}

#[test]
fn test_ticks_tiny_but_normal_domain() {
    let ticks = nice_ticks(0.0, 1e-300, 10);
    assert!(ticks.len() >= 10);
    assert_eq!(ticks.first(), Some(&0.0));
    assert!(ticks.iter().all(|t| *t <= 1e-300));
}

#[test]
fn test_ticks_count_is_bounded() {
    for count in [1, 3, 10, 100] {
        let ticks = nice_ticks(0.0, 1.0, count);
        assert!(ticks.len() <= count * 10 + 1, "{count} -> {}", ticks.len());
    }
}

#[test]
fn test_scale_ticks_stay_within_domain() {
    let scale = LinearScale::new(937.0, (0.0, 934.0));
    let ticks = scale.ticks(DEFAULT_TICK_COUNT);
    assert_eq!(ticks.first(), Some(&0.0));
    assert!(ticks.iter().all(|t| *t <= 937.0));
    assert_eq!(scale.tick_step(DEFAULT_TICK_COUNT), 100.0);
}

//! Tests for the selector/filter engine.

use serde_json::json;

use super::*;
use crate::trial::TrialStatus;

fn mixed_trials() -> Vec<Trial> {
    vec![
        Trial::completed("t0").with_value("duration", 5.0),
        Trial::new("t1", TrialStatus::Running),
        Trial::completed("t2").with_value("duration", 10.0).with_label("best", json!({})),
        Trial::new("t3", TrialStatus::Failed),
        Trial::completed("t4").with_value("duration", 7.0).with_label("fast", json!(1)),
        Trial::new("t5", TrialStatus::Pending),
    ]
}

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_trial_list() {
    let selection = select_visible(&[], &labels(&["best"]));
    assert!(selection.completed.is_empty());
    assert!(selection.visible.is_empty());
    assert!(selection.is_empty());
}

#[test]
fn test_completed_keeps_original_indices() {
    let selection = select_visible(&mixed_trials(), &[]);
    let indices: Vec<usize> = selection.completed.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![0, 2, 4]);
}

#[test]
fn test_empty_filter_shows_all_completed() {
    let selection = select_visible(&mixed_trials(), &[]);
    assert_eq!(selection.visible, selection.completed);
}

#[test]
fn test_best_filter_selects_only_best() {
    let selection = select_visible(&mixed_trials(), &labels(&["best"]));
    assert_eq!(selection.visible.len(), 1);
    assert_eq!(selection.visible[0].index, 2);
    assert_eq!(selection.visible[0].trial.id, "t2");
    // filtering never shrinks the completed set
    assert_eq!(selection.completed.len(), 3);
}

#[test]
fn test_filter_is_or_across_labels() {
    let selection = select_visible(&mixed_trials(), &labels(&["best", "fast"]));
    let indices: Vec<usize> = selection.visible.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![2, 4]);
}

#[test]
fn test_unmatched_filter_yields_empty_visible() {
    let selection = select_visible(&mixed_trials(), &labels(&["slow"]));
    assert!(selection.visible.is_empty());
    assert!(!selection.is_empty());
}

#[test]
fn test_labels_on_unfinished_trials_are_ignored() {
    let trials = vec![
        Trial::new("r", TrialStatus::Running).with_label("best", json!({})),
        Trial::new("f", TrialStatus::Failed).with_label("best", json!({})),
    ];
    let selection = select_visible(&trials, &labels(&["best"]));
    assert!(selection.completed.is_empty());
    assert!(selection.visible.is_empty());
}

#[test]
fn test_visible_trial_lookup() {
    let selection = select_visible(&mixed_trials(), &labels(&["best"]));
    assert!(selection.visible_trial(2).is_some());
    assert!(selection.visible_trial(0).is_none());
    assert!(selection.visible_trial(1).is_none());
}

#[test]
fn test_reconcile_active_clears_hidden_trial() {
    let selection = select_visible(&mixed_trials(), &labels(&["best"]));
    assert_eq!(selection.reconcile_active(Some(ActiveTrial::new(2))), Some(ActiveTrial::new(2)));
    assert_eq!(selection.reconcile_active(Some(ActiveTrial::new(0))), None);
    assert_eq!(selection.reconcile_active(None), None);
}

#[test]
fn test_statistics_counts_by_status() {
    let stats = TrialStatistics::from_trials(&mixed_trials());
    assert_eq!(stats, TrialStatistics { total: 6, completed: 3, failed: 1 });
    assert_eq!(stats.in_flight(), 2);
}

#[test]
fn test_statistics_empty() {
    let stats = TrialStatistics::from_trials(&[]);
    assert_eq!(stats, TrialStatistics::default());
    assert_eq!(stats.in_flight(), 0);
}

#[test]
fn test_statistics_display() {
    let text = TrialStatistics::from_trials(&mixed_trials()).to_string();
    assert!(text.contains("Total Trials"));
    assert!(text.contains("Unstable Configurations"));
}

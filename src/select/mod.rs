//! Selector/filter engine.
//!
//! Derives the plotted subset of a trial list. Indices are assigned from the
//! position in the original list *before* filtering, so they stay valid
//! interaction keys no matter which trials a label filter hides.
//!
//! # Example
//!
//! ```
//! use trialviz::select::select_visible;
//! use trialviz::trial::{Trial, TrialStatus};
//!
//! let trials = vec![
//!     Trial::new("a", TrialStatus::Failed),
//!     Trial::completed("b").with_value("duration", 5.0),
//! ];
//! let selection = select_visible(&trials, &[]);
//! assert_eq!(selection.completed.len(), 1);
//! assert_eq!(selection.completed[0].index, 1);
//! ```

mod stats;

#[cfg(test)]
mod tests;

pub use stats::TrialStatistics;

use serde::Serialize;

use crate::trial::{ActiveTrial, IndexedTrial, Trial};

/// Completed and visible trials derived for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    /// All completed trials, in original order
    pub completed: Vec<IndexedTrial>,
    /// Completed trials passing the label filter
    pub visible: Vec<IndexedTrial>,
}

impl Selection {
    /// Find a visible trial by its original index.
    pub fn visible_trial(&self, index: usize) -> Option<&IndexedTrial> {
        self.visible.iter().find(|t| t.index == index)
    }

    /// The active trial if it is still part of the visible set.
    pub fn reconcile_active(&self, active: Option<ActiveTrial>) -> Option<ActiveTrial> {
        active.filter(|a| self.visible_trial(a.index).is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

/// Split `trials` into completed and label-filtered visible sets.
///
/// An empty `label_filter` keeps every completed trial; otherwise a trial is
/// visible when any of its label keys is listed in the filter.
pub fn select_visible(trials: &[Trial], label_filter: &[String]) -> Selection {
    let completed: Vec<IndexedTrial> = trials
        .iter()
        .enumerate()
        .filter(|(_, trial)| trial.is_completed())
        .map(|(index, trial)| IndexedTrial { index, trial: trial.clone() })
        .collect();

    let visible: Vec<IndexedTrial> = if label_filter.is_empty() {
        completed.clone()
    } else {
        completed.iter().filter(|t| t.trial.has_any_label(label_filter)).cloned().collect()
    };

    log::debug!(
        "selected {} visible of {} completed ({} total, filter {:?})",
        visible.len(),
        completed.len(),
        trials.len(),
        label_filter
    );

    Selection { completed, visible }
}

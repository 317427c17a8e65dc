//! Trial status counts for the dashboard summary panel.

use serde::{Deserialize, Serialize};

use crate::trial::{Trial, TrialStatus};

/// Counts of trials by outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialStatistics {
    pub total: usize,
    pub completed: usize,
    /// Failed trials, shown as "unstable configurations"
    pub failed: usize,
}

impl TrialStatistics {
    pub fn from_trials(trials: &[Trial]) -> Self {
        trials.iter().fold(Self { total: trials.len(), ..Self::default() }, |mut acc, t| {
            match t.status {
                TrialStatus::Completed => acc.completed += 1,
                TrialStatus::Failed => acc.failed += 1,
                TrialStatus::Pending | TrialStatus::Running => {}
            }
            acc
        })
    }

    /// Trials not yet finished.
    pub fn in_flight(&self) -> usize {
        self.total - self.completed - self.failed
    }
}

impl std::fmt::Display for TrialStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Trials             {:>6}", self.total)?;
        writeln!(f, "Completed Trials         {:>6}", self.completed)?;
        write!(f, "Unstable Configurations  {:>6}", self.failed)
    }
}

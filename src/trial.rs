//! Trial data model.
//!
//! A [`Trial`] is one evaluated configuration as delivered by the data-fetch
//! layer. The chart never mutates trials; every render derives a fresh set of
//! [`IndexedTrial`]s whose `index` is the trial's position in the original list.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Label key marking the best trial found so far.
pub const BEST_LABEL: &str = "best";

/// Maximum number of axes a chart can plot.
pub const MAX_AXES: usize = 3;

/// Lifecycle status of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialStatus {
    /// Queued, not started
    Pending,
    /// Currently evaluating
    Running,
    /// Finished with values
    Completed,
    /// Evaluation failed
    Failed,
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// A named metric or parameter value reported by a trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub metric_name: String,
    pub value: f64,
}

/// One evaluated configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    /// Stable identifier, unique within a trial list
    pub id: String,
    pub status: TrialStatus,
    /// Metric and parameter values, unique by name
    #[serde(default)]
    pub values: Vec<MetricValue>,
    /// Arbitrary label metadata keyed by label name
    #[serde(default)]
    pub labels: BTreeMap<String, serde_json::Value>,
}

impl Trial {
    pub fn new(id: impl Into<String>, status: TrialStatus) -> Self {
        Self { id: id.into(), status, values: Vec::new(), labels: BTreeMap::new() }
    }

    /// Convenience constructor for a completed trial.
    pub fn completed(id: impl Into<String>) -> Self {
        Self::new(id, TrialStatus::Completed)
    }

    /// Set a value, replacing an existing one with the same name.
    pub fn with_value(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        match self.values.iter_mut().find(|v| v.metric_name == name) {
            Some(existing) => existing.value = value,
            None => self.values.push(MetricValue { metric_name: name, value }),
        }
        self
    }

    pub fn with_label(mut self, label: impl Into<String>, meta: serde_json::Value) -> Self {
        self.labels.insert(label.into(), meta);
        self
    }

    /// Look up the value reported for `name`.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.metric_name == name).map(|v| v.value)
    }

    pub fn is_completed(&self) -> bool {
        self.status == TrialStatus::Completed
    }

    pub fn is_best(&self) -> bool {
        self.labels.contains_key(BEST_LABEL)
    }

    /// True if any of this trial's label keys appears in `filter`.
    pub fn has_any_label(&self, filter: &[String]) -> bool {
        filter.iter().any(|label| self.labels.contains_key(label))
    }
}

/// A trial paired with its position in the original trial list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedTrial {
    pub index: usize,
    pub trial: Trial,
}

impl IndexedTrial {
    /// Value for `axis`, failing with `MissingAxisValue` when absent.
    ///
    /// A NaN value cannot be placed on an axis and counts as absent.
    pub fn require_value(&self, axis: &str) -> Result<f64> {
        self.trial.value_of(axis).filter(|v| !v.is_nan()).ok_or_else(|| ChartError::MissingAxisValue {
            trial_id: self.trial.id.clone(),
            index: self.index,
            axis: axis.to_string(),
        })
    }
}

/// The currently selected trial, owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveTrial {
    pub index: usize,
}

impl ActiveTrial {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

/// Whether an axis plots a metric (output) or a parameter (input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    #[default]
    Metric,
    Parameter,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Parameter => write!(f, "parameter"),
        }
    }
}

/// A named metric or parameter mapped onto one screen dimension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Axis {
    pub name: String,
    pub kind: AxisKind,
}

impl Axis {
    pub fn metric(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: AxisKind::Metric }
    }

    pub fn parameter(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: AxisKind::Parameter }
    }
}

/// Parses `NAME`, `metric:NAME` or `param:NAME`.
impl FromStr for Axis {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once(':') {
            None => Ok(Self::metric(s)),
            Some((kind, name)) => match kind.to_lowercase().as_str() {
                "metric" | "m" => Ok(Self::metric(name)),
                "param" | "parameter" | "p" => Ok(Self::parameter(name)),
                _ => Err(ChartError::UnknownAxisKind { kind: kind.to_string() }),
            },
        }
    }
}

/// One to three axes, in screen order (x, y, depth).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisSelection {
    axes: Vec<Axis>,
}

impl AxisSelection {
    pub fn new(axes: Vec<Axis>) -> Result<Self> {
        if axes.is_empty() || axes.len() > MAX_AXES {
            return Err(ChartError::InvalidAxisCount { count: axes.len() });
        }
        Ok(Self { axes })
    }

    pub fn single(axis: Axis) -> Self {
        Self { axes: vec![axis] }
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of plotted dimensions (1 to 3).
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }
}

//! Metric/parameter pair picker for the two-dimensional chart.

use super::{ListSearch, MenuItem};
use crate::trial::{Axis, AxisSelection};

fn menu_items<I, S>(names: I) -> Vec<MenuItem>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.into();
            MenuItem::new(name.clone(), name)
        })
        .collect()
}

/// Two [`ListSearch`] menus, one over metric names and one over parameter
/// names.
///
/// A chart exists only once both are chosen: the parameter goes on x and the
/// metric on y.
///
/// # Example
///
/// ```
/// use trialviz::interaction::AxisPicker;
///
/// let mut picker = AxisPicker::new(["duration", "cost"], ["cpu", "memory"]);
/// assert!(picker.axes().is_none());
///
/// picker.select_metric("cost");
/// picker.select_parameter("memory");
/// let axes = picker.axes().unwrap();
/// assert_eq!(axes.axes()[0].name, "memory");
/// assert_eq!(axes.axes()[1].name, "cost");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AxisPicker {
    metric: ListSearch,
    parameter: ListSearch,
}

impl AxisPicker {
    pub fn new<M, P>(metrics: M, parameters: P) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            metric: ListSearch::new(menu_items(metrics)),
            parameter: ListSearch::new(menu_items(parameters)),
        }
    }

    pub fn metric_menu(&self) -> &ListSearch {
        &self.metric
    }

    pub fn metric_menu_mut(&mut self) -> &mut ListSearch {
        &mut self.metric
    }

    pub fn parameter_menu(&self) -> &ListSearch {
        &self.parameter
    }

    pub fn parameter_menu_mut(&mut self) -> &mut ListSearch {
        &mut self.parameter
    }

    /// Choose a metric by name. Unknown names clear the choice.
    pub fn select_metric(&mut self, name: &str) -> bool {
        self.metric.select_value(name).is_some()
    }

    /// Choose a parameter by name. Unknown names clear the choice.
    pub fn select_parameter(&mut self, name: &str) -> bool {
        self.parameter.select_value(name).is_some()
    }

    pub fn metric(&self) -> Option<&str> {
        self.metric.selected().map(|item| item.value.as_str())
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.selected().map(|item| item.value.as_str())
    }

    /// `[parameter, metric]` once both are chosen.
    pub fn axes(&self) -> Option<AxisSelection> {
        let (metric, parameter) = (self.metric()?, self.parameter()?);
        AxisSelection::new(vec![Axis::parameter(parameter), Axis::metric(metric)]).ok()
    }
}

//! Scale builder.
//!
//! One [`LinearScale`] per plotted axis maps data values onto pixels. Domains
//! always start at zero so zero-cost or zero-duration trials sit on the origin.
//!
//! # Example
//!
//! ```
//! use trialviz::scale::build_scale;
//! use trialviz::select::select_visible;
//! use trialviz::trial::Trial;
//!
//! let trials = vec![
//!     Trial::completed("a").with_value("duration", 5.0),
//!     Trial::completed("b").with_value("duration", 10.0),
//! ];
//! let selection = select_visible(&trials, &[]);
//! let scale = build_scale("duration", &selection.completed, (0.0, 100.0)).unwrap();
//! assert_eq!(scale.map(5.0), 50.0);
//! assert_eq!(scale.map(10.0), 100.0);
//! ```

mod ticks;

#[cfg(test)]
mod tests;

pub use ticks::{nice_ticks, tick_step};

use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::trial::IndexedTrial;

/// Tick count requested from every axis.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Linear mapping from `[0, domain_max]` onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    domain_max: f64,
    range: (f64, f64),
}

impl LinearScale {
    /// Scale over `[0, domain_max]`.
    pub fn new(domain_max: f64, range: (f64, f64)) -> Self {
        Self { domain_max, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// True when every value maps to the start of the range.
    pub fn is_degenerate(&self) -> bool {
        self.domain_max == 0.0
    }

    /// Data value to pixel.
    pub fn map(&self, value: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return r0;
        }
        r0 + (value / self.domain_max) * (r1 - r0)
    }

    /// Pixel back to data value.
    pub fn invert(&self, pixel: f64) -> f64 {
        let (r0, r1) = self.range;
        if self.is_degenerate() || r0 == r1 {
            return 0.0;
        }
        (pixel - r0) / (r1 - r0) * self.domain_max
    }

    /// Nice tick values over the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(0.0, self.domain_max, count)
    }

    pub fn tick_step(&self, count: usize) -> f64 {
        tick_step(0.0, self.domain_max, count)
    }
}

/// Build the scale for `axis` from every completed trial.
///
/// Fails with `EmptyDomain` when there are no completed trials and with
/// `MissingAxisValue` when any completed trial lacks the axis or records NaN.
pub fn build_scale(
    axis: &str,
    completed: &[IndexedTrial],
    range: (f64, f64),
) -> Result<LinearScale> {
    if completed.is_empty() {
        return Err(ChartError::EmptyDomain { axis: axis.to_string() });
    }

    let mut domain_max = f64::NEG_INFINITY;
    for trial in completed {
        domain_max = domain_max.max(trial.require_value(axis)?);
    }

    log::debug!("scale '{axis}': domain [0, {domain_max}] -> range {range:?}");
    Ok(LinearScale::new(domain_max, range))
}

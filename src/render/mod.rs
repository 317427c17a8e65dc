//! Point renderer.
//!
//! Projects trials through the axis scales into plot coordinates and tags each
//! point with its interaction classification. Projection is a pure function:
//! identical trials, scales and active trial always give identical points.

mod scene;
mod svg;


pub use scene::{AxisDescriptor, BoundingBox, ChartLayout, Popup, RenderedPoint, Scene};
pub use svg::{write_placeholder_svg, write_svg};

use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::scale::LinearScale;
use crate::trial::{ActiveTrial, Axis, IndexedTrial, MAX_AXES};

/// Bitset of per-point visual states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Classification(u8);

impl Classification {
    pub const NONE: Self = Self(0);
    /// Trial carries the `best` label
    pub const BEST: Self = Self(1);
    /// Trial is the host's active trial
    pub const ACTIVE: Self = Self(1 << 1);

    pub fn of(trial: &IndexedTrial, active: Option<ActiveTrial>) -> Self {
        let mut class = Self::NONE;
        if trial.trial.is_best() {
            class = class | Self::BEST;
        }
        if active.is_some_and(|a| a.index == trial.index) {
            class = class | Self::ACTIVE;
        }
        class
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_best(self) -> bool {
        self.contains(Self::BEST)
    }

    pub fn is_active(self) -> bool {
        self.contains(Self::ACTIVE)
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for Classification {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Circle radius per point state.
///
/// The active trial (and a hovered point while hovered) uses `active`;
/// everything else uses `default`. Being "best" changes style, never size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusPolicy {
    pub default: f64,
    pub active: f64,
}

impl Default for RadiusPolicy {
    fn default() -> Self {
        Self { default: 3.0, active: 6.0 }
    }
}

impl RadiusPolicy {
    pub fn radius(&self, classification: Classification, hovered: bool) -> f64 {
        if hovered || classification.is_active() {
            self.active
        } else {
            self.default
        }
    }
}

/// A trial projected through the axis scales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    /// Position of the trial in the original list
    pub index: usize,
    /// One pixel coordinate per axis, in axis order
    pub coords: Vec<f64>,
    pub classification: Classification,
}

/// Project `trial` through one scale per axis.
///
/// Fails with `MissingAxisValue` if the trial lacks any axis, and with
/// `InvalidAxisCount` unless there are 1 to 3 axes with a scale each.
pub fn project(
    trial: &IndexedTrial,
    scales: &[LinearScale],
    axes: &[Axis],
    active: Option<ActiveTrial>,
) -> Result<Point> {
    if axes.is_empty() || axes.len() > MAX_AXES || scales.len() != axes.len() {
        return Err(ChartError::InvalidAxisCount { count: axes.len() });
    }

    let coords = axes
        .iter()
        .zip(scales)
        .map(|(axis, scale)| trial.require_value(&axis.name).map(|v| scale.map(v)))
        .collect::<Result<Vec<_>>>()?;

    Ok(Point { index: trial.index, coords, classification: Classification::of(trial, active) })
}

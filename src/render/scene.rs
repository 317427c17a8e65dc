//! Retained scene for one render: axes, projected points and popup geometry.
//!
//! A scene is rebuilt from scratch on every input change and never patched.

use serde::Serialize;

use super::{Point, RadiusPolicy};
use crate::axis::{oblique_offset, AxisFormat, AxisPlacement};
use crate::config::{ChartConfig, PopupSize};
use crate::trial::{ActiveTrial, Axis, AxisKind, IndexedTrial};

/// Offset of the popup from the hovered point's bounding box.
const POPUP_OFFSET: f64 = 5.0;

/// Plot-area geometry for a chart with 1 to 3 axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartLayout {
    pub dimensions: usize,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub strip_grid_length: f64,
    pub ticks: usize,
}

impl ChartLayout {
    pub fn new(config: &ChartConfig, dimensions: usize) -> Self {
        Self {
            dimensions,
            width: config.plot_width(),
            height: config.plot_height(),
            depth: config.depth,
            strip_grid_length: config.strip_grid_length,
            ticks: config.ticks,
        }
    }

    /// Room taken by the receding depth axis (zero unless 3-D).
    fn depth_extent(&self) -> (f64, f64) {
        if self.dimensions >= 3 {
            let (dx, dy) = oblique_offset(self.depth);
            (dx, -dy)
        } else {
            (0.0, 0.0)
        }
    }

    /// Pixel range for the axis at `position` (0 = x, 1 = y, 2 = depth).
    ///
    /// The y range is inverted so larger values sit higher on screen.
    pub fn axis_range(&self, position: usize) -> (f64, f64) {
        let (dx, dy) = self.depth_extent();
        match position {
            0 => (0.0, self.width - dx),
            1 => (self.height, dy),
            _ => (0.0, self.depth),
        }
    }

    pub fn axis_placement(&self, position: usize) -> AxisPlacement {
        let (dx, dy) = self.depth_extent();
        let placement = match position {
            0 if self.dimensions == 1 => AxisPlacement::bottom(self.height, self.strip_grid_length),
            0 => AxisPlacement::bottom(self.height, self.height - dy),
            1 => AxisPlacement::left(0.0, self.width - dx),
            _ => AxisPlacement::depth(self.height, self.width - dx),
        };
        placement.tick_count(self.ticks)
    }

    /// Plot-area position of projected coordinates.
    ///
    /// 1-D points sit on the axis baseline; 3-D points are shifted along the
    /// oblique depth direction.
    pub fn place(&self, coords: &[f64]) -> (f64, f64) {
        match coords {
            [x] => (*x, self.height),
            [x, y] => (*x, *y),
            [x, y, z, ..] => {
                let (dx, dy) = oblique_offset(*z);
                (x + dx, y + dy)
            }
            [] => (0.0, self.height),
        }
    }
}

/// Screen-space rectangle around a rendered point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Value of one plotted axis for a hovered trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisDescriptor {
    pub name: String,
    pub kind: AxisKind,
    pub value: f64,
}

/// A projected trial placed in the plot area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPoint {
    pub trial: IndexedTrial,
    pub point: Point,
    /// Raw axis values, in axis order
    pub values: Vec<f64>,
    /// Plot-area position (before margins)
    pub position: (f64, f64),
    /// Radius when not hovered
    pub radius: f64,
}

impl RenderedPoint {
    pub fn index(&self) -> usize {
        self.point.index
    }
}

/// Hover popup placement. Visible only while a point is hovered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Popup {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Everything drawn for one render of a chart with data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub canvas: (f64, f64),
    /// Top-left corner of the plot area on the canvas
    pub origin: (f64, f64),
    pub layout: ChartLayout,
    pub axes: Vec<Axis>,
    pub axis_formats: Vec<AxisFormat>,
    /// Drawn in order; later points are on top
    pub points: Vec<RenderedPoint>,
    pub radius: RadiusPolicy,
    pub popup: PopupSize,
    /// The host's active trial when it is no longer visible
    pub stale_active: Option<ActiveTrial>,
}

impl Scene {
    pub fn point(&self, index: usize) -> Option<&RenderedPoint> {
        self.points.iter().find(|p| p.index() == index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.point(index).is_some()
    }

    /// Radius of `index`, enlarged while it is the hovered point.
    pub fn radius_of(&self, index: usize, hovered: Option<usize>) -> Option<f64> {
        self.point(index).map(|p| {
            self.radius.radius(p.point.classification, hovered == Some(index))
        })
    }

    /// Canvas position of a point's centre.
    pub fn screen_position(&self, index: usize) -> Option<(f64, f64)> {
        self.point(index).map(|p| (self.origin.0 + p.position.0, self.origin.1 + p.position.1))
    }

    /// On-screen bounding box of a point at its current radius.
    pub fn bounding_box(&self, index: usize, hovered: Option<usize>) -> Option<BoundingBox> {
        let (cx, cy) = self.screen_position(index)?;
        let r = self.radius_of(index, hovered)?;
        Some(BoundingBox { x: cx - r, y: cy - r, width: 2.0 * r, height: 2.0 * r })
    }

    /// Topmost point whose circle contains the canvas position.
    pub fn point_at(&self, x: f64, y: f64, hovered: Option<usize>) -> Option<usize> {
        self.points.iter().rev().map(RenderedPoint::index).find(|&index| {
            match (self.screen_position(index), self.radius_of(index, hovered)) {
                (Some((cx, cy)), Some(r)) => (x - cx).powi(2) + (y - cy).powi(2) <= r * r,
                _ => false,
            }
        })
    }

    /// Axis values of a point for hover descriptors.
    pub fn axis_descriptors(&self, index: usize) -> Vec<AxisDescriptor> {
        self.point(index)
            .map(|p| {
                self.axes
                    .iter()
                    .zip(&p.values)
                    .map(|(axis, value)| AxisDescriptor {
                        name: axis.name.clone(),
                        kind: axis.kind,
                        value: *value,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Popup geometry for the hovered point; hidden when nothing is hovered.
    pub fn popup_for(&self, hovered: Option<usize>) -> Popup {
        let anchor = hovered.and_then(|index| self.bounding_box(index, hovered));
        match anchor {
            Some(bbox) => Popup {
                visible: true,
                x: bbox.x + bbox.width + POPUP_OFFSET,
                y: bbox.y + POPUP_OFFSET,
                width: self.popup.width,
                height: self.popup.height,
            },
            None => Popup {
                visible: false,
                x: 0.0,
                y: 0.0,
                width: self.popup.width,
                height: self.popup.height,
            },
        }
    }
}

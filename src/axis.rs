//! Axis/legend formatter.
//!
//! Builds tick marks, gridlines and the axis label from a [`LinearScale`].
//! Purely derived: nothing here keeps state between renders.

use serde::Serialize;

use crate::scale::{LinearScale, DEFAULT_TICK_COUNT};

/// Distance from the axis line to its label, in pixels.
const LABEL_GAP: f64 = 40.0;

/// Angle of the receding depth axis in an oblique projection.
pub const DEPTH_ANGLE_DEG: f64 = 45.0;

/// Foreshortening applied to depth before projecting.
pub const DEPTH_FORESHORTENING: f64 = 0.5;

/// Screen offset of a point `depth` pixels along the depth axis.
pub fn oblique_offset(depth: f64) -> (f64, f64) {
    let angle = DEPTH_ANGLE_DEG.to_radians();
    let d = depth * DEPTH_FORESHORTENING;
    (d * angle.cos(), -d * angle.sin())
}

/// A straight segment in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Which screen dimension an axis runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisOrientation {
    /// Horizontal, ticks along x
    Bottom,
    /// Vertical, ticks along y
    Left,
    /// Receding oblique axis of 3-D charts
    Depth,
}

/// Where an axis sits and how far its gridlines reach into the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisPlacement {
    pub orientation: AxisOrientation,
    /// Perpendicular position of the axis line (y for bottom and depth, x for left)
    pub offset: f64,
    /// Gridline length into the plot area
    pub grid_length: f64,
    pub tick_count: usize,
}

impl AxisPlacement {
    pub fn bottom(offset: f64, grid_length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Bottom,
            offset,
            grid_length,
            tick_count: DEFAULT_TICK_COUNT,
        }
    }

    pub fn left(offset: f64, grid_length: f64) -> Self {
        Self { orientation: AxisOrientation::Left, offset, grid_length, tick_count: DEFAULT_TICK_COUNT }
    }

    pub fn depth(offset: f64, grid_length: f64) -> Self {
        Self {
            orientation: AxisOrientation::Depth,
            offset,
            grid_length,
            tick_count: DEFAULT_TICK_COUNT,
        }
    }

    pub fn tick_count(mut self, count: usize) -> Self {
        self.tick_count = count;
        self
    }
}

/// Everything needed to draw one axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisFormat {
    pub orientation: AxisOrientation,
    pub ticks: Vec<f64>,
    pub tick_labels: Vec<String>,
    /// One gridline per tick
    pub gridlines: Vec<Line>,
    pub axis_line: Line,
    pub label_text: String,
    pub label_anchor: (f64, f64),
}

/// Derive ticks, gridlines and label placement for `scale`.
pub fn format_axis(scale: &LinearScale, label: &str, placement: AxisPlacement) -> AxisFormat {
    let ticks = scale.ticks(placement.tick_count);
    let decimals = tick_precision(scale.tick_step(placement.tick_count));
    let tick_labels = ticks.iter().map(|t| format_tick(*t, decimals)).collect();
    let (r0, r1) = scale.range();
    let off = placement.offset;
    let len = placement.grid_length;

    let gridlines = ticks
        .iter()
        .map(|t| {
            let p = scale.map(*t);
            match placement.orientation {
                AxisOrientation::Bottom => Line::new(p, off, p, off - len),
                AxisOrientation::Left => Line::new(off, p, off + len, p),
                AxisOrientation::Depth => {
                    let (dx, dy) = oblique_offset(p);
                    Line::new(dx, off + dy, dx + len, off + dy)
                }
            }
        })
        .collect();

    let (axis_line, label_anchor) = match placement.orientation {
        AxisOrientation::Bottom => {
            (Line::new(r0, off, r1, off), ((r0 + r1) / 2.0, off + LABEL_GAP))
        }
        AxisOrientation::Left => {
            (Line::new(off, r0, off, r1), (off - LABEL_GAP * 1.25, (r0 + r1) / 2.0))
        }
        AxisOrientation::Depth => {
            let (sx, sy) = oblique_offset(r0);
            let (ex, ey) = oblique_offset(r1);
            (Line::new(sx, off + sy, ex, off + ey), (ex, off + ey - LABEL_GAP / 2.0))
        }
    };

    AxisFormat {
        orientation: placement.orientation,
        ticks,
        tick_labels,
        gridlines,
        axis_line,
        label_text: label.to_string(),
        label_anchor,
    }
}

/// Fixed decimals needed to tell ticks `step` apart.
fn tick_precision(step: f64) -> usize {
    if step <= 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.abs().log10().floor() as i32;
    exponent.min(0).unsigned_abs() as usize
}

/// Format a tick with fixed decimals and thousands separators.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

//! Chart pipeline.
//!
//! [`render_chart`] is a pure function of `(trials, label filter, axes, active
//! trial)`: it selects, scales, projects and lays out a fresh scene on every
//! call. [`ChartSurface`] owns the current render and binds pointer events to
//! it, discarding events aimed at superseded renders.
//!
//! # Example
//!
//! ```
//! use trialviz::chart::{render_chart, ChartInput, ChartView};
//! use trialviz::config::ChartConfig;
//! use trialviz::trial::{Axis, AxisSelection, Trial};
//!
//! let trials = vec![
//!     Trial::completed("a").with_value("duration", 5.0),
//!     Trial::completed("b").with_value("duration", 10.0),
//! ];
//! let axes = AxisSelection::single(Axis::metric("duration"));
//! let input = ChartInput::new(&trials, &axes);
//! let view = render_chart(&input, &ChartConfig::one_dimensional()).unwrap();
//! assert!(matches!(view, ChartView::Plot(_)));
//! ```

mod surface;


pub use surface::ChartSurface;

use serde::Serialize;

use crate::axis::{format_axis, AxisFormat};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::render::{
    project, write_placeholder_svg, write_svg, ChartLayout, RenderedPoint, Scene,
};
use crate::scale::{build_scale, LinearScale};
use crate::select::select_visible;
use crate::trial::{ActiveTrial, AxisSelection, Trial};

/// Message shown in place of points before any trial completes.
pub const EMPTY_MESSAGE: &str = "No completed trials yet";

/// Snapshot of everything a render depends on.
#[derive(Debug, Clone, Copy)]
pub struct ChartInput<'a> {
    pub trials: &'a [Trial],
    pub label_filter: &'a [String],
    pub axes: &'a AxisSelection,
    pub active: Option<ActiveTrial>,
}

impl<'a> ChartInput<'a> {
    pub fn new(trials: &'a [Trial], axes: &'a AxisSelection) -> Self {
        Self { trials, label_filter: &[], axes, active: None }
    }

    pub fn label_filter(mut self, label_filter: &'a [String]) -> Self {
        self.label_filter = label_filter;
        self
    }

    pub fn active(mut self, active: Option<ActiveTrial>) -> Self {
        self.active = active;
        self
    }
}

/// Placeholder drawn when there is no domain to scale: axis stubs, no points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyChart {
    pub canvas: (f64, f64),
    pub origin: (f64, f64),
    pub axis_formats: Vec<AxisFormat>,
    pub message: String,
}

/// Result of one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChartView {
    Plot(Scene),
    Empty(EmptyChart),
}

impl ChartView {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Self::Plot(scene) => Some(scene),
            Self::Empty(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Number of plotted points.
    pub fn point_count(&self) -> usize {
        self.scene().map_or(0, |s| s.points.len())
    }

    pub fn to_svg(&self, hovered: Option<usize>) -> String {
        match self {
            Self::Plot(scene) => write_svg(scene, hovered),
            Self::Empty(empty) => write_placeholder_svg(
                empty.canvas,
                empty.origin,
                &empty.axis_formats,
                &empty.message,
            ),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text listing of the plotted points, one per line.
    pub fn to_text(&self) -> String {
        let scene = match self {
            Self::Plot(scene) => scene,
            Self::Empty(empty) => return format!("{}\n", empty.message),
        };
        let names: Vec<&str> = scene.axes.iter().map(|a| a.name.as_str()).collect();
        let mut out = format!("{} points on {}\n", scene.points.len(), names.join(", "));
        for p in &scene.points {
            let values: Vec<String> = p.values.iter().map(|v| v.to_string()).collect();
            let mut line = format!("#{:<4} {:<16} {}", p.index(), p.trial.trial.id, values.join(" "));
            if p.point.classification.is_best() {
                line.push_str(" [best]");
            }
            if p.point.classification.is_active() {
                line.push_str(" [active]");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

fn canvas_and_origin(config: &ChartConfig) -> ((f64, f64), (f64, f64)) {
    (
        (config.canvas.width, config.canvas.height),
        (config.margins.left, config.margins.top),
    )
}

fn empty_chart(axes: &AxisSelection, layout: &ChartLayout, config: &ChartConfig) -> EmptyChart {
    let (canvas, origin) = canvas_and_origin(config);
    let axis_formats = axes
        .axes()
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let stub = LinearScale::new(0.0, layout.axis_range(i));
            format_axis(&stub, &axis.name, layout.axis_placement(i))
        })
        .collect();
    EmptyChart { canvas, origin, axis_formats, message: EMPTY_MESSAGE.to_string() }
}

/// Build the full scene for `input`.
///
/// No completed trials renders [`ChartView::Empty`]. A completed trial missing
/// any plotted axis fails the whole render with `MissingAxisValue`; no partial
/// chart is produced.
pub fn render_chart(input: &ChartInput<'_>, config: &ChartConfig) -> Result<ChartView> {
    config.validate()?;
    let axes = input.axes.axes();
    let layout = ChartLayout::new(config, axes.len());
    let selection = select_visible(input.trials, input.label_filter);

    let mut scales = Vec::with_capacity(axes.len());
    for (i, axis) in axes.iter().enumerate() {
        match build_scale(&axis.name, &selection.completed, layout.axis_range(i)) {
            Ok(scale) => scales.push(scale),
            Err(ChartError::EmptyDomain { axis }) => {
                log::info!("no completed trials for '{axis}', rendering empty chart");
                return Ok(ChartView::Empty(empty_chart(input.axes, &layout, config)));
            }
            Err(e) => return Err(e),
        }
    }

    let active = selection.reconcile_active(input.active);
    let stale_active = if active.is_none() { input.active } else { None };
    if let Some(stale) = stale_active {
        log::debug!("active trial {} is not visible in this render", stale.index);
    }

    let points = selection
        .visible
        .iter()
        .map(|trial| {
            let point = project(trial, &scales, axes, active)?;
            let values = axes
                .iter()
                .map(|a| trial.require_value(&a.name))
                .collect::<Result<Vec<_>>>()?;
            let position = layout.place(&point.coords);
            let radius = config.radius.radius(point.classification, false);
            Ok(RenderedPoint { trial: trial.clone(), point, values, position, radius })
        })
        .collect::<Result<Vec<_>>>()?;

    let axis_formats = axes
        .iter()
        .zip(&scales)
        .enumerate()
        .map(|(i, (axis, scale))| format_axis(scale, &axis.name, layout.axis_placement(i)))
        .collect();

    let (canvas, origin) = canvas_and_origin(config);
    log::debug!("rendered {} points on {} axes", points.len(), axes.len());

    Ok(ChartView::Plot(Scene {
        canvas,
        origin,
        layout,
        axes: axes.to_vec(),
        axis_formats,
        points,
        radius: config.radius,
        popup: config.popup,
        stale_active,
    }))
}

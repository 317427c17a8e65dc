//! Chart geometry configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::render::RadiusPolicy;
use crate::scale::DEFAULT_TICK_COUNT;

const DEFAULT_CANVAS_WIDTH: f64 = 1024.0;
const STRIP_CANVAS_HEIGHT: f64 = 100.0;
const SCATTER_CANVAS_HEIGHT: f64 = 480.0;

/// Outer drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// Space reserved around the plot area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 20.0, right: 20.0, bottom: 40.0, left: 70.0 }
    }
}

/// Size of the hover popup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PopupSize {
    fn default() -> Self {
        Self { width: 200.0, height: 30.0 }
    }
}

/// Chart layout and styling settings.
///
/// Every field is optional in YAML; missing fields take the 1-D strip
/// defaults.
///
/// ```yaml
/// canvas: { width: 1024, height: 480 }
/// margins: { top: 20, right: 20, bottom: 40, left: 70 }
/// ticks: 10
/// radius: { default: 3, active: 6 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: Canvas,
    pub margins: Margins,
    /// Target tick count per axis
    pub ticks: usize,
    pub radius: RadiusPolicy,
    pub popup: PopupSize,
    /// Gridline length on 1-D strips, upward from the axis
    pub strip_grid_length: f64,
    /// Depth of the receding axis on 3-D charts, before foreshortening
    pub depth: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::one_dimensional()
    }
}

impl ChartConfig {
    /// Wide, short strip for single-axis charts.
    pub fn one_dimensional() -> Self {
        Self {
            canvas: Canvas { width: DEFAULT_CANVAS_WIDTH, height: STRIP_CANVAS_HEIGHT },
            margins: Margins::default(),
            ticks: DEFAULT_TICK_COUNT,
            radius: RadiusPolicy::default(),
            popup: PopupSize::default(),
            strip_grid_length: 20.0,
            depth: 200.0,
        }
    }

    /// Taller canvas for 2-D and 3-D scatter plots.
    pub fn scatter() -> Self {
        Self {
            canvas: Canvas { width: DEFAULT_CANVAS_WIDTH, height: SCATTER_CANVAS_HEIGHT },
            ..Self::one_dimensional()
        }
    }

    /// Defaults suited to a chart with `dimensions` axes.
    pub fn for_dimensions(dimensions: usize) -> Self {
        if dimensions <= 1 {
            Self::one_dimensional()
        } else {
            Self::scatter()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| ChartError::read_failed(path, e))?;
        log::debug!("loaded chart config from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// Width of the plot area inside the margins.
    pub fn plot_width(&self) -> f64 {
        self.canvas.width - self.margins.left - self.margins.right
    }

    /// Height of the plot area inside the margins.
    pub fn plot_height(&self) -> f64 {
        self.canvas.height - self.margins.top - self.margins.bottom
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.plot_width() > 0.0) {
            return Err(ChartError::config(
                "canvas.width",
                format!("plot width {} leaves no room inside the margins", self.plot_width()),
            ));
        }
        if !(self.plot_height() > 0.0) {
            return Err(ChartError::config(
                "canvas.height",
                format!("plot height {} leaves no room inside the margins", self.plot_height()),
            ));
        }
        if self.ticks == 0 {
            return Err(ChartError::config("ticks", "must be at least 1"));
        }
        if !(self.radius.default > 0.0) || !(self.radius.active > 0.0) {
            return Err(ChartError::config("radius", "radii must be positive"));
        }
        if self.depth < 0.0 {
            return Err(ChartError::config("depth", "must not be negative"));
        }
        Ok(())
    }
}

//! trialviz: hyperparameter trial charts
//!
//! Plots the completed trials of a hyperparameter search against one to three
//! metric or parameter axes and turns pointer input into hover and selection
//! requests for the host.
//!
//! # Pipeline
//!
//! - [`select`]: completed and label-filtered trials, original indices kept
//! - [`scale`]: zero-based linear scales and nice ticks
//! - [`render`]: projection, classification and the retained scene
//! - [`axis`]: tick labels, gridlines and axis placement
//! - [`interaction`]: hover/select controller, the axis menu and the
//!   metric/parameter picker
//! - [`chart`]: the pure render pipeline and the event-guarding surface
//! - [`feed`]: cancellable trial loading
//!
//! # Example
//!
//! ```
//! use trialviz::chart::{ChartInput, ChartSurface};
//! use trialviz::config::ChartConfig;
//! use trialviz::interaction::{ChartMessage, PointerEvent};
//! use trialviz::trial::{Axis, AxisSelection, Trial};
//!
//! let trials = vec![
//!     Trial::completed("a").with_value("duration", 5.0),
//!     Trial::completed("b").with_value("duration", 10.0),
//! ];
//! let axes = AxisSelection::single(Axis::metric("duration"));
//!
//! let mut messages: Vec<ChartMessage> = Vec::new();
//! let mut surface = ChartSurface::new();
//! surface
//!     .render(&ChartInput::new(&trials, &axes), &ChartConfig::one_dimensional(), &mut messages)
//!     .unwrap();
//!
//! let target = surface.target(1);
//! surface.dispatch(&mut PointerEvent::click(target), &mut messages);
//! assert!(matches!(&messages[0], ChartMessage::Select(s) if s.index == 1));
//! ```

pub mod axis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod scale;
pub mod select;
pub mod trial;

pub use chart::{render_chart, ChartInput, ChartSurface, ChartView};
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use trial::{ActiveTrial, Axis, AxisKind, AxisSelection, Trial, TrialStatus};

//! Interaction controller.
//!
//! Translates pointer events on the chart and keyboard events on the axis
//! menu into outbound messages. Hover and selection state belong to the host:
//! the controller only *requests* changes through [`TrialHandlers`] and never
//! writes them itself.
//!
//! # Chart states
//!
//! ```text
//!           pointer_enter(i)            pointer_leave
//!   Idle ───────────────────▶ Hovering(i) ─────────────▶ Idle
//!                               │     ▲
//!                               └─────┘ click(i)   (emits select_trial)
//! ```
//!
//! Every leave that follows an enter emits a cleared hover, clicks included.
//!
//! The companion [`ListSearch`] menu has its own `Closed`/`Open` machine.
//! [`AxisPicker`] pairs a metric menu with a parameter menu and yields the
//! axes of a two-dimensional chart once both are chosen.

mod controller;
mod menu;
mod picker;


pub use controller::{ChartController, ControllerState};
pub use menu::{Key, ListSearch, MenuItem, MenuSelection, MenuState};
pub use picker::AxisPicker;

use serde::Serialize;

use crate::render::{AxisDescriptor, BoundingBox};
use crate::trial::Trial;

/// Render generation plus trial index a pointer event is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerTarget {
    pub generation: u64,
    pub index: usize,
}

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Enter(PointerTarget),
    Leave(PointerTarget),
    Click(PointerTarget),
    /// Pointer left the whole chart area
    LeaveSurface,
    /// Click on the page outside any chart element
    Background,
}

/// A pointer event as dispatched by the host.
///
/// Handlers that consume an event stop its propagation so the host does not
/// treat it as a second, unrelated trigger (e.g. an outside-click dismissal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub action: PointerAction,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(action: PointerAction) -> Self {
        Self { action, propagation_stopped: false }
    }

    pub fn enter(target: PointerTarget) -> Self {
        Self::new(PointerAction::Enter(target))
    }

    pub fn leave(target: PointerTarget) -> Self {
        Self::new(PointerAction::Leave(target))
    }

    pub fn click(target: PointerTarget) -> Self {
        Self::new(PointerAction::Click(target))
    }

    pub fn leave_surface() -> Self {
        Self::new(PointerAction::LeaveSurface)
    }

    pub fn background_click() -> Self {
        Self::new(PointerAction::Background)
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn target(&self) -> Option<PointerTarget> {
        match self.action {
            PointerAction::Enter(t) | PointerAction::Leave(t) | PointerAction::Click(t) => Some(t),
            PointerAction::LeaveSurface | PointerAction::Background => None,
        }
    }
}

/// Hover notification. All fields are `None` when the hover ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverEvent {
    pub trial: Option<Trial>,
    pub bounding_box: Option<BoundingBox>,
    pub index: Option<usize>,
    pub axes: Vec<AxisDescriptor>,
}

impl HoverEvent {
    pub fn cleared() -> Self {
        Self { trial: None, bounding_box: None, index: None, axes: Vec::new() }
    }

    pub fn is_cleared(&self) -> bool {
        self.index.is_none()
    }
}

/// Request to make a trial the active trial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectEvent {
    pub index: usize,
    pub trial: Trial,
}

/// Outbound requests from the chart to the host.
pub trait TrialHandlers {
    fn hover_trial(&mut self, event: HoverEvent);

    fn select_trial(&mut self, event: SelectEvent);

    /// The active trial is no longer visible and should be cleared.
    fn clear_selection(&mut self) {}
}

/// Recorded outbound message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartMessage {
    Hover(HoverEvent),
    Select(SelectEvent),
    ClearSelection,
}

/// Queue messages for hosts that poll instead of registering callbacks.
impl TrialHandlers for Vec<ChartMessage> {
    fn hover_trial(&mut self, event: HoverEvent) {
        self.push(ChartMessage::Hover(event));
    }

    fn select_trial(&mut self, event: SelectEvent) {
        self.push(ChartMessage::Select(event));
    }

    fn clear_selection(&mut self) {
        self.push(ChartMessage::ClearSelection);
    }
}

/// Hover callback type.
pub type HoverCallback = Box<dyn FnMut(HoverEvent)>;

/// Selection callback type.
pub type SelectCallback = Box<dyn FnMut(SelectEvent)>;

/// Closure-backed handlers.
pub struct Callbacks {
    hover: HoverCallback,
    select: SelectCallback,
    clear: Option<Box<dyn FnMut()>>,
}

impl Callbacks {
    pub fn new(hover: HoverCallback, select: SelectCallback) -> Self {
        Self { hover, select, clear: None }
    }

    pub fn on_clear(mut self, clear: Box<dyn FnMut()>) -> Self {
        self.clear = Some(clear);
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks").field("clear", &self.clear.is_some()).finish_non_exhaustive()
    }
}

impl TrialHandlers for Callbacks {
    fn hover_trial(&mut self, event: HoverEvent) {
        (self.hover)(event);
    }

    fn select_trial(&mut self, event: SelectEvent) {
        (self.select)(event);
    }

    fn clear_selection(&mut self) {
        if let Some(clear) = self.clear.as_mut() {
            clear();
        }
    }
}

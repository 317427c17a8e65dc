//! Chart pointer state machine.

use super::{HoverEvent, PointerAction, PointerEvent, SelectEvent, TrialHandlers};
use crate::render::Scene;

/// Pointer state over the chart surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ControllerState {
    #[default]
    Idle,
    /// Pointer is over the point with this trial index
    Hovering(usize),
}

/// Maps pointer events on one scene to hover and selection requests.
///
/// Events are handled synchronously, one at a time, in dispatch order. There is
/// no queue: rapid hovering emits one callback per event.
#[derive(Debug, Clone, Default)]
pub struct ChartController {
    state: ControllerState,
}

impl ChartController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn hovered(&self) -> Option<usize> {
        match self.state {
            ControllerState::Hovering(index) => Some(index),
            ControllerState::Idle => None,
        }
    }

    /// The hover popup is shown exactly while a point is hovered.
    pub fn popup_visible(&self) -> bool {
        self.hovered().is_some()
    }

    /// Forget hover state; used when the scene is torn down.
    pub fn reset(&mut self) {
        self.state = ControllerState::Idle;
    }

    /// Dispatch one pointer event. Returns whether it was consumed.
    pub fn handle<H: TrialHandlers>(
        &mut self,
        scene: &Scene,
        event: &mut PointerEvent,
        handlers: &mut H,
    ) -> bool {
        match event.action {
            PointerAction::Enter(target) => self.pointer_enter(scene, target.index, handlers),
            PointerAction::Leave(_) | PointerAction::LeaveSurface => self.pointer_leave(handlers),
            PointerAction::Click(target) => {
                let consumed = self.click(scene, target.index, handlers);
                if consumed {
                    event.stop_propagation();
                }
                consumed
            }
            PointerAction::Background => false,
        }
    }

    /// `Idle | Hovering -> Hovering(index)`, emitting the hovered trial.
    ///
    /// Fires even when `index` is already the active trial.
    pub fn pointer_enter<H: TrialHandlers>(
        &mut self,
        scene: &Scene,
        index: usize,
        handlers: &mut H,
    ) -> bool {
        let Some(point) = scene.point(index) else {
            log::debug!("pointer entered unknown point {index}");
            return false;
        };
        self.state = ControllerState::Hovering(index);
        handlers.hover_trial(HoverEvent {
            trial: Some(point.trial.trial.clone()),
            bounding_box: scene.bounding_box(index, Some(index)),
            index: Some(index),
            axes: scene.axis_descriptors(index),
        });
        true
    }

    /// `Hovering -> Idle`, emitting a cleared hover. No-op while idle.
    pub fn pointer_leave<H: TrialHandlers>(&mut self, handlers: &mut H) -> bool {
        if self.state == ControllerState::Idle {
            return false;
        }
        self.state = ControllerState::Idle;
        handlers.hover_trial(HoverEvent::cleared());
        true
    }

    /// Commit `index` as the requested active trial.
    ///
    /// The pointer is still over the point, so the state stays
    /// `Hovering(index)` until the matching leave clears it.
    pub fn click<H: TrialHandlers>(&mut self, scene: &Scene, index: usize, handlers: &mut H) -> bool {
        let Some(point) = scene.point(index) else {
            return false;
        };
        self.state = ControllerState::Hovering(index);
        handlers.select_trial(SelectEvent { index, trial: point.trial.trial.clone() });
        true
    }
}

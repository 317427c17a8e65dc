//! Retained chart surface: current render plus its pointer bindings.

use super::{render_chart, ChartInput, ChartView};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::interaction::{ChartController, HoverEvent, PointerEvent, PointerTarget, TrialHandlers};
use crate::render::{Popup, Scene};

/// Owns the most recent render.
///
/// Every [`render`](Self::render) tears the previous scene down before
/// building the next one and bumps the generation. Pointer targets carry the
/// generation they were created for, so events from a superseded scene are
/// dropped instead of reaching the new one.
#[derive(Debug, Default)]
pub struct ChartSurface {
    generation: u64,
    view: Option<ChartView>,
    controller: ChartController,
}

impl ChartSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the chart for `input`.
    ///
    /// A hover on the previous scene is cleared first, since its leave event
    /// will carry the old generation and be dropped. On error the surface is
    /// left empty. When the host's active trial is no longer visible,
    /// `clear_selection` is requested.
    pub fn render<H: TrialHandlers>(
        &mut self,
        input: &ChartInput<'_>,
        config: &ChartConfig,
        handlers: &mut H,
    ) -> Result<&ChartView> {
        if self.controller.hovered().is_some() {
            handlers.hover_trial(HoverEvent::cleared());
        }
        self.view = None;
        self.controller.reset();
        self.generation += 1;

        let view = render_chart(input, config)?;
        if view.scene().is_some_and(|s| s.stale_active.is_some()) {
            handlers.clear_selection();
        }
        Ok(&*self.view.insert(view))
    }

    /// Route a pointer event to the current scene.
    ///
    /// Returns whether the event was consumed.
    pub fn dispatch<H: TrialHandlers>(&mut self, event: &mut PointerEvent, handlers: &mut H) -> bool {
        if let Some(target) = event.target() {
            if target.generation != self.generation {
                log::debug!(
                    "dropping event for generation {} (current {})",
                    target.generation,
                    self.generation
                );
                return false;
            }
        }
        match self.view.as_ref().and_then(ChartView::scene) {
            Some(scene) => self.controller.handle(scene, event, handlers),
            None => false,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pointer target for `index` in the current render.
    pub fn target(&self, index: usize) -> PointerTarget {
        PointerTarget { generation: self.generation, index }
    }

    pub fn view(&self) -> Option<&ChartView> {
        self.view.as_ref()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.view.as_ref().and_then(ChartView::scene)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.controller.hovered()
    }

    pub fn popup(&self) -> Option<Popup> {
        self.scene().map(|s| s.popup_for(self.hovered()))
    }

    pub fn to_svg(&self) -> Option<String> {
        self.view.as_ref().map(|v| v.to_svg(self.hovered()))
    }

    /// Pointer target under a canvas position, if any.
    pub fn hit(&self, x: f64, y: f64) -> Option<PointerTarget> {
        let index = self.scene()?.point_at(x, y, self.hovered())?;
        Some(self.target(index))
    }
}

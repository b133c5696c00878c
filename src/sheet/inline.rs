use crate::{
    animation::animator::ProgressAnimator,
    foundation::core::{Rect, Vec2},
    foundation::error::MotionResult,
    foundation::math::clamp01,
    sheet::config::SheetConfig,
    sheet::state::{AnimationRequest, PresentationController, PresentationState, SheetPhase},
    sheet::visuals::SheetVisuals,
    transition::measure::BoundsPreference,
};

/// One sampled frame of an inline sheet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SheetFrame {
    pub time: f64,
    /// Progress as drawn this frame, clamped to `[0, 1]`.
    pub presented: f64,
    /// Progress the sheet is heading to.
    pub model: f64,
    pub is_presented: bool,
    pub phase: SheetPhase,
    pub visuals: SheetVisuals,
    /// Overlay offset, present only while the overlay is visible.
    pub overlay_translation: Option<Vec2>,
}

/// A sheet attached to host content: the presentation controller, the frame driver
/// animating its progress, and the last measured bounds of its nested content.
///
/// All methods take the current time in seconds; the host calls them from its UI
/// loop in event order and samples [`InlineSheet::frame`] once per rendered frame.
#[derive(Clone, Debug)]
pub struct InlineSheet {
    controller: PresentationController,
    animator: ProgressAnimator,
    overlay_bounds: BoundsPreference,
}

impl InlineSheet {
    /// Attach a sheet whose binding currently reads `is_presented`. The sheet starts
    /// at rest on that side.
    pub fn new(config: SheetConfig, is_presented: bool) -> MotionResult<Self> {
        let progress = if is_presented { 1.0 } else { 0.0 };
        let controller = PresentationController::with_state(
            config,
            PresentationState {
                progress,
                is_presented,
                ..PresentationState::default()
            },
        )?;
        Ok(Self {
            controller,
            animator: ProgressAnimator::new(progress),
            overlay_bounds: BoundsPreference::default(),
        })
    }

    pub fn controller(&self) -> &PresentationController {
        &self.controller
    }

    pub fn animator(&self) -> &ProgressAnimator {
        &self.animator
    }

    /// Current value of the host's presentation binding.
    pub fn is_presented(&self) -> bool {
        self.controller.is_presented()
    }

    pub fn set_presented(&mut self, presented: bool, now: f64) {
        let req = self.controller.set_presented(presented);
        self.dispatch(req, now);
    }

    pub fn toggle(&mut self, now: f64) {
        self.set_presented(!self.is_presented(), now);
    }

    /// Gesture update carrying the recognizer's cumulative translation.
    pub fn drag_changed(&mut self, translation: f64, now: f64) {
        let req = self.controller.on_drag_changed(translation);
        self.dispatch(req, now);
    }

    /// Gesture update carrying an already incremental displacement.
    pub fn drag_update(&mut self, delta_y: f64, now: f64) {
        let req = self.controller.on_drag_update(delta_y);
        self.dispatch(req, now);
    }

    pub fn drag_ended(&mut self, now: f64) {
        let req = self.controller.on_drag_end();
        self.dispatch(Some(req), now);
    }

    /// Record the nested content's measured bounds in screen coordinates.
    pub fn measure_overlay(&mut self, bounds: Rect) {
        if self.overlay_bounds.reduce(bounds) {
            tracing::trace!(?bounds, "overlay bounds changed");
        }
    }

    pub fn phase(&self) -> SheetPhase {
        self.controller
            .phase(self.animator.value(), self.animator.is_settled())
    }

    /// Advance the driver to `now` and describe what to draw.
    pub fn frame(&mut self, now: f64) -> SheetFrame {
        // Spring overshoot stays in the animator; drawing never leaves [0, 1].
        let presented = clamp01(self.animator.tick(now));
        let config = self.controller.config();
        let visuals = SheetVisuals::from_progress(presented, &config.visuals)
            .with_overlay_bounds(self.overlay_bounds.value());
        let overlay_translation = visuals
            .overlay
            .map(|overlay| overlay.translation(&config.viewport));
        let state = self.controller.state();
        SheetFrame {
            time: now,
            presented,
            model: state.progress,
            is_presented: state.is_presented,
            phase: self.phase(),
            visuals,
            overlay_translation,
        }
    }

    fn dispatch(&mut self, req: Option<AnimationRequest>, now: f64) {
        if let Some(req) = req {
            self.animator.animate_to(req.target, req.transaction, now);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/inline.rs"]
mod tests;

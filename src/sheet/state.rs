use crate::{
    animation::curve::Transaction,
    foundation::error::MotionResult,
    foundation::math::is_strictly_inside_unit,
    gesture::drag::DragAccumulator,
    sheet::config::SheetConfig,
};

/// Model state of an inline sheet.
///
/// `progress` is the *model* value: it jumps straight to where the sheet is going and
/// the animator interpolates the drawn value toward it. Once the last animation
/// settles, `is_presented` holds exactly when `progress` is 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PresentationState {
    pub progress: f64,
    pub is_presented: bool,
    #[serde(default)]
    pub drag: DragAccumulator,
}

impl PresentationState {
    pub fn drag_accumulated(&self) -> f64 {
        self.drag.accumulated()
    }

    pub fn drag_delta(&self) -> f64 {
        self.drag.delta()
    }
}

/// Where a sheet is in its lifecycle, as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetPhase {
    Closed,
    Opening,
    Open,
    Closing,
    Dragging,
}

/// Instruction for the frame driver: animate the presented progress to `target`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AnimationRequest {
    pub target: f64,
    pub transaction: Transaction,
}

/// Reconciles the presentation flag, live drag updates and drag release into a
/// single progress value.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationController {
    config: SheetConfig,
    state: PresentationState,
}

impl PresentationController {
    pub fn new(config: SheetConfig) -> MotionResult<Self> {
        Self::with_state(config, PresentationState::default())
    }

    /// Resume from a previously captured state. `progress` is clamped into `[0, 1]`.
    pub fn with_state(config: SheetConfig, mut state: PresentationState) -> MotionResult<Self> {
        config.validate()?;
        state.progress = if state.progress.is_finite() {
            state.progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn is_presented(&self) -> bool {
        self.state.is_presented
    }

    pub fn is_dragging(&self) -> bool {
        self.state.drag.is_active()
    }

    /// Open or close programmatically with the toggle curve.
    ///
    /// Always overrides whatever motion is in flight and ends any active gesture;
    /// only returns `None` when the sheet already rests on the requested side.
    pub fn set_presented(&mut self, presented: bool) -> Option<AnimationRequest> {
        let target = if presented { 1.0 } else { 0.0 };
        if self.state.drag.is_active() {
            let total = self.state.drag.end();
            tracing::debug!(total_translation = total, "toggle cancelled drag");
        }
        if self.state.is_presented == presented && self.state.progress == target {
            return None;
        }
        tracing::debug!(presented, from = self.state.progress, "sheet toggled");
        self.state.is_presented = presented;
        self.state.progress = target;
        Some(AnimationRequest {
            target,
            transaction: Transaction::new(self.config.toggle),
        })
    }

    /// Apply an incremental vertical drag displacement. Upward motion (negative
    /// `delta_y`) opens the sheet.
    ///
    /// Candidates that would reach or leave the `[0, 1]` bounds are dropped outright
    /// rather than clamped, so only a release can fully open or close the sheet.
    pub fn on_drag_update(&mut self, delta_y: f64) -> Option<AnimationRequest> {
        if !delta_y.is_finite() {
            return None;
        }
        self.state.drag.record_delta(delta_y);
        self.apply_drag_delta(delta_y)
    }

    /// Feed the recognizer's cumulative translation; converts it into an incremental
    /// delta and applies it.
    pub fn on_drag_changed(&mut self, translation: f64) -> Option<AnimationRequest> {
        if !translation.is_finite() {
            return None;
        }
        let delta = self.state.drag.update(translation);
        self.apply_drag_delta(delta)
    }

    fn apply_drag_delta(&mut self, delta_y: f64) -> Option<AnimationRequest> {
        if delta_y == 0.0 {
            return None;
        }
        let candidate = self.state.progress - delta_y / self.config.viewport.height();
        if !is_strictly_inside_unit(candidate) {
            tracing::debug!(delta_y, candidate, "drag update rejected at bounds");
            return None;
        }
        tracing::debug!(delta_y, candidate, "drag update accepted");
        self.state.progress = candidate;
        Some(AnimationRequest {
            target: candidate,
            transaction: Transaction::interactive(self.config.drag_spring),
        })
    }

    /// Release: snap open at or above the threshold, closed below it.
    pub fn on_drag_end(&mut self) -> AnimationRequest {
        let total = self.state.drag.end();
        let open = self.state.progress >= self.config.open_threshold;
        tracing::debug!(
            progress = self.state.progress,
            threshold = self.config.open_threshold,
            total_translation = total,
            open,
            "drag released"
        );
        self.state.is_presented = open;
        self.state.progress = if open { 1.0 } else { 0.0 };
        AnimationRequest {
            target: self.state.progress,
            transaction: Transaction::new(self.config.snap),
        }
    }

    /// Lifecycle phase given the currently drawn progress and whether the driver has
    /// come to rest.
    pub fn phase(&self, presented: f64, settled: bool) -> SheetPhase {
        if self.is_dragging() {
            return SheetPhase::Dragging;
        }
        if settled {
            return if self.state.is_presented {
                SheetPhase::Open
            } else {
                SheetPhase::Closed
            };
        }
        if self.state.progress >= presented {
            SheetPhase::Opening
        } else {
            SheetPhase::Closing
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/state.rs"]
mod tests;

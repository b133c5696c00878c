use std::str::FromStr;

use crate::{
    foundation::core::{Affine, Rect, Vec2, Viewport},
    foundation::error::MotionError,
    transition::measure::MeasureSink,
};

/// Screen edge content leaves through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}

impl FromStr for Edge {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "leading" | "left" => Ok(Self::Leading),
            "trailing" | "right" => Ok(Self::Trailing),
            "" => Err(MotionError::validation("edge must be non-empty")),
            other => Err(MotionError::validation(format!("unknown edge '{other}'"))),
        }
    }
}

/// Translation that carries content `progress` of the way off the given edge.
///
/// Leading and top offsets come from the content's own measured extent, trailing and
/// bottom from the screen's. Until the content is measured its bounds are the zero
/// rectangle, which leaves leading/top translations at zero. `progress` is not clamped,
/// so spring overshoot carries through.
pub fn compute_translation(edge: Edge, progress: f64, screen: Rect, content: Rect) -> Vec2 {
    let target = match edge {
        Edge::Trailing => Vec2::new(screen.max_x(), 0.0),
        Edge::Leading => Vec2::new(-content.max_x(), 0.0),
        Edge::Top => Vec2::new(0.0, -content.max_y()),
        Edge::Bottom => Vec2::new(0.0, screen.max_y()),
    };
    target * progress
}

/// Screen-out modifier state: an edge, how far along the exit is, and the last
/// bounds reported for the content it moves.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenOut {
    pub edge: Edge,
    pub progress: f64,
    #[serde(default)]
    pub content_bounds: Rect,
}

impl ScreenOut {
    pub fn new(edge: Edge, progress: f64) -> Self {
        Self {
            edge,
            progress,
            content_bounds: Rect::ZERO,
        }
    }

    pub fn with_progress(self, progress: f64) -> Self {
        Self { progress, ..self }
    }

    pub fn is_measured(&self) -> bool {
        self.content_bounds != Rect::ZERO
    }

    pub fn translation(&self, viewport: &Viewport) -> Vec2 {
        compute_translation(
            self.edge,
            self.progress,
            viewport.bounds,
            self.content_bounds,
        )
    }

    pub fn affine(&self, viewport: &Viewport) -> Affine {
        Affine::translate(self.translation(viewport))
    }
}

impl MeasureSink for ScreenOut {
    fn measured(&mut self, bounds: Rect) {
        self.content_bounds = bounds;
    }
}

/// The two ends of a screen-out transition: `active` is fully off-screen, `identity`
/// is untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionPair {
    pub active: ScreenOut,
    pub identity: ScreenOut,
}

/// Build the enter/exit transition that moves content fully past `edge`.
pub fn screen_out(edge: Edge) -> TransitionPair {
    TransitionPair {
        active: ScreenOut::new(edge, 1.0),
        identity: ScreenOut::new(edge, 0.0),
    }
}

impl TransitionPair {
    /// Modifier state `t` of the way through an insertion (off-screen to in place).
    pub fn insertion(&self, t: f64) -> ScreenOut {
        self.between(self.active, self.identity, t)
    }

    /// Modifier state `t` of the way through a removal (in place to off-screen).
    pub fn removal(&self, t: f64) -> ScreenOut {
        self.between(self.identity, self.active, t)
    }

    fn between(&self, from: ScreenOut, to: ScreenOut, t: f64) -> ScreenOut {
        let progress = from.progress + (to.progress - from.progress) * t;
        ScreenOut {
            edge: self.identity.edge,
            progress,
            content_bounds: self.identity.content_bounds,
        }
    }
}

impl MeasureSink for TransitionPair {
    fn measured(&mut self, bounds: Rect) {
        self.active.measured(bounds);
        self.identity.measured(bounds);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/edge.rs"]
mod tests;

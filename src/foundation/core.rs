use crate::foundation::error::{MotionError, MotionResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Screen bounds the sheet and edge transitions are laid out against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub bounds: Rect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, 390.0, 844.0),
        }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> MotionResult<Self> {
        Self::from_bounds(Rect::new(0.0, 0.0, width, height))
    }

    pub fn from_bounds(bounds: Rect) -> MotionResult<Self> {
        let v = Self { bounds };
        v.validate()?;
        Ok(v)
    }

    pub fn validate(&self) -> MotionResult<()> {
        let b = self.bounds;
        if ![b.x0, b.y0, b.x1, b.y1].iter().all(|v| v.is_finite()) {
            return Err(MotionError::validation("viewport bounds must be finite"));
        }
        if self.width() <= 0.0 {
            return Err(MotionError::validation("viewport width must be > 0"));
        }
        if self.height() <= 0.0 {
            return Err(MotionError::validation("viewport height must be > 0"));
        }
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    pub fn max_x(&self) -> f64 {
        self.bounds.max_x()
    }

    pub fn max_y(&self) -> f64 {
        self.bounds.max_y()
    }
}

/// A point in unit space, `(0, 0)` being the top-left and `(1, 1)` the bottom-right
/// corner of whatever rectangle it is resolved against.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP_LEADING: Self = Self::new(0.0, 0.0);
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const CENTER: Self = Self::new(0.5, 0.5);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn resolve(self, size: Size) -> Point {
        Point::new(self.x * size.width, self.y * size.height)
    }
}

impl Default for UnitPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

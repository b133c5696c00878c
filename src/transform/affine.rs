//! Affine transform helpers.

use crate::foundation::core::{Affine, Vec2};

/// Translate vertically by `dy`.
#[inline]
pub fn offset_y(dy: f64) -> Affine {
    Affine::translate(Vec2::new(0.0, dy))
}

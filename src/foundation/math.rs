/// Clamp scalar value to the normalized range `[0, 1]`.
#[inline]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation, unclamped so spring overshoot survives.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `true` when `x` lies strictly inside the open interval `(0, 1)`.
#[inline]
pub fn is_strictly_inside_unit(x: f64) -> bool {
    x > 0.0 && x < 1.0
}

pub(crate) fn ensure_finite(name: &str, v: f64) -> crate::MotionResult<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(crate::MotionError::validation(format!(
            "{name} must be finite"
        )))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

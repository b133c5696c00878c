/// Timing curves for fixed-duration animations.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// Cubic bézier `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Cubic bézier `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Cubic bézier `(0.42, 0, 0.58, 1)`; the curve used for toggles and snaps.
    EaseInOut,
    InOutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }
}

/// Evaluate the `y` of a unit cubic bézier at horizontal position `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f64, b: f64, c: f64, t: f64| ((a * t + b) * t + c) * t;
    let slope = |a: f64, b: f64, c: f64, t: f64| (3.0 * a * t + 2.0 * b) * t + c;

    let mut t = x;
    let mut solved = false;
    for _ in 0..8 {
        let err = sample(ax, bx, cx, t) - x;
        if err.abs() < 1e-9 {
            solved = true;
            break;
        }
        let d = slope(ax, bx, cx, t);
        if d.abs() < 1e-9 {
            break;
        }
        t = (t - err / d).clamp(0.0, 1.0);
    }

    if !solved {
        // Newton stalled on a flat segment; bisect instead.
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..32 {
            let err = sample(ax, bx, cx, t) - x;
            if err.abs() < 1e-9 {
                break;
            }
            if err > 0.0 {
                hi = t;
            } else {
                lo = t;
            }
            t = 0.5 * (lo + hi);
        }
    }

    sample(ay, by, cy, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

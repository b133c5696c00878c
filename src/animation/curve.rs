use crate::{
    animation::{ease::Ease, spring::SpringSpec},
    foundation::error::{MotionError, MotionResult},
};

/// Default duration of a plain ease-in-out toggle, in seconds.
pub const DEFAULT_EASE_DURATION: f64 = 0.35;

/// How a value travels from where it is to where it is going.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationCurve {
    /// Fixed-duration interpolation shaped by an easing curve.
    Tween { duration: f64, ease: Ease },
    /// Physically simulated motion; runs until the spring comes to rest.
    Spring(SpringSpec),
}

impl AnimationCurve {
    pub fn ease_in_out(duration: f64) -> Self {
        Self::Tween {
            duration,
            ease: Ease::EaseInOut,
        }
    }

    pub fn validate(&self) -> MotionResult<()> {
        match self {
            Self::Tween { duration, .. } => {
                if !(duration.is_finite() && *duration > 0.0) {
                    return Err(MotionError::animation(
                        "tween duration must be finite and > 0",
                    ));
                }
                Ok(())
            }
            Self::Spring(spec) => spec.validate(),
        }
    }
}

impl Default for AnimationCurve {
    fn default() -> Self {
        Self::ease_in_out(DEFAULT_EASE_DURATION)
    }
}

/// An animation curve plus the context it was requested in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transaction {
    pub curve: AnimationCurve,
    /// Set for updates driven by a live gesture; the animator then carries the
    /// current velocity into the new animation instead of starting from rest.
    #[serde(default)]
    pub continuous: bool,
}

impl Transaction {
    pub fn new(curve: AnimationCurve) -> Self {
        Self {
            curve,
            continuous: false,
        }
    }

    pub fn ease_in_out(duration: f64) -> Self {
        Self::new(AnimationCurve::ease_in_out(duration))
    }

    pub fn interactive(spring: SpringSpec) -> Self {
        Self {
            curve: AnimationCurve::Spring(spring),
            continuous: true,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/curve.rs"]
mod tests;

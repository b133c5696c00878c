use crate::foundation::error::{MotionError, MotionResult};

/// Position tolerance (in progress units) below which a spring is considered at rest.
pub const REST_DISPLACEMENT: f64 = 1e-3;
/// Velocity tolerance (progress units per second) below which a spring is considered at rest.
pub const REST_VELOCITY: f64 = 1e-3;

/// Damped harmonic oscillator parameters (`m x'' + c x' + k x = 0`).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringSpec {
    #[serde(default = "default_mass")]
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
}

fn default_mass() -> f64 {
    1.0
}

impl SpringSpec {
    /// Spring used while a drag is in flight: heavily over-damped, so fast flicks
    /// never overshoot.
    pub const INTERACTIVE: Self = Self {
        mass: 1.0,
        stiffness: 30.0,
        damping: 20.0,
    };

    pub fn new(mass: f64, stiffness: f64, damping: f64) -> MotionResult<Self> {
        let s = Self {
            mass,
            stiffness,
            damping,
        };
        s.validate()?;
        Ok(s)
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(MotionError::animation("spring mass must be finite and > 0"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(MotionError::animation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(MotionError::animation(
                "spring damping must be finite and >= 0",
            ));
        }
        Ok(())
    }

    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement from the rest position and velocity after `t` seconds, given the
    /// initial displacement `x0` and velocity `v0`.
    pub fn state_at(&self, t: f64, x0: f64, v0: f64) -> (f64, f64) {
        let t = t.max(0.0);
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            let b = v0 + w0 * x0;
            let e = (-w0 * t).exp();
            let x = e * (x0 + b * t);
            let v = e * (b - w0 * (x0 + b * t));
            (x, v)
        } else if zeta < 1.0 {
            let alpha = zeta * w0;
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + alpha * x0) / wd;
            let e = (-alpha * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = e * (x0 * cos + b * sin);
            let v = e * ((b * wd - alpha * x0) * cos - (alpha * b + x0 * wd) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }

    pub fn is_at_rest(x: f64, v: f64) -> bool {
        x.abs() < REST_DISPLACEMENT && v.abs() < REST_VELOCITY
    }

    /// First time (sampled at `step` seconds, capped at `max_secs`) at which the spring
    /// released from `(x0, v0)` comes to rest.
    pub fn settling_time(&self, x0: f64, v0: f64, step: f64, max_secs: f64) -> f64 {
        let step = step.max(1e-4);
        let mut t = 0.0;
        while t < max_secs {
            let (x, v) = self.state_at(t, x0, v0);
            if Self::is_at_rest(x, v) {
                return t;
            }
            t += step;
        }
        max_secs
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;

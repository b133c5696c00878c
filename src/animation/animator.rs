use crate::{
    animation::{
        curve::{AnimationCurve, Transaction},
        spring::SpringSpec,
    },
    foundation::math::lerp,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Active {
    from: f64,
    to: f64,
    start: f64,
    initial_velocity: f64,
    transaction: Transaction,
}

impl Active {
    /// Value, velocity and completion at absolute time `now`.
    fn sample(&self, now: f64) -> (f64, f64, bool) {
        let elapsed = (now - self.start).max(0.0);
        match self.transaction.curve {
            AnimationCurve::Tween { duration, ease } => {
                let t = elapsed / duration;
                if t >= 1.0 {
                    return (self.to, 0.0, true);
                }
                let value = lerp(self.from, self.to, ease.apply(t));
                let h = 1e-4;
                let slope = (ease.apply(t + h) - ease.apply(t)) / h;
                let velocity = (self.to - self.from) * slope / duration;
                (value, velocity, false)
            }
            AnimationCurve::Spring(spec) => {
                let (x, v) = spec.state_at(elapsed, self.from - self.to, self.initial_velocity);
                if SpringSpec::is_at_rest(x, v) {
                    (self.to, 0.0, true)
                } else {
                    (self.to + x, v, false)
                }
            }
        }
    }
}

/// Frame driver for a single animatable progress value.
///
/// The animator separates the *presented* value (what is drawn this frame) from the
/// target it is heading to. Retargeting always starts from the presented value at the
/// moment of the request, so a new animation picks up wherever the previous one was.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressAnimator {
    value: f64,
    velocity: f64,
    target: f64,
    active: Option<Active>,
}

impl ProgressAnimator {
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            active: None,
        }
    }

    /// Presented value as of the last [`ProgressAnimator::tick`].
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.active.is_none()
    }

    pub fn transaction(&self) -> Option<Transaction> {
        self.active.map(|a| a.transaction)
    }

    /// Start animating toward `target` at time `now`.
    ///
    /// Re-requesting the target and curve that are already in flight (or a target the
    /// animator already rests at) is a no-op, so repeated requests never restart motion.
    pub fn animate_to(&mut self, target: f64, transaction: Transaction, now: f64) {
        match self.active {
            Some(a) if a.to == target && a.transaction == transaction => return,
            None if self.value == target => return,
            _ => {}
        }

        self.tick(now);
        let initial_velocity = if transaction.continuous {
            self.velocity
        } else {
            0.0
        };
        tracing::trace!(
            from = self.value,
            to = target,
            initial_velocity,
            "animator retarget"
        );
        self.target = target;
        self.active = Some(Active {
            from: self.value,
            to: target,
            start: now,
            initial_velocity,
            transaction,
        });
    }

    /// Jump to `value` immediately, cancelling any animation in flight.
    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.active = None;
    }

    /// Advance to time `now` and return the presented value.
    pub fn tick(&mut self, now: f64) -> f64 {
        if let Some(active) = self.active {
            let (value, velocity, done) = active.sample(now);
            self.value = value;
            self.velocity = velocity;
            if done {
                self.active = None;
            }
        }
        self.value
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;

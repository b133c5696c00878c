/// Turns the cumulative translations a drag recognizer reports into incremental
/// per-update deltas.
///
/// Lives for one gesture at a time: the first update of a gesture only records the
/// baseline, every later update yields the distance moved since the previous one, and
/// [`DragAccumulator::end`] resets everything for the next gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DragAccumulator {
    active: bool,
    accumulated: f64,
    delta: f64,
}

impl DragAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Cumulative vertical translation of the current gesture.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Delta produced by the most recent update.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Start a fresh gesture, discarding any previous one.
    pub fn begin(&mut self) {
        *self = Self {
            active: true,
            ..Self::default()
        };
    }

    /// Record the gesture's cumulative `translation` and return the incremental delta.
    pub fn update(&mut self, translation: f64) -> f64 {
        if !self.active {
            self.active = true;
            self.accumulated = translation;
            self.delta = 0.0;
            return 0.0;
        }
        self.delta = translation - self.accumulated;
        self.accumulated = translation;
        self.delta
    }

    /// Record an already-incremental `delta`, opening a gesture if none is active.
    pub fn record_delta(&mut self, delta: f64) {
        self.active = true;
        self.delta = delta;
        self.accumulated += delta;
    }

    /// Finish the gesture, returning the total translation it covered.
    pub fn end(&mut self) -> f64 {
        let total = self.accumulated;
        *self = Self::default();
        total
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/drag.rs"]
mod tests;

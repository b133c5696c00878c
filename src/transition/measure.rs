use crate::foundation::core::Rect;

/// Receiver of measured layout bounds, expressed in screen coordinates.
pub trait MeasureSink {
    fn measured(&mut self, bounds: Rect);
}

/// Upward-propagated bounds value: every report replaces the previous one and an
/// unreported value reads as the zero rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundsPreference {
    value: Rect,
}

impl BoundsPreference {
    pub fn value(&self) -> Rect {
        self.value
    }

    /// Replace the held value. Returns `true` when it changed.
    pub fn reduce(&mut self, next: Rect) -> bool {
        let changed = self.value != next;
        self.value = next;
        changed
    }
}

impl MeasureSink for BoundsPreference {
    fn measured(&mut self, bounds: Rect) {
        self.reduce(bounds);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/measure.rs"]
mod tests;

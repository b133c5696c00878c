//! Scripted gesture traces, replayed against an [`InlineSheet`] at a fixed frame rate.

use std::{fs::File, io::BufReader, io::Read, path::Path};

use crate::{
    foundation::core::Rect,
    foundation::error::{MotionError, MotionResult},
    sheet::config::SheetConfig,
    sheet::inline::{InlineSheet, SheetFrame},
};

/// Upper bound on the frames a single replay may sample.
pub const MAX_FRAMES: u64 = 1_000_000;

fn default_fps() -> f64 {
    60.0
}

/// A recorded (or hand-written) sequence of host events.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Trace {
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Length of the replay in seconds.
    pub duration: f64,
    #[serde(default)]
    pub initially_presented: bool,
    #[serde(default)]
    pub events: Vec<TimedEvent>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEvent {
    pub at: f64,
    #[serde(flatten)]
    pub event: TraceEvent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    /// The host binding was set.
    Present { value: bool },
    /// The host binding was flipped.
    Toggle,
    /// Drag recognizer update with the gesture's cumulative translation.
    Drag { translation: f64 },
    /// Drag update carrying an incremental displacement.
    DragDelta { delta: f64 },
    DragEnd,
    /// Nested content reported new bounds, as `[x0, y0, x1, y1]`.
    Measure { rect: [f64; 4] },
}

impl Trace {
    pub fn from_reader(r: impl Read) -> MotionResult<Self> {
        let trace: Self = serde_json::from_reader(r)?;
        trace.validate()?;
        Ok(trace)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::validation(format!("open trace '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> MotionResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(MotionError::validation("trace fps must be finite and > 0"));
        }
        if !(self.duration.is_finite() && self.duration >= 0.0) {
            return Err(MotionError::validation(
                "trace duration must be finite and >= 0",
            ));
        }
        let span = (self.duration * self.fps).floor();
        if !(span.is_finite() && span < MAX_FRAMES as f64) {
            return Err(MotionError::validation(format!(
                "trace samples too many frames ({} s at {} fps, max {MAX_FRAMES})",
                self.duration, self.fps
            )));
        }
        let mut prev = f64::NEG_INFINITY;
        for (i, ev) in self.events.iter().enumerate() {
            if !ev.at.is_finite() {
                return Err(MotionError::validation(format!(
                    "event {i}: timestamp must be finite"
                )));
            }
            if ev.at < prev {
                return Err(MotionError::validation(format!(
                    "event {i}: timestamps must be non-decreasing ({} after {prev})",
                    ev.at
                )));
            }
            prev = ev.at;
        }
        Ok(())
    }

    /// Number of frames sampled for this trace (both ends inclusive), capped at
    /// [`MAX_FRAMES`].
    pub fn frame_count(&self) -> u64 {
        ((self.duration * self.fps).floor() as u64)
            .saturating_add(1)
            .min(MAX_FRAMES)
    }
}

fn apply(sheet: &mut InlineSheet, ev: &TimedEvent) {
    let now = ev.at;
    match ev.event {
        TraceEvent::Present { value } => sheet.set_presented(value, now),
        TraceEvent::Toggle => sheet.toggle(now),
        TraceEvent::Drag { translation } => sheet.drag_changed(translation, now),
        TraceEvent::DragDelta { delta } => sheet.drag_update(delta, now),
        TraceEvent::DragEnd => sheet.drag_ended(now),
        TraceEvent::Measure { rect: [x0, y0, x1, y1] } => {
            sheet.measure_overlay(Rect::new(x0, y0, x1, y1))
        }
    }
}

/// Replay `trace` and sample one frame every `1 / fps` seconds. Events stamped at or
/// before a frame's time are applied before that frame is sampled.
#[tracing::instrument(skip_all, fields(fps = trace.fps, duration = trace.duration))]
pub fn replay(trace: &Trace, config: SheetConfig) -> MotionResult<Vec<SheetFrame>> {
    trace.validate()?;
    let mut sheet = InlineSheet::new(config, trace.initially_presented)?;
    let count = trace.frame_count();
    let mut frames = Vec::with_capacity(count as usize);
    let mut pending = trace.events.iter().peekable();

    for i in 0..count {
        let now = i as f64 / trace.fps;
        while let Some(ev) = pending.next_if(|ev| ev.at <= now) {
            apply(&mut sheet, ev);
        }
        frames.push(sheet.frame(now));
    }

    if pending.peek().is_some() {
        tracing::warn!(
            remaining = pending.count(),
            "trace events after the last frame were not applied"
        );
    }
    tracing::debug!(frames = frames.len(), "replay finished");
    Ok(frames)
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;

//! sheetmotion drives two interactive UI transitions as plain, frame-sampled state:
//!
//! - an **inline sheet** that a vertical drag pulls open or pushes closed, tilting
//!   the content behind it and sliding nested content up from the bottom edge;
//! - a **screen-out** transition that moves content fully off one of the four
//!   screen edges.
//!
//! # Model
//!
//! 1. **Control**: [`PresentationController`] turns toggles, drag updates and drag
//!    releases into a model progress in `[0, 1]` plus an [`AnimationRequest`].
//! 2. **Drive**: [`ProgressAnimator`] interpolates the drawn progress toward the model
//!    with an eased tween or a spring, one `tick` per frame.
//! 3. **Map**: [`SheetVisuals::from_progress`] and [`compute_translation`] are pure
//!    functions of the drawn progress.
//!
//! [`InlineSheet`] wires the three together for hosts that just want frames.
//! Everything is single-threaded and deterministic: the host supplies timestamps and
//! delivers events in order.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod gesture;
mod sheet;
mod transition;

pub mod replay;
/// Affine and projective transform helpers.
pub mod transform;

pub use animation::animator::ProgressAnimator;
pub use animation::curve::{AnimationCurve, DEFAULT_EASE_DURATION, Transaction};
pub use animation::ease::Ease;
pub use animation::spring::{REST_DISPLACEMENT, REST_VELOCITY, SpringSpec};
pub use foundation::core::{Affine, BezPath, Point, Rect, Size, UnitPoint, Vec2, Viewport};
pub use foundation::error::{MotionError, MotionResult};
pub use foundation::math::{clamp01, is_strictly_inside_unit, lerp};
pub use gesture::drag::DragAccumulator;
pub use replay::{MAX_FRAMES, TimedEvent, Trace, TraceEvent, replay};
pub use sheet::config::{OPEN_THRESHOLD, SNAP_DURATION, SheetConfig, VisualConfig};
pub use sheet::inline::{InlineSheet, SheetFrame};
pub use sheet::state::{AnimationRequest, PresentationController, PresentationState, SheetPhase};
pub use sheet::visuals::{CornerRadiusShape, Corners, OverlayVisuals, SheetVisuals};
pub use transform::projective::{Rotation3D, Transform3D};
pub use transition::edge::{Edge, ScreenOut, TransitionPair, compute_translation, screen_out};
pub use transition::measure::{BoundsPreference, MeasureSink};

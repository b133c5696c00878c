use std::{fs::File, io::BufReader, io::Read, path::Path};

use crate::{
    animation::{curve::AnimationCurve, spring::SpringSpec},
    foundation::core::{UnitPoint, Viewport},
    foundation::error::{MotionError, MotionResult},
    foundation::math::ensure_finite,
};

/// Progress at or above which a released drag snaps the sheet open.
pub const OPEN_THRESHOLD: f64 = 0.7;
/// Duration of the snap that follows a released drag, in seconds.
pub const SNAP_DURATION: f64 = 0.25;

/// Tunables for an inline sheet. Every field has a default, so a config file only
/// needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub viewport: Viewport,
    pub open_threshold: f64,
    /// Animation used when the presentation flag is flipped programmatically.
    pub toggle: AnimationCurve,
    /// Animation used when a released drag snaps open or closed.
    pub snap: AnimationCurve,
    /// Spring applied to each accepted drag update.
    pub drag_spring: SpringSpec,
    pub visuals: VisualConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            open_threshold: OPEN_THRESHOLD,
            toggle: AnimationCurve::default(),
            snap: AnimationCurve::ease_in_out(SNAP_DURATION),
            drag_spring: SpringSpec::INTERACTIVE,
            visuals: VisualConfig::default(),
        }
    }
}

/// Linear coefficients mapping progress onto the sheet's visual parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub corner_radius_scale: f64,
    pub offset_scale: f64,
    /// Rotation at full progress, in degrees; negative tilts the top away.
    pub rotation_scale_deg: f64,
    pub depth_scale: f64,
    pub perspective: f64,
    pub rotation_anchor: UnitPoint,
    /// The overlay is only built once progress exceeds this.
    pub overlay_visible_above: f64,
    pub overlay_corner_radius: f64,
    pub overlay_top_inset: f64,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            corner_radius_scale: 20.0,
            offset_scale: 20.0,
            rotation_scale_deg: -10.0,
            depth_scale: 60.0,
            perspective: 1.0,
            rotation_anchor: UnitPoint::new(0.5, 0.2),
            overlay_visible_above: 0.01,
            overlay_corner_radius: 10.0,
            overlay_top_inset: 75.0,
        }
    }
}

impl VisualConfig {
    pub fn validate(&self) -> MotionResult<()> {
        ensure_finite("visuals.corner_radius_scale", self.corner_radius_scale)?;
        ensure_finite("visuals.offset_scale", self.offset_scale)?;
        ensure_finite("visuals.rotation_scale_deg", self.rotation_scale_deg)?;
        ensure_finite("visuals.depth_scale", self.depth_scale)?;
        ensure_finite("visuals.perspective", self.perspective)?;
        ensure_finite("visuals.rotation_anchor.x", self.rotation_anchor.x)?;
        ensure_finite("visuals.rotation_anchor.y", self.rotation_anchor.y)?;
        if self.corner_radius_scale < 0.0 || self.overlay_corner_radius < 0.0 {
            return Err(MotionError::validation("corner radii must be >= 0"));
        }
        if !(0.0..1.0).contains(&self.overlay_visible_above) {
            return Err(MotionError::validation(
                "visuals.overlay_visible_above must be in [0, 1)",
            ));
        }
        if !(self.overlay_top_inset.is_finite() && self.overlay_top_inset >= 0.0) {
            return Err(MotionError::validation(
                "visuals.overlay_top_inset must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

impl SheetConfig {
    pub fn from_reader(r: impl Read) -> MotionResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            MotionError::validation(format!("open sheet config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> MotionResult<()> {
        self.viewport.validate()?;
        if !(self.open_threshold > 0.0 && self.open_threshold < 1.0) {
            return Err(MotionError::validation(
                "open_threshold must be strictly between 0 and 1",
            ));
        }
        self.toggle.validate()?;
        self.snap.validate()?;
        self.drag_spring.validate()?;
        self.visuals.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/config.rs"]
mod tests;

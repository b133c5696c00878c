use kurbo::{RoundedRect, RoundedRectRadii, Shape};

use crate::{
    foundation::core::{Affine, BezPath, Rect, Vec2, Viewport},
    sheet::config::VisualConfig,
    transform::{affine::offset_y, projective::Rotation3D},
    transition::edge::{Edge, ScreenOut},
    transition::measure::MeasureSink,
};

/// Which corners of a rectangle get rounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Corners {
    pub const TOP: Self = Self {
        top_left: true,
        top_right: true,
        bottom_right: false,
        bottom_left: false,
    };
    pub const ALL: Self = Self {
        top_left: true,
        top_right: true,
        bottom_right: true,
        bottom_left: true,
    };
}

/// Rectangle outline with only the selected corners rounded.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CornerRadiusShape {
    pub radius: f64,
    pub corners: Corners,
}

impl CornerRadiusShape {
    pub fn new(radius: f64, corners: Corners) -> Self {
        Self { radius, corners }
    }

    pub fn path(&self, rect: Rect) -> BezPath {
        let r = |on: bool| if on { self.radius.max(0.0) } else { 0.0 };
        let radii = RoundedRectRadii::new(
            r(self.corners.top_left),
            r(self.corners.top_right),
            r(self.corners.bottom_right),
            r(self.corners.bottom_left),
        );
        RoundedRect::from_rect(rect, radii).to_path(0.1)
    }
}

/// Visual parameters of the nested content shown on top of an opening sheet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayVisuals {
    pub clip: CornerRadiusShape,
    pub top_inset: f64,
    /// Slides the overlay in from the bottom as the sheet opens.
    pub transition: ScreenOut,
}

impl OverlayVisuals {
    pub fn translation(&self, viewport: &Viewport) -> Vec2 {
        self.transition.translation(viewport)
    }

    /// Where the overlay lands when laid out inside `container`.
    pub fn frame_in(&self, container: Rect, viewport: &Viewport) -> Rect {
        let inset = Rect::new(
            container.x0,
            (container.y0 + self.top_inset).min(container.y1),
            container.x1,
            container.y1,
        );
        inset + self.translation(viewport)
    }
}

/// Everything the host needs to draw the sheet for a given progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SheetVisuals {
    pub progress: f64,
    pub corner_radius: f64,
    pub offset_y: f64,
    pub rotation: Rotation3D,
    pub overlay: Option<OverlayVisuals>,
}

impl SheetVisuals {
    /// Pure mapping from progress to visual parameters; every output is linear in
    /// `progress`.
    pub fn from_progress(progress: f64, cfg: &VisualConfig) -> Self {
        let overlay = (progress > cfg.overlay_visible_above).then(|| OverlayVisuals {
            clip: CornerRadiusShape::new(cfg.overlay_corner_radius, Corners::TOP),
            top_inset: cfg.overlay_top_inset,
            transition: ScreenOut::new(Edge::Bottom, 1.0 - progress),
        });

        Self {
            progress,
            corner_radius: progress * cfg.corner_radius_scale,
            offset_y: progress * cfg.offset_scale,
            rotation: Rotation3D {
                angle_deg: progress * cfg.rotation_scale_deg,
                axis: [1.0, 0.0, 0.0],
                anchor: cfg.rotation_anchor,
                anchor_z: progress * cfg.depth_scale,
                perspective: cfg.perspective,
            },
            overlay,
        }
    }

    /// Feed the overlay's last measured bounds into its transition.
    pub fn with_overlay_bounds(mut self, bounds: Rect) -> Self {
        if let Some(overlay) = self.overlay.as_mut() {
            overlay.transition.measured(bounds);
        }
        self
    }

    /// 2D part of the sheet transform (the vertical offset).
    pub fn content_affine(&self) -> Affine {
        offset_y(self.offset_y)
    }

    pub fn outline(&self, rect: Rect) -> BezPath {
        CornerRadiusShape::new(self.corner_radius, Corners::ALL).path(rect)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sheet/visuals.rs"]
mod tests;

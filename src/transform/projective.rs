//! Projective (4x4) transforms for perspective rotations.

use crate::foundation::core::{Point, Size, UnitPoint};

/// Row-major 4x4 matrix acting on column vectors `(x, y, z, 1)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transform3D {
    pub m: [[f64; 4]; 4],
}

impl Transform3D {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn translate(x: f64, y: f64, z: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[0][3] = x;
        t.m[1][3] = y;
        t.m[2][3] = z;
        t
    }

    /// Rotation by `angle_rad` about the unit axis `(x, y, z)` (Rodrigues' formula).
    pub fn rotate(angle_rad: f64, axis: [f64; 3]) -> Self {
        let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        if len == 0.0 || angle_rad == 0.0 {
            return Self::IDENTITY;
        }
        let [x, y, z] = axis.map(|c| c / len);
        let (s, c) = angle_rad.sin_cos();
        let k = 1.0 - c;
        Self {
            m: [
                [c + x * x * k, x * y * k - z * s, x * z * k + y * s, 0.0],
                [y * x * k + z * s, c + y * y * k, y * z * k - x * s, 0.0],
                [z * x * k - y * s, z * y * k + x * s, c + z * z * k, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Perspective divide with the eye `1 / strength` units in front of the plane.
    pub fn perspective(strength: f64) -> Self {
        let mut t = Self::IDENTITY;
        t.m[3][2] = -strength;
        t
    }

    pub fn then(self, next: Self) -> Self {
        next.compose(self)
    }

    fn compose(self, rhs: Self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[r][k] * rhs.m[k][c]).sum();
            }
        }
        Self { m: out }
    }

    /// Project a point on the `z = 0` plane back onto that plane.
    pub fn project(&self, p: Point) -> Point {
        let v = [p.x, p.y, 0.0, 1.0];
        let row = |r: usize| (0..4).map(|k| self.m[r][k] * v[k]).sum::<f64>();
        let w = row(3);
        let w = if w.abs() < 1e-12 { 1e-12 } else { w };
        Point::new(row(0) / w, row(1) / w)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

/// A perspective rotation pinned to an anchor inside the content being rotated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Rotation3D {
    pub angle_deg: f64,
    pub axis: [f64; 3],
    pub anchor: UnitPoint,
    /// Depth of the rotation pivot in front of the content plane.
    pub anchor_z: f64,
    pub perspective: f64,
}

impl Rotation3D {
    /// Full transform for content of `size`: move the pivot to the origin, rotate,
    /// apply perspective relative to the content's larger side, and move back.
    pub fn matrix(&self, size: Size) -> Transform3D {
        let pivot = self.anchor.resolve(size);
        let extent = size.width.max(size.height);
        let strength = if extent > 0.0 {
            self.perspective / extent
        } else {
            0.0
        };
        Transform3D::translate(-pivot.x, -pivot.y, -self.anchor_z)
            .then(Transform3D::rotate(self.angle_deg.to_radians(), self.axis))
            .then(Transform3D::perspective(strength))
            .then(Transform3D::translate(pivot.x, pivot.y, self.anchor_z))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/projective.rs"]
mod tests;

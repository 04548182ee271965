//! Four-angle 4D rotation state
//!
//! The composite matrix is built in a fixed order:
//! `identity → YZ(x) → XZ(y) → XY(z) → XW(w)`, each step post-multiplying.
//! 4D rotations do not commute, so this order is part of the contract.
//! The YW and ZW planes are available on [`Matrix4D`] but are not driven by
//! the four angles.

use serde::{Serialize, Deserialize};

use crate::{Matrix4D, Vector4D};

/// Four rotation angles in radians
///
/// `x` drives the YZ plane, `y` the XZ plane, `z` the XY plane and `w` the XW plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl RotationAngles {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Build from angles given in degrees
    pub fn from_degrees(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::new(x.to_radians(), y.to_radians(), z.to_radians(), w.to_radians())
    }

    /// Compose the rotation matrix for these angles
    pub fn to_matrix(self) -> Matrix4D {
        let mut m = Matrix4D::IDENTITY;
        m.rotate_yz(self.x)
            .rotate_xz(self.y)
            .rotate_xy(self.z)
            .rotate_xw(self.w);
        m
    }
}

/// Rotation state: four angles plus the eagerly derived matrix
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rotation4D {
    angles: RotationAngles,
    matrix: Matrix4D,
}

impl Rotation4D {
    /// Identity rotation
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotation with the given angles
    pub fn from_angles(angles: RotationAngles) -> Self {
        Self {
            angles,
            matrix: angles.to_matrix(),
        }
    }

    /// Set all four angles (radians) and recompute the matrix
    pub fn set_rotation(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.set_angles(RotationAngles::new(x, y, z, w));
    }

    /// Set all four angles and recompute the matrix
    pub fn set_angles(&mut self, angles: RotationAngles) {
        self.angles = angles;
        self.matrix = angles.to_matrix();
    }

    #[inline]
    pub fn angles(&self) -> RotationAngles {
        self.angles
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix4D {
        &self.matrix
    }

    /// Rotate a single point
    #[inline]
    pub fn rotate_point(&self, point: Vector4D) -> Vector4D {
        self.matrix.transform_vector(point)
    }

    /// Rotate every point, returning a new vector
    pub fn rotate_array(&self, points: &[Vector4D]) -> Vec<Vector4D> {
        points.iter().map(|p| self.rotate_point(*p)).collect()
    }
}

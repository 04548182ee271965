//! 4x4 matrix and plane rotations for 4D transformations
//!
//! Matrices are stored row-major: `elements[row * 4 + col]`. Every plane
//! rotation builder post-multiplies the running matrix, so the last rotation
//! appended is the first one applied to a vector.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vector4D;

/// The 6 coordinate planes of 4D space
///
/// In 4D, rotations happen in planes rather than around axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationPlane {
    XY,
    XZ,
    XW,
    YZ,
    YW,
    ZW,
}

impl RotationPlane {
    /// All six planes
    pub const ALL: [RotationPlane; 6] = [
        RotationPlane::XY,
        RotationPlane::XZ,
        RotationPlane::XW,
        RotationPlane::YZ,
        RotationPlane::YW,
        RotationPlane::ZW,
    ];

    /// Axis indices `(a, b)` of the plane with `a < b` (0=X, 1=Y, 2=Z, 3=W)
    pub fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::XY => (0, 1),
            RotationPlane::XZ => (0, 2),
            RotationPlane::XW => (0, 3),
            RotationPlane::YZ => (1, 2),
            RotationPlane::YW => (1, 3),
            RotationPlane::ZW => (2, 3),
        }
    }
}

/// 4x4 row-major matrix acting on [`Vector4D`]
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Matrix4D {
    pub elements: [f32; 16],
}

impl Default for Matrix4D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4D {
    pub const IDENTITY: Self = Self {
        elements: [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Reset to the multiplicative identity
    pub fn identity(&mut self) -> &mut Self {
        *self = Self::IDENTITY;
        self
    }

    /// Entry at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.elements[row * 4 + col]
    }

    /// Set the entry at `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.elements[row * 4 + col] = value;
    }

    /// Matrix product `self × other`
    ///
    /// Plain triple loop with a fixed summation order, so identical inputs
    /// always give bit-identical results. Not commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.elements;
        let b = &other.elements;
        let mut out = [0.0f32; 16];

        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                out[i * 4 + j] = sum;
            }
        }

        Self { elements: out }
    }

    /// Rotation by `angle` radians in a single coordinate plane
    ///
    /// For plane (a, b): `M[a][a] = cos`, `M[a][b] = sin`, `M[b][a] = -sin`,
    /// `M[b][b] = cos`, identity elsewhere.
    pub fn plane_rotation(plane: RotationPlane, angle: f32) -> Self {
        let (a, b) = plane.axes();
        let cs = angle.cos();
        let sn = angle.sin();

        let mut m = Self::IDENTITY;
        m.set(a, a, cs);
        m.set(a, b, sn);
        m.set(b, a, -sn);
        m.set(b, b, cs);
        m
    }

    /// Post-multiply by a plane rotation
    pub fn rotate(&mut self, plane: RotationPlane, angle: f32) -> &mut Self {
        *self = self.multiply(&Self::plane_rotation(plane, angle));
        self
    }

    pub fn rotate_xy(&mut self, angle: f32) -> &mut Self {
        self.rotate(RotationPlane::XY, angle)
    }

    pub fn rotate_xz(&mut self, angle: f32) -> &mut Self {
        self.rotate(RotationPlane::XZ, angle)
    }

    pub fn rotate_xw(&mut self, angle: f32) -> &mut Self {
        self.rotate(RotationPlane::XW, angle)
    }

    pub fn rotate_yz(&mut self, angle: f32) -> &mut Self {
        self.rotate(RotationPlane::YZ, angle)
    }

    pub fn rotate_yw(&mut self, angle: f32) -> &mut Self {
        self.rotate(RotationPlane::YW, angle)
    }

    pub fn rotate_zw(&mut self, angle: f32) -> &mut Self {
        self.rotate(RotationPlane::ZW, angle)
    }

    /// Apply the matrix to a vector (row dot products)
    pub fn transform_vector(&self, v: Vector4D) -> Vector4D {
        let e = &self.elements;
        Vector4D::new(
            e[0] * v.x + e[1] * v.y + e[2] * v.z + e[3] * v.w,
            e[4] * v.x + e[5] * v.y + e[6] * v.z + e[7] * v.w,
            e[8] * v.x + e[9] * v.y + e[10] * v.z + e[11] * v.w,
            e[12] * v.x + e[13] * v.y + e[14] * v.z + e[15] * v.w,
        )
    }
}

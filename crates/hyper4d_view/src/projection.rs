//! 4D to 3D projection
//!
//! Three mappings from 4D points to 3D:
//! - Perspective: divide by distance along W from a viewpoint at `w = -distance`
//! - Orthographic: drop W
//! - Stereographic: project from the pole `w = 1` of the unit 3-sphere
//!
//! Singular inputs never produce NaN or infinity; they are caught by
//! threshold tests and mapped to a finite fallback.

use std::f32::consts::FRAC_PI_4;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use hyper4d_math::{Vector3D, Vector4D};

use crate::ParseModeError;

/// Threshold below which a coordinate is treated as zero
pub const PROJECTION_EPSILON: f32 = 0.001;

/// Where singular points land: far along +z, out of the usual view
pub const FAR_POINT: Vector3D = Vector3D { x: 0.0, y: 0.0, z: 1000.0 };

/// Projection method
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
    Stereographic,
}

impl ProjectionMode {
    pub const ALL: [ProjectionMode; 3] = [
        ProjectionMode::Perspective,
        ProjectionMode::Orthographic,
        ProjectionMode::Stereographic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectionMode::Perspective => "perspective",
            ProjectionMode::Orthographic => "orthographic",
            ProjectionMode::Stereographic => "stereographic",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectionMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ProjectionMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseModeError::new("projection", s))
    }
}

/// Projection engine: a mode plus its parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection4D {
    mode: ProjectionMode,
    /// Viewpoint distance along W (perspective only)
    distance: f32,
    /// Field of view, carried for the 3D camera downstream
    fov: f32,
}

impl Default for Projection4D {
    fn default() -> Self {
        Self::new(ProjectionMode::Perspective, 5.0)
    }
}

impl Projection4D {
    pub fn new(mode: ProjectionMode, distance: f32) -> Self {
        Self { mode, distance, fov: FRAC_PI_4 }
    }

    #[inline]
    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn set_mode(&mut self, mode: ProjectionMode) {
        self.mode = mode;
    }

    /// Set the perspective distance; non-positive or non-finite values are ignored
    pub fn set_distance(&mut self, distance: f32) {
        if !(distance.is_finite() && distance > 0.0) {
            log::warn!("Ignoring projection distance {}, keeping {}", distance, self.distance);
            return;
        }
        self.distance = distance;
    }

    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Project one 4D point
    pub fn project(&self, point: Vector4D) -> Vector3D {
        match self.mode {
            ProjectionMode::Perspective => self.perspective(point),
            ProjectionMode::Orthographic => point.to_vector3(),
            ProjectionMode::Stereographic => stereographic(point),
        }
    }

    fn perspective(&self, point: Vector4D) -> Vector3D {
        if point.w.abs() < PROJECTION_EPSILON {
            return point.to_vector3();
        }
        let denominator = self.distance + point.w;
        if denominator.abs() < PROJECTION_EPSILON {
            return FAR_POINT;
        }
        point.to_vector3() * (self.distance / denominator)
    }

    /// Project every point, preserving order
    pub fn project_array(&self, points: &[Vector4D]) -> Vec<Vector3D> {
        points.iter().map(|&p| self.project(p)).collect()
    }

    /// Project each vertex once and pair the images per edge
    ///
    /// No clipping is done. Panics if an edge indexes past `vertices`.
    pub fn project_edges(&self, edges: &[[usize; 2]], vertices: &[Vector4D]) -> Vec<[Vector3D; 2]> {
        let projected = self.project_array(vertices);
        edges.iter().map(|&[a, b]| [projected[a], projected[b]]).collect()
    }
}

fn stereographic(point: Vector4D) -> Vector3D {
    if point.w >= 1.0 - PROJECTION_EPSILON {
        return FAR_POINT;
    }
    point.to_vector3() * (1.0 / (1.0 - point.w))
}

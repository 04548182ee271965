//! Point-cloud approximations on the 3-sphere
//!
//! These shapes are not built from their true symmetry groups: vertices are a
//! Fibonacci sampling of the sphere and edges join each point to its three
//! nearest neighbors. Only the vertex counts match the named objects.

use serde::{Serialize, Deserialize};

use crate::neighbors::{fibonacci_sphere, nearest_neighbor_edges};
use crate::polytope::{Polytope4D, ShapeGenerator};
use super::{generated, positive};

/// Neighbors joined per vertex
const NEIGHBORS: usize = 3;

fn sphere_cloud(count: usize, scale: f32) -> Polytope4D {
    let vertices = fibonacci_sphere(count, scale);
    let edges = nearest_neighbor_edges(&vertices, NEIGHBORS, None);
    Polytope4D::wireframe(vertices, edges)
}

/// A 60-vertex "4D buckyball", after the C60 vertex count
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buckyball {
    pub radius: f32,
}

impl Default for Buckyball {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl Buckyball {
    pub const VERTICES: usize = 60;

    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl ShapeGenerator for Buckyball {
    fn name(&self) -> &'static str {
        "buckyball4d"
    }

    fn generate(&self) -> Polytope4D {
        let radius = positive("buckyball4d", "radius", self.radius, 1.0);
        generated(self.name(), sphere_cloud(Self::VERTICES, radius))
    }
}

/// 600-point approximation of the 120-cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell120 {
    pub size: f32,
}

impl Default for Cell120 {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Cell120 {
    pub const VERTICES: usize = 600;

    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for Cell120 {
    fn name(&self) -> &'static str {
        "120-cell"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("120-cell", "size", self.size, 2.0);
        generated(self.name(), sphere_cloud(Self::VERTICES, size))
    }
}

/// 120-point approximation of the 600-cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell600 {
    pub size: f32,
}

impl Default for Cell600 {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Cell600 {
    pub const VERTICES: usize = 120;

    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for Cell600 {
    fn name(&self) -> &'static str {
        "600-cell"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("600-cell", "size", self.size, 2.0);
        generated(self.name(), sphere_cloud(Self::VERTICES, size))
    }
}

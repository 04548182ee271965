//! Geometry output shared by every generator
//!
//! A [`Polytope4D`] is pure combinatorial geometry: an ordered vertex list
//! (index = identity), undirected edges as index pairs, and optional faces.
//! Faces may have more than three indices and are fan-triangulated downstream.

use serde::{Serialize, Deserialize};
use hyper4d_math::Vector4D;

use crate::ShapeError;

/// An undirected edge between two vertex indices
pub type Edge = [usize; 2];

/// A face as an ordered list of at least three vertex indices
pub type Face = Vec<usize>;

/// Vertices, edges and faces produced by a shape generator
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polytope4D {
    vertices: Vec<Vector4D>,
    edges: Vec<Edge>,
    faces: Vec<Face>,
}

impl Polytope4D {
    /// Create a polytope with faces
    pub fn new(vertices: Vec<Vector4D>, edges: Vec<Edge>, faces: Vec<Face>) -> Self {
        Self { vertices, edges, faces }
    }

    /// Create a wireframe-only polytope (empty face list)
    pub fn wireframe(vertices: Vec<Vector4D>, edges: Vec<Edge>) -> Self {
        Self::new(vertices, edges, Vec::new())
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector4D] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check the index invariants
    ///
    /// Every edge and face index must be below the vertex count, no edge may be
    /// a self-loop and every face needs at least three indices.
    pub fn validate(&self) -> Result<(), ShapeError> {
        let n = self.vertices.len();

        for (index, &[a, b]) in self.edges.iter().enumerate() {
            if a >= n || b >= n || a == b {
                return Err(ShapeError::InvalidEdge { index, edge: [a, b], vertex_count: n });
            }
        }

        for (index, face) in self.faces.iter().enumerate() {
            if face.len() < 3 || face.iter().any(|&i| i >= n) {
                return Err(ShapeError::InvalidFace { index, vertex_count: n });
            }
        }

        Ok(())
    }

    /// Fan-triangulate every face: `[f0, fj, fj+1]` for `j` in `1..len-1`
    pub fn triangulate_faces(&self) -> Vec<[usize; 3]> {
        let mut triangles = Vec::new();
        for face in &self.faces {
            if face.len() < 3 {
                continue;
            }
            for j in 1..face.len() - 1 {
                triangles.push([face[0], face[j], face[j + 1]]);
            }
        }
        triangles
    }
}

/// A parameter set that eagerly generates a [`Polytope4D`]
///
/// Generation is deterministic: identical parameters always give identical
/// geometry.
pub trait ShapeGenerator: Send + Sync {
    /// Registry identifier of the shape (e.g. `"tesseract"`)
    fn name(&self) -> &'static str;

    /// Compute vertices, edges and faces
    fn generate(&self) -> Polytope4D;
}

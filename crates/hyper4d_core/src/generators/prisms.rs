//! Prisms and antiprisms over the Platonic solids
//!
//! The base solid is placed twice, at `w = -height/2` and `w = +height/2`.
//! Indices `0..n` are the bottom copy and `n..2n` the top copy.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use hyper4d_math::{Vector3D, Vector4D};

use crate::neighbors::nearest_neighbor_edges;
use crate::polytope::{Edge, Face, Polytope4D, ShapeGenerator};
use crate::ShapeError;
use super::{generated, positive};

const GOLDEN: f32 = 1.618_034;

/// A Platonic solid used as the 3D base of a prism or antiprism
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BasePolyhedron {
    Tetrahedron,
    #[default]
    Cube,
    Octahedron,
    Dodecahedron,
    Icosahedron,
}

impl BasePolyhedron {
    pub const ALL: [BasePolyhedron; 5] = [
        BasePolyhedron::Tetrahedron,
        BasePolyhedron::Cube,
        BasePolyhedron::Octahedron,
        BasePolyhedron::Dodecahedron,
        BasePolyhedron::Icosahedron,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BasePolyhedron::Tetrahedron => "tetrahedron",
            BasePolyhedron::Cube => "cube",
            BasePolyhedron::Octahedron => "octahedron",
            BasePolyhedron::Dodecahedron => "dodecahedron",
            BasePolyhedron::Icosahedron => "icosahedron",
        }
    }

    /// Order of the rotational symmetry about the z axis used for the antiprism twist
    pub fn symmetry_order(self) -> u32 {
        match self {
            BasePolyhedron::Tetrahedron => 2,
            BasePolyhedron::Cube => 4,
            BasePolyhedron::Octahedron => 4,
            BasePolyhedron::Dodecahedron => 2,
            BasePolyhedron::Icosahedron => 2,
        }
    }

    /// Edges meeting at each vertex
    pub fn vertex_degree(self) -> usize {
        match self {
            BasePolyhedron::Octahedron => 4,
            BasePolyhedron::Icosahedron => 5,
            _ => 3,
        }
    }

    /// Canonical vertices scaled to circumradius 1
    pub fn unit_vertices(self) -> Vec<Vector3D> {
        let raw: Vec<[f32; 3]> = match self {
            BasePolyhedron::Tetrahedron => vec![
                [1.0, 1.0, 1.0],
                [1.0, -1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [-1.0, -1.0, 1.0],
            ],
            BasePolyhedron::Cube => cube_corners().collect(),
            BasePolyhedron::Octahedron => vec![
                [1.0, 0.0, 0.0],
                [-1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, 1.0],
                [0.0, 0.0, -1.0],
            ],
            BasePolyhedron::Dodecahedron => {
                let inv = 1.0 / GOLDEN;
                let mut v: Vec<[f32; 3]> = cube_corners().collect();
                for (a, b) in sign_pairs() {
                    v.push([0.0, a * inv, b * GOLDEN]);
                    v.push([a * inv, b * GOLDEN, 0.0]);
                    v.push([a * GOLDEN, 0.0, b * inv]);
                }
                v
            }
            BasePolyhedron::Icosahedron => {
                let mut v = Vec::with_capacity(12);
                for (a, b) in sign_pairs() {
                    v.push([0.0, a, b * GOLDEN]);
                    v.push([a, b * GOLDEN, 0.0]);
                    v.push([a * GOLDEN, 0.0, b]);
                }
                v
            }
        };

        raw.into_iter()
            .map(|[x, y, z]| {
                let v = Vector3D::new(x, y, z);
                v * (1.0 / v.length())
            })
            .collect()
    }

    /// Edges of the solid, found as each vertex's nearest neighbors
    fn edges(self, vertices: &[Vector3D]) -> Vec<Edge> {
        let lifted: Vec<Vector4D> = vertices.iter().map(|&v| Vector4D::from_vector3(v, 0.0)).collect();
        nearest_neighbor_edges(&lifted, self.vertex_degree(), None)
    }
}

/// The eight `(±1, ±1, ±1)` corners, bit `k` of the index selecting the sign of axis `k`
fn cube_corners() -> impl Iterator<Item = [f32; 3]> {
    (0..8usize).map(|i| {
        let s = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
        [s(0), s(1), s(2)]
    })
}

fn sign_pairs() -> [(f32, f32); 4] {
    [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)]
}

impl fmt::Display for BasePolyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BasePolyhedron {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        BasePolyhedron::ALL
            .into_iter()
            .find(|b| b.as_str() == name)
            .ok_or_else(|| ShapeError::UnknownBase(s.to_string()))
    }
}

impl TryFrom<String> for BasePolyhedron {
    type Error = ShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BasePolyhedron> for String {
    fn from(base: BasePolyhedron) -> Self {
        base.as_str().to_string()
    }
}

/// Base solid of circumradius `size/2` together with its edges
fn scaled_base(base: BasePolyhedron, size: f32) -> (Vec<Vector3D>, Vec<Edge>) {
    let vertices: Vec<Vector3D> = base.unit_vertices().into_iter().map(|v| v * (size * 0.5)).collect();
    let edges = base.edges(&vertices);
    (vertices, edges)
}

/// Bottom edges, their mirror in the top copy, and the connectors
fn layered_edges(base_edges: &[Edge], n: usize, connectors: impl Iterator<Item = Edge>) -> Vec<Edge> {
    let mut edges: Vec<Edge> = base_edges.to_vec();
    edges.extend(base_edges.iter().map(|&[a, b]| [a + n, b + n]));
    edges.extend(connectors);
    edges
}

/// Uniform prism over a Platonic solid
///
/// Each base vertex gets one vertical edge to its copy; each base edge
/// spans a square side face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolychoronPrism {
    pub base: BasePolyhedron,
    pub size: f32,
    pub height: f32,
}

impl Default for PolychoronPrism {
    fn default() -> Self {
        Self { base: BasePolyhedron::Cube, size: 2.0, height: 1.0 }
    }
}

impl PolychoronPrism {
    pub fn new(base: BasePolyhedron, size: f32, height: f32) -> Self {
        Self { base, size, height }
    }
}

impl ShapeGenerator for PolychoronPrism {
    fn name(&self) -> &'static str {
        "polychoron-prism"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("polychoron-prism", "size", self.size, 2.0);
        let half = positive("polychoron-prism", "height", self.height, 1.0) * 0.5;

        let (base, base_edges) = scaled_base(self.base, size);
        let n = base.len();

        let vertices: Vec<Vector4D> = base
            .iter()
            .map(|&v| Vector4D::from_vector3(v, -half))
            .chain(base.iter().map(|&v| Vector4D::from_vector3(v, half)))
            .collect();
        let edges = layered_edges(&base_edges, n, (0..n).map(|i| [i, i + n]));
        let faces: Vec<Face> = base_edges.iter().map(|&[a, b]| vec![a, b, b + n, a + n]).collect();

        generated(self.name(), Polytope4D::new(vertices, edges, faces))
    }
}

/// Antiprism over a Platonic solid
///
/// The top copy is turned by `π / symmetry_order` about z, and every base
/// edge `(a, b)` contributes the two crossing edges `a → b'` and `b → a'`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolychoronAntiprism {
    pub base: BasePolyhedron,
    pub size: f32,
    pub height: f32,
}

impl Default for PolychoronAntiprism {
    fn default() -> Self {
        Self { base: BasePolyhedron::Tetrahedron, size: 2.0, height: 1.0 }
    }
}

impl PolychoronAntiprism {
    pub fn new(base: BasePolyhedron, size: f32, height: f32) -> Self {
        Self { base, size, height }
    }
}

impl ShapeGenerator for PolychoronAntiprism {
    fn name(&self) -> &'static str {
        "polychoron-antiprism"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("polychoron-antiprism", "size", self.size, 2.0);
        let half = positive("polychoron-antiprism", "height", self.height, 1.0) * 0.5;

        let (base, base_edges) = scaled_base(self.base, size);
        let n = base.len();
        let (sin, cos) = (PI / self.base.symmetry_order() as f32).sin_cos();
        let twist = |v: Vector3D| Vector3D::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z);

        let vertices: Vec<Vector4D> = base
            .iter()
            .map(|&v| Vector4D::from_vector3(v, -half))
            .chain(base.iter().map(|&v| Vector4D::from_vector3(twist(v), half)))
            .collect();
        let crossing = base_edges.iter().flat_map(|&[a, b]| [[a, b + n], [b, a + n]]);
        let edges = layered_edges(&base_edges, n, crossing);

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

//! Regular polytopes and root polytopes built by symmetry enumeration
//!
//! Vertices come from closed-form sign/permutation patterns; edges from an
//! explicit rule over indices or coordinates.

use std::f32::consts::SQRT_2;

use serde::{Serialize, Deserialize};
use hyper4d_math::Vector4D;

use crate::polytope::{Edge, Polytope4D, ShapeGenerator};
use super::{generated, positive};

/// Tolerance for inner-product edge rules, relative to the squared scale
const DOT_EPSILON: f32 = 1e-4;

/// Tesseract (4D hypercube)
///
/// Vertex `i` has coordinate `k` equal to `+size/2` when bit `k` of `i` is set
/// and `-size/2` otherwise. Two vertices share an edge iff their indices
/// differ in exactly one bit, giving 16 vertices and 32 edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tesseract {
    /// Full side length
    pub size: f32,
}

impl Default for Tesseract {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Tesseract {
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// The six cubic cells listed as 8-index faces
    const CELLS: [[usize; 8]; 6] = [
        [0, 1, 3, 2, 6, 7, 5, 4],
        [8, 9, 11, 10, 14, 15, 13, 12],
        [0, 1, 9, 8, 12, 13, 5, 4],
        [2, 3, 11, 10, 14, 15, 7, 6],
        [0, 2, 10, 8, 12, 14, 6, 4],
        [1, 3, 11, 9, 13, 15, 7, 5],
    ];
}

impl ShapeGenerator for Tesseract {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn generate(&self) -> Polytope4D {
        let h = positive("tesseract", "size", self.size, 2.0) * 0.5;
        let coord = |i: usize, bit: usize| if i & (1 << bit) != 0 { h } else { -h };

        let vertices = (0..16)
            .map(|i| Vector4D::new(coord(i, 0), coord(i, 1), coord(i, 2), coord(i, 3)))
            .collect();

        let mut edges = Vec::with_capacity(32);
        for i in 0..16usize {
            for j in (i + 1)..16 {
                if (i ^ j).count_ones() == 1 {
                    edges.push([i, j]);
                }
            }
        }

        let faces = Self::CELLS.iter().map(|cell| cell.to_vec()).collect();

        generated(self.name(), Polytope4D::new(vertices, edges, faces))
    }
}

/// Pentachoron (5-cell, 4-simplex)
///
/// Five vertices scaled by `size/√10`, every pair joined (K5) and every
/// triple a triangular face.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pentachoron {
    pub size: f32,
}

impl Default for Pentachoron {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Pentachoron {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for Pentachoron {
    fn name(&self) -> &'static str {
        "pentachoron"
    }

    fn generate(&self) -> Polytope4D {
        let s = positive("pentachoron", "size", self.size, 2.0) / 10.0f32.sqrt();
        let vertices: Vec<Vector4D> = [
            [1.0, 1.0, 1.0, -1.0],
            [1.0, -1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0, -1.0],
            [0.0, 0.0, 0.0, 2.0],
        ]
        .iter()
        .map(|&a| Vector4D::from_array(a) * s)
        .collect();

        let mut edges = Vec::with_capacity(10);
        let mut faces = Vec::with_capacity(10);
        for i in 0..5 {
            for j in (i + 1)..5 {
                edges.push([i, j]);
                for k in (j + 1)..5 {
                    faces.push(vec![i, j, k]);
                }
            }
        }

        generated(self.name(), Polytope4D::new(vertices, edges, faces))
    }
}

/// Hexadecachoron (16-cell)
///
/// The eight points `±s` on each axis; every pair is joined except the four
/// opposite pairs, giving 24 edges. Wireframe only.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hexadecachoron {
    pub size: f32,
}

impl Default for Hexadecachoron {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Hexadecachoron {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for Hexadecachoron {
    fn name(&self) -> &'static str {
        "16-cell"
    }

    fn generate(&self) -> Polytope4D {
        let s = positive("16-cell", "size", self.size, 2.0) / SQRT_2;
        let vertices = axis_vertices(s);

        let mut edges = Vec::with_capacity(24);
        for i in 0..8usize {
            for j in (i + 1)..8 {
                // 2k and 2k+1 are opposite
                if j != (i ^ 1) {
                    edges.push([i, j]);
                }
            }
        }

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// Icositetrachoron (24-cell)
///
/// Vertices are all placements of `(±s, ±s, 0, 0)` with `s = size/√2`. Two
/// vertices are joined iff exactly two of their coordinates differ.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icositetrachoron {
    pub size: f32,
}

impl Default for Icositetrachoron {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Icositetrachoron {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for Icositetrachoron {
    fn name(&self) -> &'static str {
        "24-cell"
    }

    #[allow(clippy::float_cmp)]
    fn generate(&self) -> Polytope4D {
        let s = positive("24-cell", "size", self.size, 2.0) / SQRT_2;
        let vertices = pair_vertices(s);

        let mut edges = Vec::new();
        for i in 0..vertices.len() {
            let a = vertices[i].to_array();
            for j in (i + 1)..vertices.len() {
                let b = vertices[j].to_array();
                let differing = (0..4).filter(|&k| a[k] != b[k]).count();
                if differing == 2 {
                    edges.push([i, j]);
                }
            }
        }

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// Dual 24-cell
///
/// The 8 axis points `±1` and the 16 points `(±½, ±½, ±½, ±½)`, all at
/// radius `size`. Two vertices are joined iff their inner product is
/// `size²/2` (a 60° angle), giving 96 edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cell24Dual {
    pub size: f32,
}

impl Default for Cell24Dual {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl Cell24Dual {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for Cell24Dual {
    fn name(&self) -> &'static str {
        "24-cell-dual"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("24-cell-dual", "size", self.size, 2.0);
        let mut vertices = axis_vertices(size);
        vertices.extend(half_vertices(size));

        let target = 0.5 * size * size;
        let tolerance = DOT_EPSILON * size * size;
        let edges = pairs_where(&vertices, |a, b| (a.dot(b) - target).abs() < tolerance);

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// Root polytope of the F4 root system
///
/// 24 long roots `(±1, ±1, 0, 0)` and 24 short roots (`±1` on one axis and
/// `(±½, ±½, ±½, ±½)`), scaled so long roots have length `size`. Two roots are
/// joined iff the angle between them is at most 60°, which links long roots
/// to long roots, short to short, and each short root to the six long roots
/// 45° away: 336 edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct F4RootPolytope {
    pub size: f32,
}

impl Default for F4RootPolytope {
    fn default() -> Self {
        Self { size: 2.0 }
    }
}

impl F4RootPolytope {
    pub fn new(size: f32) -> Self {
        Self { size }
    }
}

impl ShapeGenerator for F4RootPolytope {
    fn name(&self) -> &'static str {
        "f4-root-polytope"
    }

    fn generate(&self) -> Polytope4D {
        let scale = positive("f4-root-polytope", "size", self.size, 2.0) / SQRT_2;

        let mut vertices = pair_vertices(scale);
        vertices.extend(axis_vertices(scale));
        vertices.extend(half_vertices(scale));

        let edges = pairs_where(&vertices, |a, b| {
            let cos = a.dot(b) / (a.length() * b.length());
            cos >= 0.5 - DOT_EPSILON
        });

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// `±s` on each axis, ordered `+x, -x, +y, -y, +z, -z, +w, -w`
fn axis_vertices(s: f32) -> Vec<Vector4D> {
    let mut vertices = Vec::with_capacity(8);
    for axis in 0..4 {
        for sign in [1.0, -1.0] {
            let mut a = [0.0f32; 4];
            a[axis] = sign * s;
            vertices.push(Vector4D::from_array(a));
        }
    }
    vertices
}

/// All placements of `(±s, ±s, 0, 0)`: 24 points
fn pair_vertices(s: f32) -> Vec<Vector4D> {
    let mut vertices = Vec::with_capacity(24);
    for i in 0..4 {
        for j in (i + 1)..4 {
            for si in [1.0, -1.0] {
                for sj in [1.0, -1.0] {
                    let mut a = [0.0f32; 4];
                    a[i] = si * s;
                    a[j] = sj * s;
                    vertices.push(Vector4D::from_array(a));
                }
            }
        }
    }
    vertices
}

/// The 16 points `(±s/2, ±s/2, ±s/2, ±s/2)`, sign of axis `k` from bit `k`
fn half_vertices(s: f32) -> Vec<Vector4D> {
    let h = 0.5 * s;
    (0..16usize)
        .map(|bits| {
            let c = |k: usize| if bits & (1 << k) != 0 { -h } else { h };
            Vector4D::new(c(0), c(1), c(2), c(3))
        })
        .collect()
}

/// Every index pair `i < j` whose vertices satisfy `joined`
fn pairs_where<F>(vertices: &[Vector4D], joined: F) -> Vec<Edge>
where
    F: Fn(Vector4D, Vector4D) -> bool,
{
    let mut edges = Vec::new();
    for i in 0..vertices.len() {
        for j in (i + 1)..vertices.len() {
            if joined(vertices[i], vertices[j]) {
                edges.push([i, j]);
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn degrees(p: &Polytope4D) -> Vec<usize> {
        let mut deg = vec![0; p.vertex_count()];
        for &[a, b] in p.edges() {
            deg[a] += 1;
            deg[b] += 1;
        }
        deg
    }

    #[test]
    fn test_tesseract_counts() {
        let t = Tesseract::new(2.0).generate();
        assert_eq!(t.vertex_count(), 16);
        assert_eq!(t.edge_count(), 32);
        assert_eq!(t.face_count(), 6);
        assert!(t.faces().iter().all(|f| f.len() == 8));
        assert!(degrees(&t).iter().all(|&d| d == 4));
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_tesseract_vertex_positions() {
        let t = Tesseract::new(2.0).generate();
        assert_eq!(t.vertices()[0], Vector4D::new(-1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[1], Vector4D::new(1.0, -1.0, -1.0, -1.0));
        assert_eq!(t.vertices()[15], Vector4D::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_tesseract_edges_have_unit_hamming_distance() {
        let t = Tesseract::new(3.0).generate();
        for &[a, b] in t.edges() {
            assert!(a < b);
            assert_eq!((a ^ b).count_ones(), 1);
            // Edge length equals the side length
            let len = (t.vertices()[a] - t.vertices()[b]).length();
            assert!((len - 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_pentachoron_is_complete_graph() {
        let p = Pentachoron::new(2.0).generate();
        assert_eq!(p.vertex_count(), 5);
        assert_eq!(p.edge_count(), 10);
        assert_eq!(p.face_count(), 10);
        assert!(p.faces().iter().all(|f| f.len() == 3));

        let set: HashSet<Edge> = p.edges().iter().copied().collect();
        for i in 0..5 {
            for j in (i + 1)..5 {
                assert!(set.contains(&[i, j]));
            }
        }
    }

    #[test]
    fn test_pentachoron_scales_with_size() {
        let small = Pentachoron::new(1.0).generate();
        let large = Pentachoron::new(2.0).generate();
        for (a, b) in small.vertices().iter().zip(large.vertices()) {
            assert!((*a * 2.0 - *b).length() < 1e-5);
        }
    }

    #[test]
    fn test_hexadecachoron_skips_opposites() {
        let h = Hexadecachoron::new(2.0).generate();
        assert_eq!(h.vertex_count(), 8);
        assert_eq!(h.edge_count(), 24);
        assert!(h.faces().is_empty());
        for opposite in [[0, 1], [2, 3], [4, 5], [6, 7]] {
            assert!(!h.edges().contains(&opposite));
        }
        assert!(degrees(&h).iter().all(|&d| d == 6));
    }

    #[test]
    fn test_icositetrachoron_counts() {
        let c = Icositetrachoron::new(2.0).generate();
        assert_eq!(c.vertex_count(), 24);
        assert_eq!(c.edge_count(), 108);
        assert!(degrees(&c).iter().all(|&d| d == 9));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_icositetrachoron_radius() {
        let c = Icositetrachoron::new(2.0).generate();
        for v in c.vertices() {
            assert!((v.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_cell24_dual_counts() {
        let c = Cell24Dual::new(2.0).generate();
        assert_eq!(c.vertex_count(), 24);
        assert_eq!(c.edge_count(), 96);
        assert!(degrees(&c).iter().all(|&d| d == 8));
        for v in c.vertices() {
            assert!((v.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_f4_root_counts() {
        let f4 = F4RootPolytope::new(2.0).generate();
        assert_eq!(f4.vertex_count(), 48);
        assert_eq!(f4.edge_count(), 336);
        assert!(f4.validate().is_ok());

        let long = f4.vertices().iter().filter(|v| (v.length() - 2.0).abs() < 1e-4).count();
        assert_eq!(long, 24);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(F4RootPolytope::default().generate(), F4RootPolytope::default().generate());
    }
}

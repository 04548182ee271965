//! Parametric surfaces and product shapes sampled on regular grids
//!
//! Grid vertices are laid out row-major: index `i * columns + j`. Closed
//! parameters wrap their last sample back to the first; open ones include
//! both endpoints. Edges follow the grid and are not reordered, so a wrapped
//! edge may list the higher index first.

use std::f32::consts::{PI, TAU};

use serde::{Serialize, Deserialize};
use hyper4d_math::Vector4D;

use crate::polytope::{Edge, Face, Polytope4D, ShapeGenerator};
use super::{at_least, generated, positive};

/// Edges of a `rows × columns` periodic grid: each vertex to its successor
/// along both axes, wrapping at the ends
fn torus_grid_edges(rows: usize, columns: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(rows * columns * 2);
    for i in 0..rows {
        for j in 0..columns {
            let idx = i * columns + j;
            edges.push([idx, ((i + 1) % rows) * columns + j]);
            edges.push([idx, i * columns + (j + 1) % columns]);
        }
    }
    edges
}

/// Wireframe sampling of a 2-parameter sphere embedded in 4D
///
/// A `(resolution+1)²` grid over `φ ∈ [0, π]` and `θ ∈ [0, 2π]`:
///
/// ```text
/// (r sin φ cos θ, r sin φ sin θ, r cos φ cos θ, r cos φ sin θ)
/// ```
///
/// Each interior cell contributes three edges: next, below, and below-next.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hypersphere {
    pub radius: f32,
    pub resolution: usize,
}

impl Default for Hypersphere {
    fn default() -> Self {
        Self { radius: 1.0, resolution: 24 }
    }
}

impl Hypersphere {
    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }
}

impl ShapeGenerator for Hypersphere {
    fn name(&self) -> &'static str {
        "hypersphere"
    }

    fn generate(&self) -> Polytope4D {
        let r = positive("hypersphere", "radius", self.radius, 1.0);
        let res = at_least("hypersphere", "resolution", self.resolution, 3);
        let rows = res + 1;
        let phi_step = PI / res as f32;
        let theta_step = TAU / res as f32;

        let mut vertices = Vec::with_capacity(rows * rows);
        for i in 0..rows {
            let (sin_phi, cos_phi) = (i as f32 * phi_step).sin_cos();
            for j in 0..rows {
                let (sin_theta, cos_theta) = (j as f32 * theta_step).sin_cos();
                vertices.push(Vector4D::new(
                    r * sin_phi * cos_theta,
                    r * sin_phi * sin_theta,
                    r * cos_phi * cos_theta,
                    r * cos_phi * sin_theta,
                ));
            }
        }

        let mut edges = Vec::with_capacity(res * res * 3);
        for i in 0..res {
            for j in 0..res {
                let current = i * rows + j;
                let below = current + rows;
                edges.push([current, current + 1]);
                edges.push([current, below]);
                edges.push([current, below + 1]);
            }
        }

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// The 3-sphere sampled in hyperspherical coordinates
///
/// `ψ` and `θ` each take `resolution/2 + 1` samples over `[0, π]`; `φ` takes
/// `resolution` periodic samples over `[0, 2π)`:
///
/// ```text
/// r (cos ψ, sin ψ cos θ, sin ψ sin θ cos φ, sin ψ sin θ sin φ)
/// ```
///
/// Neighbors are joined along all three axes, wrapping on `φ`. Samples at the
/// poles coincide; they are kept so the grid stays regular.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreeSphere {
    pub radius: f32,
    pub resolution: usize,
}

impl Default for ThreeSphere {
    fn default() -> Self {
        Self { radius: 1.5, resolution: 24 }
    }
}

impl ThreeSphere {
    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }
}

impl ShapeGenerator for ThreeSphere {
    fn name(&self) -> &'static str {
        "3-sphere"
    }

    fn generate(&self) -> Polytope4D {
        let r = positive("3-sphere", "radius", self.radius, 1.5);
        let res = at_least("3-sphere", "resolution", self.resolution, 4);
        let half = res / 2;
        let open = half + 1;
        let step = PI / half as f32;
        let phi_step = TAU / res as f32;
        let index = |i: usize, j: usize, k: usize| (i * open + j) * res + k;

        let mut vertices = Vec::with_capacity(open * open * res);
        for i in 0..open {
            let (sin_psi, cos_psi) = (i as f32 * step).sin_cos();
            for j in 0..open {
                let (sin_theta, cos_theta) = (j as f32 * step).sin_cos();
                for k in 0..res {
                    let (sin_phi, cos_phi) = (k as f32 * phi_step).sin_cos();
                    vertices.push(Vector4D::new(
                        cos_psi,
                        sin_psi * cos_theta,
                        sin_psi * sin_theta * cos_phi,
                        sin_psi * sin_theta * sin_phi,
                    ) * r);
                }
            }
        }

        let mut edges = Vec::new();
        for i in 0..open {
            for j in 0..open {
                for k in 0..res {
                    let idx = index(i, j, k);
                    if i + 1 < open {
                        edges.push([idx, index(i + 1, j, k)]);
                    }
                    if j + 1 < open {
                        edges.push([idx, index(i, j + 1, k)]);
                    }
                    edges.push([idx, index(i, j, (k + 1) % res)]);
                }
            }
        }

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// Flat square grid in the XY plane
///
/// `(resolution+1)²` points spanning `size` along x and y, centered on the
/// origin with `z = w = 0`. Every cell contributes its right and below edge.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hyperplane {
    pub size: f32,
    pub resolution: usize,
}

impl Default for Hyperplane {
    fn default() -> Self {
        Self { size: 4.0, resolution: 20 }
    }
}

impl Hyperplane {
    pub fn new(size: f32, resolution: usize) -> Self {
        Self { size, resolution }
    }
}

impl ShapeGenerator for Hyperplane {
    fn name(&self) -> &'static str {
        "hyperplane"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("hyperplane", "size", self.size, 4.0);
        let res = at_least("hyperplane", "resolution", self.resolution, 1);
        let rows = res + 1;
        let step = size / res as f32;
        let center = res as f32 / 2.0;

        let mut vertices = Vec::with_capacity(rows * rows);
        for i in 0..rows {
            for j in 0..rows {
                vertices.push(Vector4D::new(
                    (i as f32 - center) * step,
                    (j as f32 - center) * step,
                    0.0,
                    0.0,
                ));
            }
        }

        let mut edges = Vec::with_capacity(res * res * 2);
        for i in 0..res {
            for j in 0..res {
                let current = i * rows + j;
                edges.push([current, current + 1]);
                edges.push([current, current + rows]);
            }
        }

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// Klein bottle immersed in 4D without self-intersection
///
/// ```text
/// ((2 + cos v) cos u, (2 + cos v) sin u, sin v cos(u/2), sin v sin(u/2)) · radius
/// ```
///
/// over a `(resolution+1)²` grid with `u, v ∈ [0, 2π]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KleinBottle {
    pub radius: f32,
    pub resolution: usize,
}

impl Default for KleinBottle {
    fn default() -> Self {
        Self { radius: 1.0, resolution: 24 }
    }
}

impl KleinBottle {
    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }
}

impl ShapeGenerator for KleinBottle {
    fn name(&self) -> &'static str {
        "klein-bottle"
    }

    fn generate(&self) -> Polytope4D {
        let radius = positive("klein-bottle", "radius", self.radius, 1.0);
        let res = at_least("klein-bottle", "resolution", self.resolution, 3);
        let rows = res + 1;
        let step = TAU / res as f32;

        let mut vertices = Vec::with_capacity(rows * rows);
        for i in 0..rows {
            let u = i as f32 * step;
            let (sin_u, cos_u) = u.sin_cos();
            let (sin_half, cos_half) = (u / 2.0).sin_cos();
            for j in 0..rows {
                let (sin_v, cos_v) = (j as f32 * step).sin_cos();
                let ring = 2.0 + cos_v;
                vertices.push(Vector4D::new(
                    ring * cos_u,
                    ring * sin_u,
                    sin_v * cos_half,
                    sin_v * sin_half,
                ) * radius);
            }
        }

        let mut edges = Vec::with_capacity(res * res * 2);
        for i in 0..res {
            for j in 0..res {
                let current = i * rows + j;
                edges.push([current, current + 1]);
                edges.push([current, current + rows]);
            }
        }

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// Torus swept through 4D
///
/// Over `θ, φ ∈ [0, 2π)` with `major_resolution × minor_resolution` samples:
///
/// ```text
/// ((R + r cos θ) cos φ, (R + r cos θ) sin φ, r sin θ cos φ, r sin θ sin φ)
/// ```
///
/// Both parameters wrap, giving two edges per vertex.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hypertorus {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub major_resolution: usize,
    pub minor_resolution: usize,
}

impl Default for Hypertorus {
    fn default() -> Self {
        Self {
            major_radius: 1.2,
            minor_radius: 0.5,
            major_resolution: 32,
            minor_resolution: 32,
        }
    }
}

impl Hypertorus {
    pub fn new(major_radius: f32, minor_radius: f32, major_resolution: usize, minor_resolution: usize) -> Self {
        Self { major_radius, minor_radius, major_resolution, minor_resolution }
    }
}

impl ShapeGenerator for Hypertorus {
    fn name(&self) -> &'static str {
        "hypertorus"
    }

    fn generate(&self) -> Polytope4D {
        let big = positive("hypertorus", "major_radius", self.major_radius, 1.2);
        let small = positive("hypertorus", "minor_radius", self.minor_radius, 0.5);
        let rows = at_least("hypertorus", "major_resolution", self.major_resolution, 3);
        let columns = at_least("hypertorus", "minor_resolution", self.minor_resolution, 3);

        let mut vertices = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            let (sin_theta, cos_theta) = (TAU * i as f32 / rows as f32).sin_cos();
            for j in 0..columns {
                let (sin_phi, cos_phi) = (TAU * j as f32 / columns as f32).sin_cos();
                let ring = big + small * cos_theta;
                vertices.push(Vector4D::new(
                    ring * cos_phi,
                    ring * sin_phi,
                    small * sin_theta * cos_phi,
                    small * sin_theta * sin_phi,
                ));
            }
        }

        let edges = torus_grid_edges(rows, columns);
        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// The flat Clifford torus on the 3-sphere of radius `radius`
///
/// `(r/√2)(cos u, sin u, cos v, sin v)` over a periodic
/// `resolution × resolution` grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliffordTorus {
    pub radius: f32,
    pub resolution: usize,
}

impl Default for CliffordTorus {
    fn default() -> Self {
        Self { radius: 1.5, resolution: 24 }
    }
}

impl CliffordTorus {
    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }
}

impl ShapeGenerator for CliffordTorus {
    fn name(&self) -> &'static str {
        "clifford-torus"
    }

    fn generate(&self) -> Polytope4D {
        let radius = positive("clifford-torus", "radius", self.radius, 1.5);
        let res = at_least("clifford-torus", "resolution", self.resolution, 3);
        let a = radius / 2.0f32.sqrt();

        let mut vertices = Vec::with_capacity(res * res);
        for i in 0..res {
            let (sin_u, cos_u) = (TAU * i as f32 / res as f32).sin_cos();
            for j in 0..res {
                let (sin_v, cos_v) = (TAU * j as f32 / res as f32).sin_cos();
                vertices.push(Vector4D::new(cos_u, sin_u, cos_v, sin_v) * a);
            }
        }

        let edges = torus_grid_edges(res, res);
        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// The `{m}×{n}` duoprism: the product of an m-gon and an n-gon
///
/// Vertex `(i, j)` sits at index `i * n + j`, placing the m-gon in the XY
/// plane and the n-gon in the ZW plane, each of circumradius `size/√2`.
/// Faces are the `n` m-gons, the `m` n-gons and the `m·n` squares between
/// them.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Duoprism {
    pub m: usize,
    pub n: usize,
    pub size: f32,
}

impl Default for Duoprism {
    fn default() -> Self {
        Self { m: 3, n: 4, size: 2.0 }
    }
}

impl Duoprism {
    pub fn new(m: usize, n: usize, size: f32) -> Self {
        Self { m, n, size }
    }
}

impl ShapeGenerator for Duoprism {
    fn name(&self) -> &'static str {
        "duoprism"
    }

    fn generate(&self) -> Polytope4D {
        let m = at_least("duoprism", "m", self.m, 3);
        let n = at_least("duoprism", "n", self.n, 3);
        let a = positive("duoprism", "size", self.size, 2.0) / 2.0f32.sqrt();
        let index = |i: usize, j: usize| i * n + j;

        let mut vertices = Vec::with_capacity(m * n);
        for i in 0..m {
            let (sin_u, cos_u) = (TAU * i as f32 / m as f32).sin_cos();
            for j in 0..n {
                let (sin_v, cos_v) = (TAU * j as f32 / n as f32).sin_cos();
                vertices.push(Vector4D::new(cos_u, sin_u, cos_v, sin_v) * a);
            }
        }

        let ordered = |a: usize, b: usize| if a < b { [a, b] } else { [b, a] };
        let mut edges = Vec::with_capacity(2 * m * n);
        for i in 0..m {
            for j in 0..n {
                edges.push(ordered(index(i, j), index((i + 1) % m, j)));
                edges.push(ordered(index(i, j), index(i, (j + 1) % n)));
            }
        }

        let mut faces: Vec<Face> = Vec::with_capacity(n + m + m * n);
        faces.extend((0..n).map(|j| (0..m).map(|i| index(i, j)).collect()));
        faces.extend((0..m).map(|i| (0..n).map(|j| index(i, j)).collect()));
        for i in 0..m {
            for j in 0..n {
                let (i1, j1) = ((i + 1) % m, (j + 1) % n);
                faces.push(vec![index(i, j), index(i1, j), index(i1, j1), index(i, j1)]);
            }
        }

        generated(self.name(), Polytope4D::new(vertices, edges, faces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_hypersphere_counts() {
        let s = Hypersphere::new(1.0, 8).generate();
        assert_eq!(s.vertex_count(), 81);
        assert_eq!(s.edge_count(), 8 * 8 * 3);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_hypersphere_points_on_sphere() {
        let s = Hypersphere::new(2.5, 12).generate();
        for v in s.vertices() {
            assert!(approx_eq(v.length(), 2.5));
        }
    }

    #[test]
    fn test_three_sphere_points_on_sphere() {
        let s = ThreeSphere::new(1.5, 8).generate();
        assert_eq!(s.vertex_count(), 5 * 5 * 8);
        assert!(s.validate().is_ok());
        for v in s.vertices() {
            assert!(approx_eq(v.length(), 1.5));
        }
    }

    #[test]
    fn test_three_sphere_edge_count() {
        // ψ edges 4·5·8, θ edges 5·4·8, φ edges 5·5·8
        let s = ThreeSphere::new(1.0, 8).generate();
        assert_eq!(s.edge_count(), 160 + 160 + 200);
    }

    #[test]
    fn test_hyperplane_is_flat_and_centered() {
        let p = Hyperplane::new(4.0, 4).generate();
        assert_eq!(p.vertex_count(), 25);
        assert_eq!(p.edge_count(), 32);
        assert_eq!(p.vertices()[0], Vector4D::new(-2.0, -2.0, 0.0, 0.0));
        assert_eq!(p.vertices()[24], Vector4D::new(2.0, 2.0, 0.0, 0.0));
        assert!(p.vertices().iter().all(|v| v.z == 0.0 && v.w == 0.0));
    }

    #[test]
    fn test_klein_bottle_scaled_by_radius() {
        let k1 = KleinBottle::new(1.0, 6).generate();
        let k2 = KleinBottle::new(2.0, 6).generate();
        assert_eq!(k1.vertex_count(), 49);
        assert_eq!(k1.edge_count(), 72);
        // u = v = 0 gives (3, 0, 0, 0)
        assert!(approx_eq(k1.vertices()[0].x, 3.0));
        for (a, b) in k1.vertices().iter().zip(k2.vertices()) {
            assert!(approx_eq(a.x * 2.0, b.x));
            assert!(approx_eq(a.w * 2.0, b.w));
        }
    }

    #[test]
    fn test_hypertorus_wraps() {
        let t = Hypertorus::new(1.2, 0.5, 6, 5).generate();
        assert_eq!(t.vertex_count(), 30);
        assert_eq!(t.edge_count(), 60);
        assert!(t.validate().is_ok());
        // last row connects back to the first
        assert!(t.edges().contains(&[25, 0]));
    }

    #[test]
    fn test_hypertorus_clamps_resolution() {
        let t = Hypertorus::new(1.2, 0.5, 1, 2).generate();
        assert_eq!(t.vertex_count(), 9);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_clifford_torus_lies_on_sphere() {
        let c = CliffordTorus::new(1.5, 10).generate();
        assert_eq!(c.vertex_count(), 100);
        assert_eq!(c.edge_count(), 200);
        for v in c.vertices() {
            assert!(approx_eq(v.length(), 1.5));
            assert!(approx_eq(v.x * v.x + v.y * v.y, v.z * v.z + v.w * v.w));
        }
    }

    #[test]
    fn test_duoprism_3_4() {
        let d = Duoprism::new(3, 4, 2.0).generate();
        assert_eq!(d.vertex_count(), 12);
        assert_eq!(d.edge_count(), 24);
        assert_eq!(d.face_count(), 19);
        assert!(d.validate().is_ok());

        let unique: HashSet<_> = d.edges().iter().copied().collect();
        assert_eq!(unique.len(), 24);
        assert!(d.edges().iter().all(|&[a, b]| a < b));

        let triangles = d.faces().iter().filter(|f| f.len() == 3).count();
        let squares = d.faces().iter().filter(|f| f.len() == 4).count();
        assert_eq!(triangles, 4);
        assert_eq!(squares, 3 + 12);
    }

    #[test]
    fn test_duoprism_clamps_sides() {
        let d = Duoprism::new(1, 2, 2.0).generate();
        assert_eq!(d.vertex_count(), 9);
    }
}

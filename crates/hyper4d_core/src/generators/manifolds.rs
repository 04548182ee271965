//! Complex-surface embeddings: a Calabi-Yau cross-section and the Hopf fibration
//!
//! Both are built in C² and read back as `(Re z1, Im z1, Re z2, Im z2)`. Grid
//! neighbors are joined along every parameter axis; edges whose endpoints
//! land far apart (across a branch cut or a fold) are dropped.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use serde::{Serialize, Deserialize};
use hyper4d_math::Vector4D;

use crate::polytope::{Edge, Polytope4D, ShapeGenerator};
use super::{at_least, generated, positive};

/// Minimal complex arithmetic for the embeddings below
#[derive(Clone, Copy, Debug, PartialEq)]
struct Complex {
    re: f32,
    im: f32,
}

impl Complex {
    const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }

    fn from_polar(modulus: f32, arg: f32) -> Self {
        let (s, c) = arg.sin_cos();
        Self::new(modulus * c, modulus * s)
    }

    fn modulus(self) -> f32 {
        self.re.hypot(self.im)
    }

    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    fn cos(self) -> Self {
        Self::new(self.re.cos() * self.im.cosh(), -self.re.sin() * self.im.sinh())
    }

    fn sin(self) -> Self {
        Self::new(self.re.sin() * self.im.cosh(), self.re.cos() * self.im.sinh())
    }

    /// Principal branch of `self^p`
    fn powf(self, p: f32) -> Self {
        let m = self.modulus();
        if m == 0.0 {
            return Self::new(0.0, 0.0);
        }
        Self::from_polar(m.powf(p), self.im.atan2(self.re) * p)
    }
}

fn embed(z1: Complex, z2: Complex) -> Vector4D {
    Vector4D::new(z1.re, z1.im, z2.re, z2.im)
}

/// Keep only the grid edges `keep` accepts
fn pruned_edges(candidates: Vec<Edge>, keep: impl Fn(Edge) -> bool) -> Vec<Edge> {
    candidates.into_iter().filter(|&e| keep(e)).collect()
}

/// Calabi-Yau cross-section: the Fermat cubic curve `z1³ + z2³ = 1`
///
/// The curve is covered by nine patches `(k1, k2) ∈ {0,1,2}²`, each sampled on
/// a `resolution × resolution` grid over `ξ = a + ib` with `a ∈ [0, π/2]` and
/// `b ∈ [-1, 1]`:
///
/// ```text
/// z1 = e^{2πi·k1/3} cos(ξ)^{2/3}
/// z2 = e^{2πi·k2/3} sin(ξ)^{2/3}
/// ```
///
/// Edges join neighbors along `a`, `b` and the patch index (which wraps), and
/// are kept only when shorter than `radius/2`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalabiYau {
    pub radius: f32,
    pub resolution: usize,
}

impl Default for CalabiYau {
    fn default() -> Self {
        Self { radius: 1.5, resolution: 20 }
    }
}

impl CalabiYau {
    /// Exponent of the Fermat curve
    pub const DEGREE: usize = 3;

    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }
}

impl ShapeGenerator for CalabiYau {
    fn name(&self) -> &'static str {
        "calabi-yau"
    }

    fn generate(&self) -> Polytope4D {
        let radius = positive("calabi-yau", "radius", self.radius, 1.5);
        let res = at_least("calabi-yau", "resolution", self.resolution, 3);
        let n = Self::DEGREE;
        let patches = n * n;
        let exponent = 2.0 / n as f32;
        let index = |p: usize, i: usize, j: usize| (p * res + i) * res + j;
        let last = (res - 1) as f32;

        let mut vertices = Vec::with_capacity(patches * res * res);
        for p in 0..patches {
            let phase1 = Complex::from_polar(1.0, TAU * (p / n) as f32 / n as f32);
            let phase2 = Complex::from_polar(1.0, TAU * (p % n) as f32 / n as f32);
            for i in 0..res {
                let a = FRAC_PI_2 * i as f32 / last;
                for j in 0..res {
                    let b = -1.0 + 2.0 * j as f32 / last;
                    let xi = Complex::new(a, b);
                    let z1 = phase1.mul(xi.cos().powf(exponent));
                    let z2 = phase2.mul(xi.sin().powf(exponent));
                    vertices.push(embed(z1, z2) * radius);
                }
            }
        }

        let mut candidates = Vec::new();
        for p in 0..patches {
            for i in 0..res {
                for j in 0..res {
                    let idx = index(p, i, j);
                    if i + 1 < res {
                        candidates.push([idx, index(p, i + 1, j)]);
                    }
                    if j + 1 < res {
                        candidates.push([idx, index(p, i, j + 1)]);
                    }
                    candidates.push([idx, index((p + 1) % patches, i, j)]);
                }
            }
        }

        let limit = 0.5 * radius;
        let edges = pruned_edges(candidates, |[a, b]| {
            (vertices[a] - vertices[b]).length() < limit
        });

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// The Hopf fibration S³ → S², sampled fiber by fiber
///
/// Base points `(θ, φ)` on S² use `resolution/4` polar samples at
/// `π(i + ½)/count` (so the poles are skipped) and `resolution/2` periodic
/// azimuth samples. Each base point lifts to a great circle of `resolution`
/// samples in `ψ`:
///
/// ```text
/// z1 = cos(θ/2) e^{i(φ+ψ)}
/// z2 = sin(θ/2) e^{iψ}
/// ```
///
/// Edges join neighbors along all three axes and are kept only when their
/// XYZ extent is under `radius/2`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HopfFibration {
    pub radius: f32,
    pub resolution: usize,
}

impl Default for HopfFibration {
    fn default() -> Self {
        Self { radius: 2.0, resolution: 20 }
    }
}

impl HopfFibration {
    pub fn new(radius: f32, resolution: usize) -> Self {
        Self { radius, resolution }
    }
}

impl ShapeGenerator for HopfFibration {
    fn name(&self) -> &'static str {
        "hopf-fibration"
    }

    fn generate(&self) -> Polytope4D {
        let radius = positive("hopf-fibration", "radius", self.radius, 2.0);
        let res = at_least("hopf-fibration", "resolution", self.resolution, 8);
        let polar = res / 4;
        let azimuth = res / 2;
        let index = |i: usize, j: usize, k: usize| (i * azimuth + j) * res + k;

        let mut vertices = Vec::with_capacity(polar * azimuth * res);
        for i in 0..polar {
            let theta = PI * (i as f32 + 0.5) / polar as f32;
            let (sin_half, cos_half) = (theta / 2.0).sin_cos();
            for j in 0..azimuth {
                let phi = TAU * j as f32 / azimuth as f32;
                for k in 0..res {
                    let psi = TAU * k as f32 / res as f32;
                    let z1 = Complex::from_polar(cos_half, phi + psi);
                    let z2 = Complex::from_polar(sin_half, psi);
                    vertices.push(embed(z1, z2) * radius);
                }
            }
        }

        let mut candidates = Vec::new();
        for i in 0..polar {
            for j in 0..azimuth {
                for k in 0..res {
                    let idx = index(i, j, k);
                    if i + 1 < polar {
                        candidates.push([idx, index(i + 1, j, k)]);
                    }
                    candidates.push([idx, index(i, (j + 1) % azimuth, k)]);
                    candidates.push([idx, index(i, j, (k + 1) % res)]);
                }
            }
        }

        let limit = 0.5 * radius;
        let edges = pruned_edges(candidates, |[a, b]| {
            (vertices[a].to_vector3() - vertices[b].to_vector3()).length() < limit
        });

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_powf_cubes_back() {
        let z = Complex::new(0.3, -1.2);
        let root = z.powf(1.0 / 3.0);
        let cubed = root.mul(root).mul(root);
        assert!((cubed.re - z.re).abs() < 1e-4);
        assert!((cubed.im - z.im).abs() < 1e-4);
    }

    #[test]
    fn test_calabi_yau_points_satisfy_fermat_cubic() {
        let radius = 1.5;
        let cy = CalabiYau::new(radius, 6).generate();
        assert_eq!(cy.vertex_count(), 9 * 6 * 6);

        for v in cy.vertices() {
            let p = *v / radius;
            let z1 = Complex::new(p.x, p.y);
            let z2 = Complex::new(p.z, p.w);
            let c1 = z1.mul(z1).mul(z1);
            let c2 = z2.mul(z2).mul(z2);
            assert!((c1.re + c2.re - 1.0).abs() < 1e-3, "{:?}", v);
            assert!((c1.im + c2.im).abs() < 1e-3, "{:?}", v);
        }
    }

    #[test]
    fn test_calabi_yau_edges_are_short() {
        let cy = CalabiYau::default().generate();
        assert!(cy.edge_count() > 0);
        assert!(cy.validate().is_ok());
        for &[a, b] in cy.edges() {
            assert!((cy.vertices()[a] - cy.vertices()[b]).length() < 0.75);
        }
    }

    #[test]
    fn test_hopf_points_on_three_sphere() {
        let h = HopfFibration::new(2.0, 12).generate();
        assert_eq!(h.vertex_count(), 3 * 6 * 12);
        for v in h.vertices() {
            assert!((v.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hopf_fibers_are_great_circles() {
        // Along a fiber only ψ changes, so z1·conj(z2) stays fixed
        let h = HopfFibration::new(1.0, 8).generate();
        let fiber = &h.vertices()[0..8];
        let base = |v: &Vector4D| (v.x * v.z + v.y * v.w, v.y * v.z - v.x * v.w);
        let (re0, im0) = base(&fiber[0]);
        for v in fiber {
            let (re, im) = base(v);
            assert!((re - re0).abs() < 1e-5);
            assert!((im - im0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_hopf_prunes_long_edges() {
        let h = HopfFibration::default().generate();
        assert!(h.validate().is_ok());
        for &[a, b] in h.edges() {
            let d = h.vertices()[a].to_vector3() - h.vertices()[b].to_vector3();
            assert!(d.length() < 1.0);
        }
    }
}

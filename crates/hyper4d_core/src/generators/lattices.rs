//! Lattice slabs: E8 and the 4D hyperdiamond
//!
//! Both enumerate integer and half-integer lattice points inside a bounding
//! range with a parity constraint.

use serde::{Serialize, Deserialize};
use hyper4d_math::Vector4D;

use crate::neighbors::nearest_neighbor_edges;
use crate::polytope::{Polytope4D, ShapeGenerator};
use super::{at_least, generated, positive};

/// Points of `[-range, range]⁴`, or of `[-range, range-1]⁴ + ½` when `shift`
/// is set, optionally keeping only those whose integer part has even sum
fn parity_points(range: i32, shift: bool, even_only: bool) -> Vec<Vector4D> {
    let (lo, hi, offset) = if shift { (-range, range - 1, 0.5) } else { (-range, range, 0.0) };
    let mut points = Vec::new();

    for a in lo..=hi {
        for b in lo..=hi {
            for c in lo..=hi {
                for d in lo..=hi {
                    if even_only && (a + b + c + d).rem_euclid(2) != 0 {
                        continue;
                    }
                    points.push(Vector4D::new(
                        a as f32 + offset,
                        b as f32 + offset,
                        c as f32 + offset,
                        d as f32 + offset,
                    ));
                }
            }
        }
    }

    points
}

/// A 4D slab of the E8 lattice
///
/// E8 is the set of points of Z⁸ ∪ (Z+½)⁸ with even coordinate sum. The slab
/// keeps the points whose last four coordinates lie in `[-½, ½]` and drops
/// those four coordinates. The integer points that survive are the even-sum
/// points of Z⁴ (the hidden coordinates are all zero); every half-integer
/// point survives because the hidden `±½` signs can always restore parity.
/// After deduplication this is `D4 ∪ (Z+½)⁴`, cut to `range`.
///
/// Edges join each integer point to each half-integer point that differs by
/// exactly `±½` in every coordinate (distance `size`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct E8Lattice {
    /// Lattice spacing
    pub size: f32,
    /// Bounding range in lattice units
    pub range: u32,
}

impl Default for E8Lattice {
    fn default() -> Self {
        Self { size: 0.5, range: 2 }
    }
}

impl E8Lattice {
    pub fn new(size: f32, range: u32) -> Self {
        Self { size, range }
    }
}

impl ShapeGenerator for E8Lattice {
    fn name(&self) -> &'static str {
        "e8-lattice"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("e8-lattice", "size", self.size, 0.5);
        let range = at_least("e8-lattice", "range", self.range as usize, 1) as i32;

        let integer = parity_points(range, false, true);
        let half = parity_points(range, true, false);
        let split = integer.len();

        let mut edges = Vec::new();
        for (i, p) in integer.iter().enumerate() {
            for (k, q) in half.iter().enumerate() {
                let d = (*p - *q).to_array();
                if d.iter().all(|c| (c.abs() - 0.5).abs() < 1e-4) {
                    edges.push([i, split + k]);
                }
            }
        }

        let vertices = integer.into_iter().chain(half).map(|v| v * size).collect();

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

/// 4D analogue of the diamond lattice
///
/// The D4 lattice (even-sum integer points) plus a copy shifted by
/// `(½, ½, ½, ½)`, both cut to `[-range, range]` and scaled by `size/range`.
/// Each point connects to at most six nearest neighbors no farther than
/// 1.05 lattice units, which keeps only the bonds between the two copies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct E4Hyperdiamond {
    /// Outer half-extent
    pub size: f32,
    /// Bounding range in lattice units
    pub range: u32,
}

impl Default for E4Hyperdiamond {
    fn default() -> Self {
        Self { size: 1.5, range: 2 }
    }
}

impl E4Hyperdiamond {
    /// Maximum neighbors per vertex
    pub const MAX_NEIGHBORS: usize = 6;
    /// Bond cutoff in lattice units
    pub const CUTOFF: f32 = 1.05;

    pub fn new(size: f32, range: u32) -> Self {
        Self { size, range }
    }
}

impl ShapeGenerator for E4Hyperdiamond {
    fn name(&self) -> &'static str {
        "e4-hyperdiamond"
    }

    fn generate(&self) -> Polytope4D {
        let size = positive("e4-hyperdiamond", "size", self.size, 1.5);
        let range = at_least("e4-hyperdiamond", "range", self.range as usize, 1) as i32;
        let scale = size / range as f32;

        let mut lattice = parity_points(range, false, true);
        lattice.extend(parity_points(range, true, true));
        let vertices: Vec<Vector4D> = lattice.into_iter().map(|v| v * scale).collect();

        let edges = nearest_neighbor_edges(&vertices, Self::MAX_NEIGHBORS, Some(Self::CUTOFF * scale));

        generated(self.name(), Polytope4D::wireframe(vertices, edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_e8_slab_counts() {
        let e8 = E8Lattice::new(0.5, 2).generate();
        // 313 even-sum integer points + 4⁴ half-integer points
        assert_eq!(e8.vertex_count(), 313 + 256);
        assert_eq!(e8.edge_count(), 2048);
        assert!(e8.validate().is_ok());
    }

    #[test]
    fn test_e8_vertices_are_unique() {
        let e8 = E8Lattice::default().generate();
        let keys: HashSet<[i32; 4]> = e8
            .vertices()
            .iter()
            .map(|v| v.to_array().map(|c| (c * 100.0).round() as i32))
            .collect();
        assert_eq!(keys.len(), e8.vertex_count());
    }

    #[test]
    fn test_e8_edge_length_equals_size() {
        let e8 = E8Lattice::new(0.5, 1).generate();
        for &[a, b] in e8.edges() {
            assert!(a < b);
            let len = (e8.vertices()[a] - e8.vertices()[b]).length();
            assert!((len - 0.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hyperdiamond_counts() {
        let d = E4Hyperdiamond::new(1.5, 2).generate();
        assert_eq!(d.vertex_count(), 313 + 128);
        assert!(d.edge_count() > 0);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_hyperdiamond_respects_cutoff_and_degree() {
        let d = E4Hyperdiamond::new(2.0, 2).generate();
        let scale = 1.0;
        let mut seen = HashSet::new();
        let mut emitted = vec![0usize; d.vertex_count()];
        for &[a, b] in d.edges() {
            assert!(a < b);
            assert!(seen.insert((a, b)));
            emitted[a] += 1;
            let len = (d.vertices()[a] - d.vertices()[b]).length();
            assert!(len <= E4Hyperdiamond::CUTOFF * scale + 1e-5);
        }
        assert!(emitted.iter().all(|&n| n <= E4Hyperdiamond::MAX_NEIGHBORS));
    }

    #[test]
    fn test_range_is_clamped() {
        let d = E8Lattice::new(1.0, 0).generate();
        assert_eq!(d.vertex_count(), E8Lattice::new(1.0, 1).generate().vertex_count());
    }
}

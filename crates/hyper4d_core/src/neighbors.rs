//! Nearest-neighbor connectivity and Fibonacci sphere sampling
//!
//! The neighbor search is a brute-force all-pairs scan: O(n²) distance
//! evaluations plus an O(n log n) sort per vertex. At the sizes used here
//! (at most a few hundred points) that is cheap enough that no spatial index
//! is kept. Every vertex's search only reads the shared point list, so the
//! outer loop could be split across threads if it ever matters.

use std::f32::consts::PI;

use hyper4d_math::Vector4D;

use crate::polytope::Edge;

/// Connect every vertex to its `k` nearest others
///
/// `distance_sq(i, j)` returns the squared distance between vertices `i`
/// and `j`. Candidates are sorted ascending with a stable sort, so equal
/// distances keep enumeration order. When `max_distance_sq` is set, only
/// candidates within it are taken. An edge `[i, j]` is emitted only from the
/// vertex with the lower index, so the result never holds a duplicate
/// undirected pair.
pub fn k_nearest_edges<F>(
    count: usize,
    k: usize,
    max_distance_sq: Option<f32>,
    distance_sq: F,
) -> Vec<Edge>
where
    F: Fn(usize, usize) -> f32,
{
    let mut edges = Vec::new();
    let mut candidates: Vec<(usize, f32)> = Vec::with_capacity(count.saturating_sub(1));

    for i in 0..count {
        candidates.clear();
        candidates.extend((0..count).filter(|&j| j != i).map(|j| (j, distance_sq(i, j))));
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for &(j, d) in candidates.iter().take(k) {
            if max_distance_sq.is_some_and(|max| d > max) {
                break;
            }
            if i < j {
                edges.push([i, j]);
            }
        }
    }

    edges
}

/// [`k_nearest_edges`] over 4D points with Euclidean distance
pub fn nearest_neighbor_edges(
    points: &[Vector4D],
    k: usize,
    max_distance: Option<f32>,
) -> Vec<Edge> {
    k_nearest_edges(
        points.len(),
        k,
        max_distance.map(|d| d * d),
        |i, j| points[i].distance_squared(points[j]),
    )
}

/// The golden angle, π(3 − √5)
pub fn golden_angle() -> f32 {
    PI * (3.0 - 5.0f32.sqrt())
}

/// Quasi-uniform points on a 4D hypersphere of radius `scale`
///
/// `w` sweeps linearly from -1 to 1; the azimuth advances by the golden angle
/// and `z` takes an extra twist of 1.618 so the points spread into 4D.
/// `count` must be at least 2.
pub fn fibonacci_sphere(count: usize, scale: f32) -> Vec<Vector4D> {
    let step = golden_angle();
    let last = (count.max(2) - 1) as f32;

    (0..count)
        .map(|i| {
            let w = 2.0 * (i as f32 / last) - 1.0;
            let r = (1.0 - w * w).max(0.0).sqrt();
            let theta = step * i as f32;
            Vector4D::new(
                theta.cos() * r,
                theta.sin() * r,
                (theta * 1.618).cos() * r,
                w,
            ) * scale
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_line_of_points() {
        // 0 - 1 - 2 - 3 evenly spaced; 1-NN gives the chain
        let points: Vec<Vector4D> = (0..4).map(|i| Vector4D::new(i as f32, 0.0, 0.0, 0.0)).collect();
        let edges = nearest_neighbor_edges(&points, 1, None);
        // 0→1, 1→0 (dropped, 1 > 0), 2→1 (dropped), 3→2 (dropped)
        assert_eq!(edges, vec![[0, 1]]);
    }

    #[test]
    fn test_ties_follow_enumeration_order() {
        // Vertex 0 is equidistant from 1 and 2
        let points = vec![
            Vector4D::ZERO,
            Vector4D::new(1.0, 0.0, 0.0, 0.0),
            Vector4D::new(-1.0, 0.0, 0.0, 0.0),
        ];
        let edges = k_nearest_edges(3, 1, None, |i, j| points[i].distance_squared(points[j]));
        assert_eq!(edges, vec![[0, 1]]);
    }

    #[test]
    fn test_cutoff_limits_edges() {
        let points = vec![
            Vector4D::ZERO,
            Vector4D::new(1.0, 0.0, 0.0, 0.0),
            Vector4D::new(10.0, 0.0, 0.0, 0.0),
        ];
        let edges = nearest_neighbor_edges(&points, 2, Some(1.5));
        assert_eq!(edges, vec![[0, 1]]);
    }

    #[test]
    fn test_no_duplicates_or_self_loops() {
        let points = fibonacci_sphere(80, 1.0);
        let edges = nearest_neighbor_edges(&points, 3, None);

        let mut seen = HashSet::new();
        for &[a, b] in &edges {
            assert!(a < b);
            assert!(seen.insert((a, b)), "duplicate edge ({}, {})", a, b);
        }
    }

    #[test]
    fn test_fibonacci_sphere_radius() {
        let points = fibonacci_sphere(60, 2.0);
        assert_eq!(points.len(), 60);
        assert!((points[0].w + 2.0).abs() < 1e-5);
        assert!((points[59].w - 2.0).abs() < 1e-5);
        for p in &points {
            // x,y lie on the orthogonal circle; z adds a twist so |p| varies
            let xyw = (p.x * p.x + p.y * p.y + p.w * p.w).sqrt();
            assert!((xyw - 2.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_fibonacci_sphere_is_deterministic() {
        assert_eq!(fibonacci_sphere(120, 1.5), fibonacci_sphere(120, 1.5));
    }
}

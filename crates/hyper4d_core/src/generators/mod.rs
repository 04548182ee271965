//! Shape generators
//!
//! Each generator is a small serializable parameter struct whose `Default`
//! matches the registry defaults. Four construction strategies recur:
//!
//! - combinatorial enumeration ([`polytopes`], [`lattices`])
//! - parametric grid sampling ([`surfaces`], [`manifolds`])
//! - nearest-neighbor approximation ([`spherical`], [`lattices::E4Hyperdiamond`])
//! - prism / antiprism extrusion of a 3D base ([`prisms`])

pub mod polytopes;
pub mod lattices;
pub mod surfaces;
pub mod manifolds;
pub mod spherical;
pub mod prisms;

pub use polytopes::{Tesseract, Pentachoron, Hexadecachoron, Icositetrachoron, Cell24Dual, F4RootPolytope};
pub use lattices::{E8Lattice, E4Hyperdiamond};
pub use surfaces::{Hypersphere, ThreeSphere, Hyperplane, KleinBottle, Hypertorus, CliffordTorus, Duoprism};
pub use manifolds::{CalabiYau, HopfFibration};
pub use spherical::{Buckyball, Cell120, Cell600};
pub use prisms::{BasePolyhedron, PolychoronPrism, PolychoronAntiprism};

use crate::polytope::Polytope4D;

/// Clamp a count parameter to its minimum, warning when it had to change
pub(crate) fn at_least(shape: &str, param: &str, value: usize, min: usize) -> usize {
    if value < min {
        log::warn!("{}: {} = {} is below {}, using {}", shape, param, value, min, min);
        min
    } else {
        value
    }
}

/// Replace a non-positive or non-finite size with a fallback, warning when it had to change
pub(crate) fn positive(shape: &str, param: &str, value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("{}: {} = {} is not positive, using {}", shape, param, value, fallback);
        fallback
    }
}

/// Log the size of freshly generated geometry
pub(crate) fn generated(shape: &str, polytope: Polytope4D) -> Polytope4D {
    log::debug!(
        "Generated {}: {} vertices, {} edges, {} faces",
        shape,
        polytope.vertex_count(),
        polytope.edge_count(),
        polytope.face_count()
    );
    polytope
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_least() {
        assert_eq!(at_least("t", "resolution", 0, 3), 3);
        assert_eq!(at_least("t", "resolution", 12, 3), 12);
    }

    #[test]
    fn test_positive() {
        assert_eq!(positive("t", "size", -1.0, 2.0), 2.0);
        assert_eq!(positive("t", "size", f32::NAN, 2.0), 2.0);
        assert_eq!(positive("t", "size", 0.5, 2.0), 0.5);
    }
}

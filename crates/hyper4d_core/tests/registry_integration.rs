//! Integration tests for the shape registry
//!
//! These tests run every registered generator with its default parameters
//! and check the structural guarantees downstream code relies on:
//! 1. Every edge and face indexes an existing vertex
//! 2. No self-loops, and no duplicate edges from nearest-neighbor generators
//! 3. Templates survive a RON round-trip
//! 4. Generation is deterministic

use std::collections::HashSet;

use hyper4d_core::{
    available_shapes, generate_shape, BasePolyhedron, ShapeKind, ShapeTemplate, Vector4D,
};
use hyper4d_core::generators::{E8Lattice, PolychoronAntiprism};

// ==================== Structural Tests ====================

#[test]
fn test_every_registered_shape_validates() {
    for kind in ShapeKind::ALL {
        let shape = kind.generate();
        assert!(shape.vertex_count() > 0, "{} has no vertices", kind);
        assert!(shape.edge_count() > 0, "{} has no edges", kind);
        if let Err(e) = shape.validate() {
            panic!("{} failed validation: {}", kind, e);
        }
    }
}

#[test]
fn test_no_self_loops() {
    for kind in ShapeKind::ALL {
        let shape = kind.generate();
        assert!(
            shape.edges().iter().all(|&[a, b]| a != b),
            "{} has a self-loop",
            kind
        );
    }
}

#[test]
fn test_nearest_neighbor_shapes_have_no_duplicate_edges() {
    let nn_shapes = [
        ShapeKind::Buckyball,
        ShapeKind::Cell120,
        ShapeKind::Cell600,
        ShapeKind::E4Hyperdiamond,
        ShapeKind::PolychoronPrism,
        ShapeKind::PolychoronAntiprism,
    ];
    for kind in nn_shapes {
        let shape = kind.generate();
        let mut seen = HashSet::new();
        for &[a, b] in shape.edges() {
            assert!(a < b, "{} edge [{}, {}] not normalized", kind, a, b);
            assert!(seen.insert((a, b)), "{} repeats edge [{}, {}]", kind, a, b);
        }
    }
}

#[test]
fn test_vertices_are_finite() {
    for kind in ShapeKind::ALL {
        let shape = kind.generate();
        assert!(
            shape.vertices().iter().all(|v| v.to_array().iter().all(|c| c.is_finite())),
            "{} has a non-finite vertex",
            kind
        );
    }
}

// ==================== Registry Lookup Tests ====================

#[test]
fn test_known_counts_through_registry() {
    let expected = [
        ("tesseract", 16, 32),
        ("pentachoron", 5, 10),
        ("16-cell", 8, 24),
        ("24-cell", 24, 108),
        ("24-cell-dual", 24, 96),
        ("f4-root-polytope", 48, 336),
        ("e8-lattice", 569, 2048),
        ("duoprism", 12, 24),
    ];
    for (name, vertices, edges) in expected {
        let shape = generate_shape(name).unwrap();
        assert_eq!(shape.vertex_count(), vertices, "{}", name);
        assert_eq!(shape.edge_count(), edges, "{}", name);
    }
}

#[test]
fn test_registry_lists_every_kind() {
    let names: Vec<_> = available_shapes().collect();
    assert_eq!(names.len(), 22);
    assert_eq!(names[0], "tesseract");
    assert!(names.contains(&"calabi-yau"));
    assert!(names.contains(&"polychoron-antiprism"));
}

#[test]
fn test_tesseract_first_vertex() {
    let shape = generate_shape("tesseract").unwrap();
    assert_eq!(shape.vertices()[0], Vector4D::new(-1.0, -1.0, -1.0, -1.0));
}

// ==================== Template Tests ====================

#[test]
fn test_default_templates_round_trip_through_ron() {
    for kind in ShapeKind::ALL {
        let template = kind.default_template();
        let serialized = ron::to_string(&template).unwrap();
        let deserialized: ShapeTemplate = ron::from_str(&serialized)
            .unwrap_or_else(|e| panic!("{} failed to parse {}: {}", kind, serialized, e));
        assert_eq!(deserialized, template);
    }
}

#[test]
fn test_template_with_base_from_ron() {
    let template: ShapeTemplate =
        ron::from_str(r#"(type: "polychoron-antiprism", base: "cube", height: 2.0)"#).unwrap();
    assert_eq!(
        template,
        ShapeTemplate::PolychoronAntiprism(PolychoronAntiprism::new(BasePolyhedron::Cube, 2.0, 2.0))
    );
    assert_eq!(template.generate().vertex_count(), 16);
}

#[test]
fn test_custom_parameters_change_geometry() {
    let small = ShapeTemplate::E8Lattice(E8Lattice::new(0.5, 1)).generate();
    let large = ShapeTemplate::E8Lattice(E8Lattice::new(0.5, 2)).generate();
    assert!(small.vertex_count() < large.vertex_count());
}

#[test]
fn test_generation_is_deterministic() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.generate(), kind.generate(), "{} is not deterministic", kind);
    }
}

//! Integration tests for the full view pipeline
//!
//! These tests run geometry through every stage:
//! 1. Shape generation from the registry
//! 2. Rotation by the four-angle contract
//! 3. Projection to 3D
//! 4. Coloring and frame assembly in the visualizer

use hyper4d::{Frame, Visualizer};
use hyper4d_core::{generate_shape, Rotation4D, ShapeKind, ShapeTemplate, Vector3D, Vector4D};
use hyper4d_view::{ColorMapping4D, Projection4D, ProjectionMode, FAR_POINT};

// ==================== Stage-by-Stage Tests ====================

#[test]
fn test_tesseract_orthographic_identity() {
    let shape = ShapeTemplate::tesseract(2.0).generate();
    let rotation = Rotation4D::new();
    let projection = Projection4D::new(ProjectionMode::Orthographic, 5.0);

    let rotated = rotation.rotate_array(shape.vertices());
    let points = projection.project_array(&rotated);

    assert_eq!(points.len(), 16);
    assert_eq!(points[0], Vector3D::new(-1.0, -1.0, -1.0));
}

#[test]
fn test_w_rotation_moves_w_into_x() {
    let mut rotation = Rotation4D::new();
    rotation.set_rotation(0.0, 0.0, 0.0, std::f32::consts::FRAC_PI_2);
    let projection = Projection4D::new(ProjectionMode::Orthographic, 5.0);

    let p = projection.project(rotation.rotate_point(Vector4D::W));
    assert!((p.x.abs() - 1.0).abs() < 1e-5);
    assert!(p.y.abs() < 1e-5 && p.z.abs() < 1e-5);
}

#[test]
fn test_every_shape_projects_to_finite_points() {
    let mut rotation = Rotation4D::new();
    rotation.set_rotation(0.3, 0.7, 1.1, 0.4);

    for mode in ProjectionMode::ALL {
        let projection = Projection4D::new(mode, 5.0);
        for kind in ShapeKind::ALL {
            let shape = kind.generate();
            let points = projection.project_array(&rotation.rotate_array(shape.vertices()));
            assert!(
                points.iter().all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite()),
                "{} under {} produced a non-finite point",
                kind,
                mode
            );
        }
    }
}

#[test]
fn test_stereographic_pole_of_hypersphere() {
    // Hypersphere row 0 has φ = 0: (0, 0, r cos θ, r sin θ); θ = π/2 reaches w = r
    let shape = generate_shape("hypersphere").unwrap();
    let projection = Projection4D::new(ProjectionMode::Stereographic, 5.0);
    let points = projection.project_array(shape.vertices());
    assert!(points.contains(&FAR_POINT));
}

#[test]
fn test_colors_follow_unrotated_vertices() {
    let shape = generate_shape("pentachoron").unwrap();
    let colors = ColorMapping4D::default().color_array(shape.vertices());
    assert_eq!(colors.len(), shape.vertex_count());
    for c in colors {
        for channel in c.to_array() {
            assert!((0.0..=1.0).contains(&channel));
        }
    }
}

// ==================== Visualizer Tests ====================

#[test]
fn test_visualizer_frame_matches_stages() {
    let mut vis = Visualizer::new();
    vis.update_projection(ProjectionMode::Perspective, Some(5.0));
    vis.update_rotation(0.1, 0.2, 0.3, 0.4);

    let mut rotation = Rotation4D::new();
    rotation.set_rotation(0.1, 0.2, 0.3, 0.4);
    let expected = Projection4D::default().project_array(&rotation.rotate_array(vis.polytope().vertices()));

    let frame = vis.frame();
    assert_eq!(frame.points, expected);
    assert_eq!(frame.segments[0], [expected[0], expected[1]]);
}

#[test]
fn test_frame_ron_export_round_trip() {
    let mut vis = Visualizer::new();
    vis.load_model("duoprism").unwrap();
    let frame = vis.frame().clone();

    let serialized = ron::to_string(&frame).unwrap();
    let deserialized: Frame = ron::from_str(&serialized).unwrap();
    assert_eq!(deserialized.points.len(), 12);
    assert_eq!(deserialized.triangles.len(), frame.triangles.len());
}

#[test]
fn test_auto_rotation_over_many_ticks() {
    let mut vis = Visualizer::new();
    vis.animation_mut().start();
    vis.toggle_auto_rotation();
    for _ in 0..120 {
        vis.tick(1.0 / 60.0);
    }
    let t = vis.animation().time();
    assert!((t - 2.0 * 1.03).abs() < 1e-3);
    assert_eq!(vis.rotation().angles(), vis.animation().auto_rotation_angles());
}

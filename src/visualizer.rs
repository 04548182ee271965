//! Visualizer: the rotate → project → color pipeline around one active shape
//!
//! The visualizer owns the current geometry and every piece of view state.
//! Each change marks the cached [`Frame`] stale; the next call to
//! [`Visualizer::frame`] rebuilds it from the unrotated vertices.

use serde::{Serialize, Deserialize};

use hyper4d_core::{Polytope4D, Rotation4D, RotationAngles, ShapeError, ShapeKind, ShapeTemplate, Vector3D};
use hyper4d_view::{Animation4D, Color, ColorMapping4D, ColorMode, Projection4D, ProjectionMode};

use crate::config::AppConfig;

/// Called with new rotation values: radians after every rotation change, and
/// slider degrees in `[0, 360)` after each auto-rotation step
pub type RotationListener = Box<dyn FnMut(RotationUpdate) + Send>;

/// Payload handed to a [`RotationListener`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RotationUpdate {
    /// The four rotation angles in radians
    Radians(RotationAngles),
    /// Auto-rotation slider positions in degrees
    SliderDegrees([f32; 4]),
}

/// One projected, colored snapshot of the active shape
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Projected vertices, in vertex order
    pub points: Vec<Vector3D>,
    /// One color per vertex, computed from the unrotated 4D position over the
    /// fixed w range, so the same point keeps its hue across shapes
    pub colors: Vec<Color>,
    /// One projected segment per edge
    pub segments: Vec<[Vector3D; 2]>,
    /// Fan-triangulated faces
    pub triangles: Vec<[Vector3D; 3]>,
}

/// Active shape plus rotation, projection, animation and coloring state
pub struct Visualizer {
    template: ShapeTemplate,
    polytope: Polytope4D,
    rotation: Rotation4D,
    projection: Projection4D,
    animation: Animation4D,
    coloring: ColorMapping4D,
    frame: Option<Frame>,
    rotation_listener: Option<RotationListener>,
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer {
    /// Tesseract with identity rotation and the default projection
    pub fn new() -> Self {
        Self::with_template(ShapeTemplate::default())
    }

    /// Start from a given shape template
    pub fn with_template(template: ShapeTemplate) -> Self {
        let polytope = template.generate();
        log::info!("Loaded model: {}", template.name());
        Self {
            template,
            polytope,
            rotation: Rotation4D::new(),
            projection: Projection4D::default(),
            animation: Animation4D::new(),
            coloring: ColorMapping4D::default(),
            frame: None,
            rotation_listener: None,
        }
    }

    /// Build the initial state described by a configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let mut vis = Self::with_template(config.shape);

        vis.rotation.set_angles(config.rotation.to_angles());

        vis.projection.set_mode(config.projection.mode);
        vis.projection.set_distance(config.projection.distance);
        vis.projection.set_fov(config.projection.fov.to_radians());

        let anim = &config.animation;
        vis.animation.set_speed(anim.speed);
        vis.animation.set_rotation_speed(anim.rotation_speed);
        vis.animation.set_auto_rotate(anim.auto_rotate);
        if anim.playing {
            vis.animation.start();
        }

        vis.coloring.set_mode(config.color.mode);
        vis
    }

    /// Replace the active shape by registry identifier, with default parameters
    ///
    /// On an unknown identifier the current shape is kept.
    pub fn load_model(&mut self, name: &str) -> Result<(), ShapeError> {
        let kind: ShapeKind = name.parse().inspect_err(|e| log::error!("{}", e))?;
        self.load_template(kind.default_template());
        Ok(())
    }

    /// Replace the active shape with explicit parameters
    pub fn load_template(&mut self, template: ShapeTemplate) {
        self.polytope = template.generate();
        self.template = template;
        self.frame = None;
        log::info!(
            "Loaded model: {} ({} vertices, {} edges)",
            template.name(),
            self.polytope.vertex_count(),
            self.polytope.edge_count()
        );
    }

    /// Set all four rotation angles, in radians
    pub fn update_rotation(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.rotation.set_rotation(x, y, z, w);
        self.frame = None;
        let angles = self.rotation.angles();
        self.notify(RotationUpdate::Radians(angles));
    }

    /// Set all four rotation angles, in degrees
    pub fn update_rotation_degrees(&mut self, x: f32, y: f32, z: f32, w: f32) {
        self.update_rotation(x.to_radians(), y.to_radians(), z.to_radians(), w.to_radians());
    }

    /// Switch projection mode, optionally changing the W viewpoint distance
    pub fn update_projection(&mut self, mode: ProjectionMode, distance: Option<f32>) {
        self.projection.set_mode(mode);
        if let Some(d) = distance {
            self.projection.set_distance(d);
        }
        self.frame = None;
    }

    pub fn update_color_mode(&mut self, mode: ColorMode) {
        self.coloring.set_mode(mode);
        self.frame = None;
    }

    pub fn update_animation_speed(&mut self, speed: f32) {
        self.animation.set_speed(speed);
    }

    /// Flip auto-rotation, returning the new state
    pub fn toggle_auto_rotation(&mut self) -> bool {
        let enabled = self.animation.toggle_auto_rotate();
        log::debug!("Auto-rotation {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Back to identity rotation
    pub fn reset_view(&mut self) {
        self.update_rotation(0.0, 0.0, 0.0, 0.0);
    }

    /// Advance the animation by `dt` seconds
    ///
    /// While auto-rotating, the rotation follows the animation clock.
    pub fn tick(&mut self, dt: f32) {
        self.animation.update(dt);

        if self.animation.is_auto_rotating() {
            let a = self.animation.auto_rotation_angles();
            self.update_rotation(a.x, a.y, a.z, a.w);
            let sliders = self.animation.slider_degrees();
            self.notify(RotationUpdate::SliderDegrees(sliders));
        }
    }

    /// Register the rotation listener, replacing any previous one
    pub fn set_rotation_listener(&mut self, listener: RotationListener) {
        self.rotation_listener = Some(listener);
    }

    fn notify(&mut self, update: RotationUpdate) {
        if let Some(listener) = self.rotation_listener.as_mut() {
            listener(update);
        }
    }

    /// The current frame, rebuilt if anything changed since the last call
    pub fn frame(&mut self) -> &Frame {
        if self.frame.is_none() {
            self.frame = Some(self.build_frame());
        }
        self.frame.get_or_insert_with(Frame::default)
    }

    fn build_frame(&self) -> Frame {
        let vertices = self.polytope.vertices();
        let rotated = self.rotation.rotate_array(vertices);
        let points = self.projection.project_array(&rotated);
        let colors = vertices.iter().map(|&v| self.coloring.color_point(v)).collect();

        let segments = self
            .polytope
            .edges()
            .iter()
            .map(|&[a, b]| [points[a], points[b]])
            .collect();
        let triangles = self
            .polytope
            .triangulate_faces()
            .into_iter()
            .map(|[a, b, c]| [points[a], points[b], points[c]])
            .collect();

        log::debug!("Rebuilt frame for {}", self.template.name());
        Frame { points, colors, segments, triangles }
    }

    #[inline]
    pub fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.template.kind()
    }

    #[inline]
    pub fn polytope(&self) -> &Polytope4D {
        &self.polytope
    }

    #[inline]
    pub fn rotation(&self) -> &Rotation4D {
        &self.rotation
    }

    #[inline]
    pub fn projection(&self) -> &Projection4D {
        &self.projection
    }

    #[inline]
    pub fn animation(&self) -> &Animation4D {
        &self.animation
    }

    /// Mutable animation access for start/stop and rate changes
    #[inline]
    pub fn animation_mut(&mut self) -> &mut Animation4D {
        &mut self.animation
    }

    #[inline]
    pub fn coloring(&self) -> &ColorMapping4D {
        &self.coloring
    }
}

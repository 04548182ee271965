//! Shape generators for hyper4d
//!
//! This crate turns shape identifiers and parameters into 4D geometry:
//!
//! - [`Polytope4D`] - Vertices, edges and faces produced by a generator
//! - [`ShapeGenerator`] - The trait every generator implements
//! - [`ShapeTemplate`] - Serializable sum type over all generators
//! - [`ShapeKind`] - Registry of shape identifiers and their defaults
//! - [`generators`] - The generator parameter structs themselves
//! - [`neighbors`] - Nearest-neighbor edges and Fibonacci sphere sampling

mod error;
mod polytope;
mod template;
mod registry;
pub mod neighbors;
pub mod generators;

pub use error::ShapeError;
pub use polytope::{Polytope4D, ShapeGenerator, Edge, Face};
pub use template::ShapeTemplate;
pub use registry::{ShapeKind, available_shapes, generate_shape};
pub use generators::BasePolyhedron;

// Re-export commonly used types from hyper4d_math for convenience
pub use hyper4d_math::{Vector4D, Vector3D, Matrix4D, Rotation4D, RotationAngles, RotationPlane};

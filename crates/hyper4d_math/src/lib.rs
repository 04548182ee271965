//! 4D Mathematics Library
//!
//! This crate provides the vector, matrix and rotation kernel for hyper4d.
//!
//! ## Core Types
//!
//! - [`Vector4D`] - 4D vector with x, y, z, w components
//! - [`Vector3D`] - 3D vector produced by projections
//! - [`Matrix4D`] - 4x4 row-major matrix with plane rotation builders
//! - [`RotationPlane`] - The six coordinate planes of 4D space
//! - [`Rotation4D`] - Four-angle rotation state with its derived matrix

mod vec4;
pub mod mat4;
pub mod rotation;

pub use vec4::{Vector4D, Vector3D};
pub use mat4::{Matrix4D, RotationPlane};
pub use rotation::{Rotation4D, RotationAngles};

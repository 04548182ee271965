//! Viewing pipeline for hyper4d
//!
//! Everything between rotated 4D geometry and a 3D scene:
//!
//! - [`Projection4D`] - Perspective, orthographic and stereographic 4D→3D maps
//! - [`ColorMapping4D`] - Scalar coloring by depth, W or distance
//! - [`Animation4D`] - Animation clock and auto-rotation values
//! - [`ParseModeError`] - Rejected mode names

mod error;
pub mod projection;
pub mod color;
pub mod animation;

pub use error::ParseModeError;
pub use projection::{Projection4D, ProjectionMode, FAR_POINT, PROJECTION_EPSILON};
pub use color::{Color, ColorMapping4D, ColorMode};
pub use animation::{Animation4D, AnimationFlags};

//! hyper4d - 4D geometry visualizer
//!
//! Generates 4D shapes, rotates them, projects them to 3D and colors them.
//! The workspace crates do the geometry; this crate adds configuration and
//! the [`Visualizer`](visualizer::Visualizer) that ties them together.

pub mod config;
pub mod error;
pub mod visualizer;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use visualizer::{Frame, Visualizer};

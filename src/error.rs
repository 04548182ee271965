//! Top-level error type for the hyper4d binary

use std::fmt;

use hyper4d_core::ShapeError;

use crate::config::ConfigError;

/// Anything that can stop a run
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// A shape identifier was not recognized
    Shape(ShapeError),
    /// Frame export failed to serialize
    Serialize(ron::Error),
    /// Frame export failed to write
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Shape(e) => write!(f, "Shape error: {}", e),
            AppError::Serialize(e) => write!(f, "Serialization error: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Shape(e) => Some(e),
            AppError::Serialize(e) => Some(e),
            AppError::Io(e) => Some(e),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}

impl From<ShapeError> for AppError {
    fn from(e: ShapeError) -> Self {
        AppError::Shape(e)
    }
}

impl From<ron::Error> for AppError {
    fn from(e: ron::Error) -> Self {
        AppError::Serialize(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

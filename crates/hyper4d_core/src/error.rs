//! Shape error types
//!
//! Generators themselves are total; errors only arise at the string boundary
//! (unknown identifiers) and when validating geometry built elsewhere.

use std::fmt;

use crate::polytope::Edge;

/// Error type for shape lookup and geometry validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// No generator is registered under this identifier
    UnknownShape(String),
    /// No base polyhedron has this name
    UnknownBase(String),
    /// An edge references a missing vertex or is a self-loop
    InvalidEdge {
        index: usize,
        edge: Edge,
        vertex_count: usize,
    },
    /// A face has fewer than three indices or references a missing vertex
    InvalidFace {
        index: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnknownShape(name) => write!(f, "Unknown shape: {}", name),
            ShapeError::UnknownBase(name) => write!(f, "Unknown base polyhedron: {}", name),
            ShapeError::InvalidEdge { index, edge, vertex_count } => write!(
                f,
                "Invalid edge #{} {:?} for {} vertices",
                index, edge, vertex_count
            ),
            ShapeError::InvalidFace { index, vertex_count } => {
                write!(f, "Invalid face #{} for {} vertices", index, vertex_count)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

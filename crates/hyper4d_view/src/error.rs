//! Errors raised when parsing view modes from strings

use std::fmt;

/// A mode name that matched none of the known variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    /// Which setting was being parsed ("projection", "color")
    pub setting: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseModeError {
    pub fn new(setting: &'static str, value: impl Into<String>) -> Self {
        Self { setting, value: value.into() }
    }
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} mode: {}", self.setting, self.value)
    }
}

impl std::error::Error for ParseModeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseModeError::new("projection", "fisheye");
        assert_eq!(err.to_string(), "Unknown projection mode: fisheye");
    }
}

//! Error types for VastuFrontier

use thiserror::Error;

use crate::config::ConfigLoadError;

/// VastuFrontier error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontierError {
    /// Configuration rejected at construction time.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Direction resolution received an angle outside `[-π, π]`.
    ///
    /// The angular sweep never produces such an angle from a validated
    /// configuration, so this always indicates a bug.
    #[error("Ray angle {angle} is outside [-π, π]")]
    InvalidAngle {
        /// Offending angle in radians
        angle: f64,
    },

    /// Backing data does not match the requested grid shape.
    #[error("Grid data of length {len} does not match {rows}x{cols}")]
    DimensionMismatch {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
        /// Length of the supplied data
        len: usize,
    },
}

impl FrontierError {
    /// Shorthand for a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Is this a programming defect rather than a caller mistake?
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::InvalidAngle { .. })
    }
}

impl From<ConfigLoadError> for FrontierError {
    fn from(e: ConfigLoadError) -> Self {
        FrontierError::Configuration(e.to_string())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FrontierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrontierError::DimensionMismatch {
            rows: 2,
            cols: 3,
            len: 5,
        };
        assert_eq!(err.to_string(), "Grid data of length 5 does not match 2x3");
    }

    #[test]
    fn test_defect_classification() {
        assert!(FrontierError::InvalidAngle { angle: 4.0 }.is_defect());
        assert!(!FrontierError::config("zero rays").is_defect());
    }

    #[test]
    fn test_from_load_error() {
        let err: FrontierError = ConfigLoadError::Parse("bad".into()).into();
        assert_eq!(err, FrontierError::Configuration("Parse error: bad".into()));
    }
}

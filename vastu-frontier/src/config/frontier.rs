//! Cell classification thresholds and visibility sentinels.

use serde::{Deserialize, Serialize};

use crate::core::CellState;
use crate::error::{FrontierError, Result};

use super::defaults;

/// Maps raw occupancy values and visibility states to numbers.
///
/// `max_occupied_threshold` applies to the *source* grid: any value at or
/// below it stops a ray. The three `*_value` fields are markers for the
/// *visibility* grid only and must be pairwise distinct.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontierConfig {
    /// Marker for cells a ray passed through
    #[serde(default = "defaults::free_value")]
    pub free_value: f32,

    /// Marker for cells no ray reached
    #[serde(default = "defaults::unknown_value")]
    pub unknown_value: f32,

    /// Marker for cells a ray stopped on
    #[serde(default = "defaults::occupied_value")]
    pub occupied_value: f32,

    /// Source values `<=` this are opaque (map-image convention, dark = occupied)
    #[serde(default = "defaults::max_occupied_threshold")]
    pub max_occupied_threshold: f32,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            free_value: defaults::free_value(),
            unknown_value: defaults::unknown_value(),
            occupied_value: defaults::occupied_value(),
            max_occupied_threshold: defaults::max_occupied_threshold(),
        }
    }
}

impl FrontierConfig {
    /// Check sentinel distinctness and that every value is finite.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("free_value", self.free_value),
            ("unknown_value", self.unknown_value),
            ("occupied_value", self.occupied_value),
            ("max_occupied_threshold", self.max_occupied_threshold),
        ];
        if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(FrontierError::config(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.free_value == self.unknown_value
            || self.free_value == self.occupied_value
            || self.unknown_value == self.occupied_value
        {
            return Err(FrontierError::config(format!(
                "visibility markers must be distinct (free={}, unknown={}, occupied={})",
                self.free_value, self.unknown_value, self.occupied_value
            )));
        }

        Ok(())
    }

    /// Does a raw source value block rays?
    #[inline]
    pub fn is_opaque(&self, value: f32) -> bool {
        value <= self.max_occupied_threshold
    }

    /// Marker value for a visibility state.
    #[inline]
    pub fn value_of(&self, state: CellState) -> f32 {
        match state {
            CellState::Unknown => self.unknown_value,
            CellState::Free => self.free_value,
            CellState::Occupied => self.occupied_value,
        }
    }

    /// Visibility state for a marker value (exact match, otherwise Unknown).
    #[inline]
    pub fn state_of(&self, value: f32) -> CellState {
        if value == self.free_value {
            CellState::Free
        } else if value == self.occupied_value {
            CellState::Occupied
        } else {
            CellState::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FrontierConfig::default().validate().is_ok());
    }

    #[test]
    fn test_duplicate_markers_rejected() {
        let config = FrontierConfig {
            unknown_value: 0.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_nan_rejected() {
        let config = FrontierConfig {
            max_occupied_threshold: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_opaque_threshold_inclusive() {
        let config = FrontierConfig::default();
        assert!(config.is_opaque(50.0));
        assert!(config.is_opaque(0.0));
        assert!(!config.is_opaque(50.5));
    }
}

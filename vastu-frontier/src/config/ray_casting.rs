//! Simulated sensor geometry.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::{FrontierError, Result};

use super::defaults;

/// Ray fan and grid geometry for visibility simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RayCastingConfig {
    /// Angular width of the fan in radians, in (0, 2π]
    #[serde(default = "defaults::field_of_view")]
    pub field_of_view: f64,

    /// Number of rays in the fan (>= 1)
    #[serde(default = "defaults::ray_count")]
    pub ray_count: usize,

    /// Meters per grid cell
    #[serde(default = "defaults::grid_cell_size")]
    pub grid_cell_size: f64,

    /// Meters advanced per ray step
    #[serde(default = "defaults::step_size")]
    pub step_size: f64,

    /// Maximum travel per ray in meters; `None` casts until the ray leaves the grid
    #[serde(default)]
    pub max_range: Option<f64>,
}

impl Default for RayCastingConfig {
    fn default() -> Self {
        Self {
            field_of_view: defaults::field_of_view(),
            ray_count: defaults::ray_count(),
            grid_cell_size: defaults::grid_cell_size(),
            step_size: defaults::step_size(),
            max_range: None,
        }
    }
}

impl RayCastingConfig {
    /// Full-circle fan with `ray_count` rays over cells of `grid_cell_size`,
    /// stepping half a cell at a time.
    pub fn omnidirectional(ray_count: usize, grid_cell_size: f64) -> Self {
        Self {
            field_of_view: TAU,
            ray_count,
            grid_cell_size,
            step_size: grid_cell_size * 0.5,
            max_range: None,
        }
    }

    /// Same configuration limited to `max_range` meters.
    pub fn with_max_range(mut self, max_range: f64) -> Self {
        self.max_range = Some(max_range);
        self
    }

    /// Reject geometry that would produce no rays or never terminate.
    pub fn validate(&self) -> Result<()> {
        if self.ray_count == 0 {
            return Err(FrontierError::config("ray_count must be at least 1"));
        }
        if !(self.field_of_view.is_finite() && self.field_of_view > 0.0 && self.field_of_view <= TAU)
        {
            return Err(FrontierError::config(format!(
                "field_of_view must be in (0, 2π], got {}",
                self.field_of_view
            )));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(FrontierError::config(format!(
                "step_size must be positive, got {}",
                self.step_size
            )));
        }
        if !(self.grid_cell_size.is_finite() && self.grid_cell_size > 0.0) {
            return Err(FrontierError::config(format!(
                "grid_cell_size must be positive, got {}",
                self.grid_cell_size
            )));
        }
        if let Some(range) = self.max_range
            && !(range.is_finite() && range > 0.0)
        {
            return Err(FrontierError::config(format!(
                "max_range must be positive, got {}",
                range
            )));
        }
        Ok(())
    }

    /// Angle between consecutive rays.
    #[inline]
    pub fn angle_increment(&self) -> f64 {
        self.field_of_view / self.ray_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = RayCastingConfig::default();
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.angle_increment(), TAU / 360.0);
    }

    #[test]
    fn test_zero_rays_rejected() {
        let config = RayCastingConfig {
            ray_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_field_of_view_bounds() {
        for fov in [0.0, -1.0, TAU + 1e-6, f64::NAN, f64::INFINITY] {
            let config = RayCastingConfig {
                field_of_view: fov,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "fov {} accepted", fov);
        }
        let full = RayCastingConfig {
            field_of_view: TAU,
            ..Default::default()
        };
        assert!(full.validate().is_ok());
    }

    #[test]
    fn test_step_and_cell_size_positive() {
        let config = RayCastingConfig {
            step_size: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RayCastingConfig {
            grid_cell_size: -0.05,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_max_range() {
        let config = RayCastingConfig::omnidirectional(90, 0.1).with_max_range(2.0);
        assert!(config.validate().is_ok());
        assert_relative_eq!(config.step_size, 0.05);

        let config = RayCastingConfig::default().with_max_range(0.0);
        assert!(config.validate().is_err());
    }
}

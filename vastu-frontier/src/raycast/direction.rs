//! Ray direction resolution and the angular sweep.
//!
//! Angles are measured from the +column axis toward the +row axis, so the
//! unit direction for angle θ is `(sin θ, cos θ)` in `(row, col)` order:
//!
//! ```text
//!            θ = -π/2  (-row)
//!                 ▲
//!                 │
//!  θ = ±π ◀───────●───────▶ θ = 0  (+col)
//!                 │
//!                 ▼
//!            θ = +π/2  (+row)
//! ```
//!
//! A single `sin_cos` call covers all four quadrants, so the direction is
//! continuous across -π/2, 0 and π/2.

use std::f64::consts::PI;

use crate::error::{FrontierError, Result};

/// Unit step direction in grid axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Direction {
    /// Component along rows (metric x)
    pub d_row: f64,
    /// Component along columns (metric y)
    pub d_col: f64,
}

/// Resolve the unit direction for `angle`.
///
/// Only `[-π, π]` is accepted. Anything else (including NaN) means the sweep
/// was generated incorrectly and is reported as [`FrontierError::InvalidAngle`].
pub fn ray_direction(angle: f64) -> Result<Direction> {
    if !(-PI..=PI).contains(&angle) {
        return Err(FrontierError::InvalidAngle { angle });
    }
    let (sin, cos) = angle.sin_cos();
    Ok(Direction {
        d_row: sin,
        d_col: cos,
    })
}

/// Angles of a `ray_count`-ray fan of width `field_of_view` centred on 0.
///
/// Ray `i` points at `-fov/2 + i * fov/ray_count`. Each angle is derived from
/// its index rather than accumulated, so a full 2π fan stays within `[-π, π)`.
pub fn sweep_angles(field_of_view: f64, ray_count: usize) -> impl Iterator<Item = f64> {
    let start = -field_of_view / 2.0;
    let increment = field_of_view / ray_count.max(1) as f64;
    (0..ray_count).map(move |i| start + i as f64 * increment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

    #[test]
    fn test_cardinal_directions() {
        let east = ray_direction(0.0).unwrap();
        assert_relative_eq!(east.d_row, 0.0);
        assert_relative_eq!(east.d_col, 1.0);

        let south = ray_direction(FRAC_PI_2).unwrap();
        assert_relative_eq!(south.d_row, 1.0);
        assert_relative_eq!(south.d_col, 0.0, epsilon = 1e-12);

        let west = ray_direction(-PI).unwrap();
        assert_relative_eq!(west.d_row, 0.0, epsilon = 1e-12);
        assert_relative_eq!(west.d_col, -1.0);
    }

    #[test]
    fn test_unit_length() {
        for angle in sweep_angles(TAU, 64) {
            let d = ray_direction(angle).unwrap();
            assert_relative_eq!(d.d_row.hypot(d.d_col), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_continuous_across_quadrant_seams() {
        let eps = 1e-9;
        for seam in [-FRAC_PI_2, 0.0, FRAC_PI_2] {
            let before = ray_direction(seam - eps).unwrap();
            let after = ray_direction(seam + eps).unwrap();
            let jump = (before.d_row - after.d_row).hypot(before.d_col - after.d_col);
            assert!(jump < 1e-8, "discontinuity {} at seam {}", jump, seam);
        }
    }

    #[test]
    fn test_diagonal() {
        let d = ray_direction(-3.0 * FRAC_PI_4).unwrap();
        assert_relative_eq!(d.d_row, -FRAC_PI_4.sin(), epsilon = 1e-12);
        assert_relative_eq!(d.d_col, -FRAC_PI_4.cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_out_of_range_is_defect() {
        for angle in [PI + 1e-9, -PI - 1e-9, 4.0, f64::NAN, f64::INFINITY] {
            let err = ray_direction(angle).unwrap_err();
            assert!(err.is_defect());
        }
        assert!(ray_direction(PI).is_ok());
        assert!(ray_direction(-PI).is_ok());
    }

    #[test]
    fn test_sweep_angles() {
        let angles: Vec<f64> = sweep_angles(FRAC_PI_2, 4).collect();
        assert_eq!(angles.len(), 4);
        assert_relative_eq!(angles[0], -FRAC_PI_4);
        assert_relative_eq!(angles[1], -FRAC_PI_4 + FRAC_PI_2 / 4.0);
        assert_relative_eq!(angles[3], -FRAC_PI_4 + 3.0 * FRAC_PI_2 / 4.0);
    }

    #[test]
    fn test_full_sweep_stays_in_range() {
        for count in [1, 3, 360, 1000, 4097] {
            let angles: Vec<f64> = sweep_angles(TAU, count).collect();
            assert_eq!(angles.len(), count);
            assert_eq!(angles[0], -PI);
            assert!(angles.iter().all(|&a| ray_direction(a).is_ok()));
        }
    }
}

//! Visibility simulation by ray casting.
//!
//! A fan of rays is cast from a viewpoint across the source occupancy grid.
//! The result is a [`VisibilityGrid`](crate::grid::VisibilityGrid) holding
//! only what a sensor at that viewpoint could have observed.
//!
//! - [`direction`]: angle to unit step conversion and fan angles
//! - [`RayCaster`]: sequential and multi-threaded casting

pub mod direction;
mod caster;

pub use caster::{RayCaster, RayOutcome, RayTermination};
pub use direction::{Direction, ray_direction, sweep_angles};

//! Core value types.
//!
//! ## Coordinates
//! - [`Cell`]: Integer `(row, col)` index into a grid
//! - [`GridPoint`]: Real-valued position in index units (region centroids)
//! - [`MetricPoint`]: Position in meters, `x` along rows and `y` along columns
//!
//! ## Cell States
//! - [`CellState`]: What the simulated sensor saw (Unknown, Free, Occupied)
//!
//! A cell index `i` maps to the metric cell centre `i * cell_size + cell_size / 2`:
//!
//! ```text
//!   col:    0     1     2
//!        ┌─────┬─────┬─────┐
//! row 0  │  ●  │     │     │   ● = (0.5·cs, 0.5·cs)
//!        ├─────┼─────┼─────┤
//! row 1  │     │     │  ●  │   ● = (1.5·cs, 2.5·cs)
//!        └─────┴─────┴─────┘
//! ```

mod cell;
mod point;

pub use cell::{Cell, CellState, NEIGHBOR_OFFSETS_8};
pub use point::{GridPoint, MetricPoint};

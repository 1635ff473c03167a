//! Continuous coordinates in grid and metric units.

use serde::{Deserialize, Serialize};

use super::Cell;

/// Real-valued position in grid index units.
///
/// `(2.0, 3.0)` is the index of cell (2, 3), not its centre.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GridPoint {
    /// Row coordinate
    pub row: f64,
    /// Column coordinate
    pub col: f64,
}

impl GridPoint {
    /// Create a new grid point.
    #[inline]
    pub const fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Convert to metric units, mapping index `i` to the cell centre
    /// `i * cell_size + cell_size / 2`.
    #[inline]
    pub fn to_metric(self, cell_size: f64) -> MetricPoint {
        let half = cell_size / 2.0;
        MetricPoint::new(self.row * cell_size + half, self.col * cell_size + half)
    }
}

impl From<Cell> for GridPoint {
    fn from(cell: Cell) -> Self {
        Self::new(cell.row as f64, cell.col as f64)
    }
}

/// Position in meters.
///
/// `x` runs along grid rows and `y` along grid columns, the same frame the
/// ray caster steps in.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Meters along the row axis
    pub x: f64,
    /// Meters along the column axis
    pub y: f64,
}

impl MetricPoint {
    /// Create a new metric point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Centre of `cell` in meters.
    #[inline]
    pub fn cell_center(cell: Cell, cell_size: f64) -> Self {
        GridPoint::from(cell).to_metric(cell_size)
    }

    /// Cell containing this point, or `None` if it lies before the grid origin.
    #[inline]
    pub fn to_cell(self, cell_size: f64) -> Option<Cell> {
        let row = (self.x / cell_size).floor();
        let col = (self.y / cell_size).floor();
        if row < 0.0 || col < 0.0 || !row.is_finite() || !col.is_finite() {
            return None;
        }
        Some(Cell::new(row as usize, col as usize))
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &MetricPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<MetricPoint> for [f64; 2] {
    fn from(p: MetricPoint) -> Self {
        [p.x, p.y]
    }
}

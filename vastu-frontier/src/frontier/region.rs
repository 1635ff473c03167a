//! Connected frontier regions.

use crate::core::{Cell, GridPoint, MetricPoint};

/// An 8-connected group of frontier cells.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierRegion {
    /// Member cells in discovery order
    pub cells: Vec<Cell>,
    /// Mean `(row, col)` of the member cells
    pub centroid: GridPoint,
}

impl FrontierRegion {
    /// Build a region from its member cells, computing the centroid.
    ///
    /// An empty cell list yields a centroid at the origin.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        let n = cells.len().max(1) as f64;
        let (sum_row, sum_col) = cells.iter().fold((0.0, 0.0), |(r, c), cell| {
            (r + cell.row as f64, c + cell.col as f64)
        });
        Self {
            centroid: GridPoint::new(sum_row / n, sum_col / n),
            cells,
        }
    }

    /// Number of member cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the region has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Centroid in meters, `mean_index * cell_size + cell_size / 2`.
    #[inline]
    pub fn metric_center(&self, cell_size: f64) -> MetricPoint {
        self.centroid.to_metric(cell_size)
    }

    /// Does the region contain `cell`?
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

//! Read-only access to source occupancy maps.

use crate::core::Cell;

use super::GridBuffer;

/// A 2-D occupancy map the frontier pipeline can read.
///
/// Values follow the map-image convention: higher means more likely free.
/// Any value at or below `FrontierConfig::max_occupied_threshold` blocks rays.
/// The pipeline never writes to the source grid.
pub trait OccupancyGrid {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Raw occupancy value at `cell`, `None` if out of bounds.
    fn value(&self, cell: Cell) -> Option<f32>;

    /// Is the cell inside the grid?
    #[inline]
    fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.rows(), self.cols())
    }
}

impl<T: Copy + Into<f32>> OccupancyGrid for GridBuffer<T> {
    #[inline]
    fn rows(&self) -> usize {
        GridBuffer::rows(self)
    }

    #[inline]
    fn cols(&self) -> usize {
        GridBuffer::cols(self)
    }

    #[inline]
    fn value(&self, cell: Cell) -> Option<f32> {
        self.get(cell).map(|&v| v.into())
    }
}

impl<G: OccupancyGrid + ?Sized> OccupancyGrid for &G {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn value(&self, cell: Cell) -> Option<f32> {
        (**self).value(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims<G: OccupancyGrid>(grid: G) -> (usize, usize) {
        (grid.rows(), grid.cols())
    }

    #[test]
    fn test_u8_image_grid() {
        let image = GridBuffer::from_vec(1, 3, vec![0u8, 205, 255]).unwrap();
        assert_eq!(image.value(Cell::new(0, 1)), Some(205.0));
        assert_eq!(image.value(Cell::new(0, 3)), None);
    }

    #[test]
    fn test_reference_impl() {
        let grid = GridBuffer::new(3, 7, 1.0f32);
        assert_eq!(dims(&grid), (3, 7));
        assert!((&grid).contains(Cell::new(2, 6)));
        assert!(!(&grid).contains(Cell::new(3, 0)));
    }
}

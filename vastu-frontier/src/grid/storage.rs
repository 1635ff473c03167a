//! Row-major dense grid storage.

use crate::core::Cell;
use crate::error::{FrontierError, Result};

/// Dense 2-D grid stored as one contiguous row-major array.
///
/// ```text
/// cell (r, c) → data[r * cols + c]
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridBuffer<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> GridBuffer<T> {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        Self {
            data: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }
}

impl<T> GridBuffer<T> {
    /// Wrap existing row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(FrontierError::DimensionMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a grid by evaluating `f` at every cell.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Cell) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                data.push(f(Cell::new(row, col)));
            }
        }
        Self { data, rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    /// Is the cell inside the grid?
    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.is_within(self.rows, self.cols)
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell).then(|| cell.row * self.cols + cell.col)
    }

    /// Borrow a cell, `None` if out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.index(cell).map(|i| &self.data[i])
    }

    /// Mutably borrow a cell, `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.index(cell).map(|i| &mut self.data[i])
    }

    /// Write a cell. Out-of-bounds writes are ignored and return `false`.
    #[inline]
    pub fn set(&mut self, cell: Cell, value: T) -> bool {
        match self.get_mut(cell) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate `(cell, value)` pairs in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Cell, &T)> {
        let cols = self.cols.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Cell::new(i / cols, i % cols), v))
    }

    /// Same-shaped grid produced by applying `f` to every value.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> GridBuffer<U> {
        GridBuffer {
            data: self.data.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = GridBuffer::new(4, 6, 0u8);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 6);
        assert_eq!(grid.cell_count(), 24);
    }

    #[test]
    fn test_from_vec_dimension_check() {
        assert!(GridBuffer::from_vec(2, 2, vec![0.0f32; 4]).is_ok());
        let err = GridBuffer::from_vec(2, 3, vec![0.0f32; 5]).unwrap_err();
        assert_eq!(
            err,
            FrontierError::DimensionMismatch {
                rows: 2,
                cols: 3,
                len: 5
            }
        );
    }

    #[test]
    fn test_row_major_layout() {
        let grid = GridBuffer::from_vec(2, 3, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.get(Cell::new(0, 2)), Some(&2));
        assert_eq!(grid.get(Cell::new(1, 0)), Some(&3));
        assert_eq!(grid.get(Cell::new(2, 0)), None);
    }

    #[test]
    fn test_get_set_cell() {
        let mut grid = GridBuffer::new(3, 3, false);
        assert!(grid.set(Cell::new(1, 2), true));
        assert_eq!(grid.get(Cell::new(1, 2)), Some(&true));
        assert!(!grid.set(Cell::new(3, 0), true));
    }

    #[test]
    fn test_iter_cells_order() {
        let grid = GridBuffer::from_fn(2, 2, |c| c.row * 10 + c.col);
        let cells: Vec<_> = grid.iter_cells().map(|(c, v)| (c, *v)).collect();
        assert_eq!(
            cells,
            vec![
                (Cell::new(0, 0), 0),
                (Cell::new(0, 1), 1),
                (Cell::new(1, 0), 10),
                (Cell::new(1, 1), 11),
            ]
        );
    }
}

//! Grid cell addressing and visibility states.

use serde::{Deserialize, Serialize};

/// Offsets of the 8-connected neighbourhood, row-major order.
pub const NEIGHBOR_OFFSETS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Integer cell index into a row-major grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a new cell index.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Is this cell inside a `rows` x `cols` grid?
    #[inline]
    pub fn is_within(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }

    /// Apply a signed offset, returning `None` if the result falls outside
    /// a `rows` x `cols` grid.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, rows: usize, cols: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let cell = Cell::new(row, col);
        cell.is_within(rows, cols).then_some(cell)
    }

    /// In-bounds 8-connected neighbours.
    pub fn neighbors_8(self, rows: usize, cols: usize) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS_8
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc, rows, cols))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// What the simulated sensor observed at a cell.
///
/// - `Unknown` - no ray reached the cell
/// - `Free` - a ray passed through the cell
/// - `Occupied` - a ray terminated on the cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellState {
    /// Not observed by any ray
    #[default]
    Unknown = 0,
    /// Traversed by a ray
    Free = 1,
    /// Ray stopped here
    Occupied = 2,
}

impl CellState {
    /// Has a ray observed this cell?
    #[inline]
    pub fn is_known(self) -> bool {
        self != CellState::Unknown
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellState::Unknown => '?',
            CellState::Free => '.',
            CellState::Occupied => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bounds() {
        let cell = Cell::new(0, 0);
        assert_eq!(cell.offset(-1, 0, 5, 5), None);
        assert_eq!(cell.offset(0, -1, 5, 5), None);
        assert_eq!(cell.offset(1, 1, 5, 5), Some(Cell::new(1, 1)));
        assert_eq!(Cell::new(4, 4).offset(1, 0, 5, 5), None);
    }

    #[test]
    fn test_neighbors_interior_and_corner() {
        assert_eq!(Cell::new(2, 2).neighbors_8(5, 5).count(), 8);
        assert_eq!(Cell::new(0, 0).neighbors_8(5, 5).count(), 3);
        assert_eq!(Cell::new(0, 2).neighbors_8(5, 5).count(), 5);
    }

    #[test]
    fn test_neighbors_exclude_self() {
        let center = Cell::new(1, 1);
        assert!(center.neighbors_8(3, 3).all(|n| n != center));
    }

    #[test]
    fn test_state_chars() {
        assert_eq!(CellState::default(), CellState::Unknown);
        assert_eq!(CellState::Free.as_char(), '.');
        assert!(!CellState::Unknown.is_known());
        assert!(CellState::Occupied.is_known());
    }
}

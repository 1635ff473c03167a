//! Frontier cell classification.

use crate::core::{Cell, CellState};
use crate::grid::{FrontierMask, VisibilityGrid};

/// Marks free cells that border unobserved space.
///
/// A cell is a frontier iff it is Free and at least one of its in-bounds
/// 8-neighbours is Unknown. Cells on the grid edge are not frontiers merely
/// because they touch the edge.
pub struct FrontierClassifier;

impl FrontierClassifier {
    /// Build the frontier mask for a visibility grid.
    pub fn classify(visibility: &VisibilityGrid) -> FrontierMask {
        let mut mask = FrontierMask::new(visibility.rows(), visibility.cols());
        for (cell, &state) in visibility.states().iter_cells() {
            if state == CellState::Free && Self::touches_unknown(visibility, cell) {
                mask.mark(cell);
            }
        }
        log::debug!(
            "Classified {} frontier cells in {}x{} grid",
            mask.count(),
            visibility.rows(),
            visibility.cols()
        );
        mask
    }

    /// Is `cell` a frontier cell of `visibility`?
    pub fn is_frontier_cell(visibility: &VisibilityGrid, cell: Cell) -> bool {
        visibility.is(cell, CellState::Free) && Self::touches_unknown(visibility, cell)
    }

    #[inline]
    fn touches_unknown(visibility: &VisibilityGrid, cell: Cell) -> bool {
        cell.neighbors_8(visibility.rows(), visibility.cols())
            .any(|n| visibility.is(n, CellState::Unknown))
    }
}

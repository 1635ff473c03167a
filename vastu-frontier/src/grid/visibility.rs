//! Per-query visibility grid and frontier mask.

use crate::config::FrontierConfig;
use crate::core::{Cell, CellState};
use crate::error::{FrontierError, Result};

use super::GridBuffer;

/// What one ray-casting pass observed from a single viewpoint.
///
/// Starts entirely [`CellState::Unknown`]; only the ray caster marks cells.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityGrid {
    states: GridBuffer<CellState>,
}

impl VisibilityGrid {
    /// Create an all-unknown grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            states: GridBuffer::new(rows, cols, CellState::Unknown),
        }
    }

    /// Wrap an existing state buffer.
    pub fn from_states(states: GridBuffer<CellState>) -> Self {
        Self { states }
    }

    /// Parse the picture produced by [`render`](Self::render).
    ///
    /// One line per row: `?` unknown, `.` free, `#` occupied. Surrounding
    /// whitespace on each line and blank lines are ignored.
    pub fn from_ascii(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != cols) {
            return Err(FrontierError::DimensionMismatch {
                rows,
                cols,
                len: lines.iter().map(|l| l.chars().count()).sum(),
            });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for line in &lines {
            for ch in line.chars() {
                let state = match ch {
                    '?' => CellState::Unknown,
                    '.' => CellState::Free,
                    '#' => CellState::Occupied,
                    other => {
                        return Err(FrontierError::config(format!(
                            "unexpected visibility character '{}'",
                            other
                        )));
                    }
                };
                data.push(state);
            }
        }

        GridBuffer::from_vec(rows, cols, data).map(Self::from_states)
    }

    /// Read a grid of numeric sentinels, matching values exactly.
    ///
    /// Values equal to neither `free_value` nor `occupied_value` read as Unknown.
    pub fn from_values(values: &GridBuffer<f32>, config: &FrontierConfig) -> Self {
        Self::from_states(values.map(|&v| config.state_of(v)))
    }

    /// Render as numeric sentinels using `config`'s marker values.
    pub fn to_values(&self, config: &FrontierConfig) -> GridBuffer<f32> {
        self.states.map(|&s| config.value_of(s))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.states.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.states.cols()
    }

    /// Observed state, `None` if out of bounds.
    #[inline]
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        self.states.get(cell).copied()
    }

    /// Is the cell observed as `state`? Out-of-bounds cells never match.
    #[inline]
    pub fn is(&self, cell: Cell, state: CellState) -> bool {
        self.state(cell) == Some(state)
    }

    /// Record an observation.
    #[inline]
    pub(crate) fn mark(&mut self, cell: Cell, state: CellState) {
        self.states.set(cell, state);
    }

    /// Overlay every observed cell of `other` onto this grid.
    ///
    /// Cells `other` never observed keep their current state.
    pub(crate) fn overlay(&mut self, other: &VisibilityGrid) {
        debug_assert_eq!(self.rows(), other.rows());
        debug_assert_eq!(self.cols(), other.cols());
        for (cell, &state) in other.states.iter_cells() {
            if state.is_known() {
                self.states.set(cell, state);
            }
        }
    }

    /// Count cells in a given state.
    pub fn count(&self, state: CellState) -> usize {
        self.states.as_slice().iter().filter(|&&s| s == state).count()
    }

    /// Underlying state buffer.
    pub fn states(&self) -> &GridBuffer<CellState> {
        &self.states
    }

    /// ASCII picture of the grid, one line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let state = self.states.get(Cell::new(row, col)).copied().unwrap_or_default();
                out.push(state.as_char());
            }
            out.push('\n');
        }
        out
    }
}

/// Boolean grid marking frontier cells.
#[derive(Clone, Debug, PartialEq)]
pub struct FrontierMask {
    cells: GridBuffer<bool>,
}

impl FrontierMask {
    /// Create an empty mask.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: GridBuffer::new(rows, cols, false),
        }
    }

    /// Wrap an existing boolean buffer.
    pub fn from_buffer(cells: GridBuffer<bool>) -> Self {
        Self { cells }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.cells.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cells.cols()
    }

    /// Is `cell` a frontier cell? Out-of-bounds cells are not.
    #[inline]
    pub fn is_frontier(&self, cell: Cell) -> bool {
        self.cells.get(cell).copied().unwrap_or(false)
    }

    #[inline]
    pub(crate) fn mark(&mut self, cell: Cell) {
        self.cells.set(cell, true);
    }

    /// Frontier cells in row-major order.
    pub fn frontier_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter_cells()
            .filter_map(|(cell, &flag)| flag.then_some(cell))
    }

    /// Number of frontier cells.
    pub fn count(&self) -> usize {
        self.cells.as_slice().iter().filter(|&&f| f).count()
    }

    /// True when no cell is a frontier.
    pub fn is_empty(&self) -> bool {
        !self.cells.as_slice().iter().any(|&f| f)
    }
}

//! Test utilities for VastuFrontier.
//!
//! Map builders and a brute-force frontier reference used by the integration tests.

#![allow(dead_code)]

use std::f64::consts::TAU;
use vastu_frontier::{
    Cell, CellState, FinderConfig, FrontierFinder, GridBuffer, RayCastingConfig, VisibilityGrid,
};

/// Map image value for open floor.
pub const OPEN: f32 = 200.0;

/// Map image value for a wall.
pub const WALL: f32 = 0.0;

/// Route `log` output through the test harness (`RUST_LOG=debug` to see it).
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a map with every cell open.
pub fn open_map(rows: usize, cols: usize) -> GridBuffer<f32> {
    GridBuffer::new(rows, cols, OPEN)
}

/// Create a map with walls at the given cells.
pub fn map_with_walls(rows: usize, cols: usize, walls: &[Cell]) -> GridBuffer<f32> {
    let mut map = open_map(rows, cols);
    for &cell in walls {
        map.set(cell, WALL);
    }
    map
}

/// Create a rectangular room: walls on the border, open inside.
pub fn room_map(rows: usize, cols: usize) -> GridBuffer<f32> {
    GridBuffer::from_fn(rows, cols, |cell| {
        let border = cell.row == 0 || cell.col == 0 || cell.row + 1 == rows || cell.col + 1 == cols;
        if border { WALL } else { OPEN }
    })
}

/// Full-circle fan over 1 m cells.
pub fn unit_fan(ray_count: usize, step_size: f64, max_range: Option<f64>) -> RayCastingConfig {
    RayCastingConfig {
        field_of_view: TAU,
        ray_count,
        grid_cell_size: 1.0,
        step_size,
        max_range,
    }
}

/// Finder with default thresholds and the given fan.
pub fn finder(ray_casting: RayCastingConfig) -> FrontierFinder {
    FrontierFinder::new(FinderConfig {
        ray_casting,
        ..Default::default()
    })
    .expect("valid test configuration")
}

/// Frontier cells by direct definition: Free with any in-bounds Unknown 8-neighbour.
pub fn reference_frontiers(visibility: &VisibilityGrid) -> Vec<Cell> {
    let (rows, cols) = (visibility.rows() as isize, visibility.cols() as isize);
    let mut cells = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            let cell = Cell::new(row as usize, col as usize);
            if visibility.state(cell) != Some(CellState::Free) {
                continue;
            }
            let mut touches_unknown = false;
            for dr in -1..=1isize {
                for dc in -1..=1isize {
                    let (r, c) = (row + dr, col + dc);
                    if (dr, dc) == (0, 0) || r < 0 || c < 0 || r >= rows || c >= cols {
                        continue;
                    }
                    if visibility.state(Cell::new(r as usize, c as usize))
                        == Some(CellState::Unknown)
                    {
                        touches_unknown = true;
                    }
                }
            }
            if touches_unknown {
                cells.push(cell);
            }
        }
    }
    cells
}

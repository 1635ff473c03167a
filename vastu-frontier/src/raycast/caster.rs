//! Fan ray casting into a visibility grid.

use crate::config::{FrontierConfig, RayCastingConfig};
use crate::core::{Cell, CellState, MetricPoint};
use crate::error::Result;
use crate::grid::{OccupancyGrid, VisibilityGrid};

use super::direction::{ray_direction, sweep_angles};

/// Why a ray stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayTermination {
    /// Stopped on an opaque cell
    Hit(Cell),
    /// Stepped outside the grid
    LeftGrid,
    /// Travelled further than `max_range`
    RangeLimit,
}

/// Result of tracing one ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayOutcome {
    /// Ray angle in radians
    pub angle: f64,
    /// Number of grid reads before stopping
    pub steps: usize,
    /// Why the ray stopped
    pub termination: RayTermination,
}

impl RayOutcome {
    /// The opaque cell this ray stopped on, if any.
    #[inline]
    pub fn hit(&self) -> Option<Cell> {
        match self.termination {
            RayTermination::Hit(cell) => Some(cell),
            _ => None,
        }
    }
}

/// Simulates a range sensor by stepping rays across an occupancy grid.
///
/// ```text
///   ? ? ? ? ? ? ?
///   ? . . # ? ? ?      ● viewpoint
///   ? . . . . . ?      . traversed (Free)
///   ? . . ● . . ?      # ray stopped (Occupied)
///   ? . . . . . ?      ? not reached (Unknown)
///   ? ? . . . ? ?
/// ```
///
/// Every ray starts at the viewpoint cell centre and advances `step_size`
/// meters at a time. Each sampled cell is marked Free, until a cell whose raw
/// value is at or below `max_occupied_threshold` is marked Occupied and the
/// ray ends. Rays also end silently when they leave the grid or exceed
/// `max_range`.
#[derive(Clone, Debug)]
pub struct RayCaster {
    frontier: FrontierConfig,
    ray_casting: RayCastingConfig,
}

impl RayCaster {
    /// Create a ray caster, rejecting invalid configuration.
    pub fn new(frontier: FrontierConfig, ray_casting: RayCastingConfig) -> Result<Self> {
        frontier.validate()?;
        ray_casting.validate()?;
        Ok(Self {
            frontier,
            ray_casting,
        })
    }

    /// Classification thresholds in use.
    pub fn frontier_config(&self) -> &FrontierConfig {
        &self.frontier
    }

    /// Ray fan geometry in use.
    pub fn ray_casting_config(&self) -> &RayCastingConfig {
        &self.ray_casting
    }

    /// Angles of every ray in sweep order.
    pub fn ray_angles(&self) -> impl Iterator<Item = f64> {
        sweep_angles(self.ray_casting.field_of_view, self.ray_casting.ray_count)
    }

    /// Cast the full fan from `viewpoint`.
    pub fn cast<G: OccupancyGrid + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
    ) -> Result<VisibilityGrid> {
        let mut visibility = VisibilityGrid::new(grid.rows(), grid.cols());
        for angle in self.ray_angles() {
            self.trace_ray(viewpoint, angle, grid, &mut visibility)?;
        }
        self.log_summary(viewpoint, &visibility);
        Ok(visibility)
    }

    /// Cast the full fan, also reporting how every ray ended.
    pub fn cast_with_outcomes<G: OccupancyGrid + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
    ) -> Result<(VisibilityGrid, Vec<RayOutcome>)> {
        let mut visibility = VisibilityGrid::new(grid.rows(), grid.cols());
        let mut outcomes = Vec::with_capacity(self.ray_casting.ray_count);
        for angle in self.ray_angles() {
            outcomes.push(self.trace_ray(viewpoint, angle, grid, &mut visibility)?);
        }
        self.log_summary(viewpoint, &visibility);
        Ok((visibility, outcomes))
    }

    /// Cast the fan on up to `workers` scoped threads.
    ///
    /// The sweep is split into contiguous chunks, each traced into a private
    /// grid. Buffers are overlaid in sweep order, so the result is identical
    /// to [`cast`](Self::cast).
    pub fn cast_parallel<G: OccupancyGrid + Sync + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
        workers: usize,
    ) -> Result<VisibilityGrid> {
        let angles: Vec<f64> = self.ray_angles().collect();
        let workers = workers.min(angles.len());
        if workers <= 1 {
            return self.cast(viewpoint, grid);
        }

        let chunk_len = angles.len().div_ceil(workers);
        let (rows, cols) = (grid.rows(), grid.cols());

        let partials: Vec<Result<VisibilityGrid>> = std::thread::scope(|scope| {
            let handles: Vec<_> = angles
                .chunks(chunk_len)
                .map(|chunk| {
                    scope.spawn(move || -> Result<VisibilityGrid> {
                        let mut local = VisibilityGrid::new(rows, cols);
                        for &angle in chunk {
                            self.trace_ray(viewpoint, angle, grid, &mut local)?;
                        }
                        Ok(local)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        });

        let mut visibility = VisibilityGrid::new(rows, cols);
        for partial in partials {
            visibility.overlay(&partial?);
        }
        self.log_summary(viewpoint, &visibility);
        Ok(visibility)
    }

    /// Trace a single ray from the centre of `viewpoint`, marking `visibility`.
    pub fn trace_ray<G: OccupancyGrid + ?Sized>(
        &self,
        viewpoint: Cell,
        angle: f64,
        grid: &G,
        visibility: &mut VisibilityGrid,
    ) -> Result<RayOutcome> {
        let direction = ray_direction(angle)?;
        let cell_size = self.ray_casting.grid_cell_size;
        let step_size = self.ray_casting.step_size;
        let start = MetricPoint::cell_center(viewpoint, cell_size);
        let extent_x = grid.rows() as f64 * cell_size;
        let extent_y = grid.cols() as f64 * cell_size;

        let mut steps = 0usize;
        let termination = loop {
            let travelled = steps as f64 * step_size;
            if let Some(range) = self.ray_casting.max_range
                && travelled > range
            {
                break RayTermination::RangeLimit;
            }

            let position = MetricPoint::new(
                start.x + direction.d_row * travelled,
                start.y + direction.d_col * travelled,
            );
            if !(position.x >= 0.0
                && position.y >= 0.0
                && position.x < extent_x
                && position.y < extent_y)
            {
                break RayTermination::LeftGrid;
            }

            // Flooring can still land one past the edge for positions just below the extent.
            let Some((cell, value)) = position
                .to_cell(cell_size)
                .and_then(|cell| grid.value(cell).map(|v| (cell, v)))
            else {
                break RayTermination::LeftGrid;
            };

            steps += 1;
            if self.frontier.is_opaque(value) {
                visibility.mark(cell, CellState::Occupied);
                break RayTermination::Hit(cell);
            }
            visibility.mark(cell, CellState::Free);
        };

        log::trace!(
            "ray {:+.4} rad from ({}, {}): {} steps, {:?}",
            angle,
            viewpoint.row,
            viewpoint.col,
            steps,
            termination
        );

        Ok(RayOutcome {
            angle,
            steps,
            termination,
        })
    }

    fn log_summary(&self, viewpoint: Cell, visibility: &VisibilityGrid) {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Cast {} rays from ({}, {}): {} free, {} occupied, {} unknown",
                self.ray_casting.ray_count,
                viewpoint.row,
                viewpoint.col,
                visibility.count(CellState::Free),
                visibility.count(CellState::Occupied),
                visibility.count(CellState::Unknown)
            );
        }
    }
}

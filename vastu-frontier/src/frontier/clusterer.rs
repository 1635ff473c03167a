//! Frontier region extraction by flood fill.

use std::collections::VecDeque;

use crate::config::ClusterConfig;
use crate::core::Cell;
use crate::grid::{FrontierMask, GridBuffer};

use super::region::FrontierRegion;

/// Groups frontier cells into 8-connected regions.
#[derive(Clone, Debug, Default)]
pub struct FrontierClusterer {
    config: ClusterConfig,
}

impl FrontierClusterer {
    /// Create a clusterer.
    pub fn new(config: ClusterConfig) -> Self {
        Self { config }
    }

    /// Region filtering settings.
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Extract regions from `mask` in discovery order.
    ///
    /// Seeds are taken in row-major order and grown breadth-first. A cell is
    /// marked visited when it is queued, so each frontier cell belongs to
    /// exactly one region. Regions smaller than `min_region_size` are dropped
    /// after extraction.
    pub fn cluster(&self, mask: &FrontierMask) -> Vec<FrontierRegion> {
        let (rows, cols) = (mask.rows(), mask.cols());
        let mut visited = GridBuffer::new(rows, cols, false);
        let mut queue = VecDeque::new();
        let mut regions = Vec::new();
        let mut dropped = 0usize;

        for seed in mask.frontier_cells() {
            if visited.get(seed).copied().unwrap_or(true) {
                continue;
            }

            let mut cells = Vec::new();
            visited.set(seed, true);
            queue.push_back(seed);

            while let Some(current) = queue.pop_front() {
                cells.push(current);
                for neighbor in current.neighbors_8(rows, cols) {
                    if mask.is_frontier(neighbor) && !Self::visit(&mut visited, neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }

            if cells.len() >= self.config.min_region_size {
                regions.push(FrontierRegion::from_cells(cells));
            } else {
                dropped += 1;
            }
        }

        log::debug!(
            "Clustered {} frontier regions ({} below min size {})",
            regions.len(),
            dropped,
            self.config.min_region_size
        );
        regions
    }

    /// Mark `cell` visited, returning whether it already was.
    #[inline]
    fn visit(visited: &mut GridBuffer<bool>, cell: Cell) -> bool {
        match visited.get_mut(cell) {
            Some(flag) => std::mem::replace(flag, true),
            None => true,
        }
    }
}

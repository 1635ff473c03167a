//! Single entry point for frontier detection.

use crate::config::FinderConfig;
use crate::core::{Cell, MetricPoint};
use crate::error::Result;
use crate::grid::{FrontierMask, OccupancyGrid, VisibilityGrid};
use crate::raycast::RayCaster;

use super::classifier::FrontierClassifier;
use super::clusterer::FrontierClusterer;
use super::region::FrontierRegion;

/// Every intermediate product of one detection.
#[derive(Clone, Debug)]
pub struct FrontierDetection {
    /// What the simulated sensor observed
    pub visibility: VisibilityGrid,
    /// Free cells bordering unknown space
    pub mask: FrontierMask,
    /// Connected frontier regions in discovery order
    pub regions: Vec<FrontierRegion>,
}

impl FrontierDetection {
    /// Region centers in meters.
    pub fn centers(&self, cell_size: f64) -> Vec<MetricPoint> {
        self.regions
            .iter()
            .map(|region| region.metric_center(cell_size))
            .collect()
    }
}

/// Finds frontier centers visible from a viewpoint.
///
/// ```text
/// OccupancyGrid ──▶ RayCaster ──▶ FrontierClassifier ──▶ FrontierClusterer ──▶ centers
///                 (visibility)        (mask)                (regions)
/// ```
///
/// The finder holds only configuration. Every call allocates its own working
/// grids, so one finder can serve concurrent viewpoints.
///
/// # Example
///
/// ```
/// use vastu_frontier::{Cell, FinderConfig, FrontierFinder, GridBuffer, RayCastingConfig};
///
/// let config = FinderConfig {
///     ray_casting: RayCastingConfig::omnidirectional(360, 1.0).with_max_range(3.0),
///     ..Default::default()
/// };
/// let finder = FrontierFinder::new(config).unwrap();
/// let map = GridBuffer::new(20, 20, 255u8);
///
/// let centers = finder.find_frontiers(Cell::new(10, 10), &map).unwrap();
/// assert!(!centers.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct FrontierFinder {
    caster: RayCaster,
    clusterer: FrontierClusterer,
    workers: usize,
}

impl FrontierFinder {
    /// Create a finder, rejecting invalid configuration.
    pub fn new(config: FinderConfig) -> Result<Self> {
        let FinderConfig {
            frontier,
            ray_casting,
            clustering,
            workers,
        } = config;
        Ok(Self {
            caster: RayCaster::new(frontier, ray_casting)?,
            clusterer: FrontierClusterer::new(clustering),
            workers,
        })
    }

    /// Ray caster used for visibility.
    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    /// Metric centers of every frontier region visible from `viewpoint`.
    pub fn find_frontiers<G: OccupancyGrid + Sync + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
    ) -> Result<Vec<MetricPoint>> {
        let regions = self.find_regions(viewpoint, grid)?;
        let cell_size = self.caster.ray_casting_config().grid_cell_size;
        Ok(regions
            .iter()
            .map(|region| region.metric_center(cell_size))
            .collect())
    }

    /// Number of frontier regions visible from `viewpoint`.
    pub fn find_n_frontiers<G: OccupancyGrid + Sync + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
    ) -> Result<usize> {
        Ok(self.find_frontiers(viewpoint, grid)?.len())
    }

    /// Frontier regions visible from `viewpoint`.
    pub fn find_regions<G: OccupancyGrid + Sync + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
    ) -> Result<Vec<FrontierRegion>> {
        Ok(self.detect(viewpoint, grid)?.regions)
    }

    /// Run the full pipeline and keep every intermediate grid.
    pub fn detect<G: OccupancyGrid + Sync + ?Sized>(
        &self,
        viewpoint: Cell,
        grid: &G,
    ) -> Result<FrontierDetection> {
        let visibility = if self.workers > 1 {
            self.caster.cast_parallel(viewpoint, grid, self.workers)?
        } else {
            self.caster.cast(viewpoint, grid)?
        };
        let mask = FrontierClassifier::classify(&visibility);
        let regions = self.clusterer.cluster(&mask);

        log::debug!(
            "Viewpoint ({}, {}): {} frontier cells in {} regions",
            viewpoint.row,
            viewpoint.col,
            mask.count(),
            regions.len()
        );

        Ok(FrontierDetection {
            visibility,
            mask,
            regions,
        })
    }
}

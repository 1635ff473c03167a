//! # VastuFrontier
//!
//! Frontier detection on 2D occupancy grids for autonomous exploration.
//!
//! ## Overview
//!
//! Given an occupancy map and a viewpoint cell, VastuFrontier answers "where
//! would the robot learn something new from here?":
//!
//! 1. **Ray casting** simulates a range sensor at the viewpoint, producing a
//!    visibility grid of **Free**, **Occupied** and **Unknown** cells
//! 2. **Classification** marks Free cells touching Unknown space (8-neighbour)
//! 3. **Clustering** groups frontier cells into 8-connected regions
//! 4. Each region is reported by its centroid in meters
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_frontier::{Cell, FinderConfig, FrontierFinder, GridBuffer};
//!
//! // 8-bit map image: 0 = wall, 255 = open floor
//! let mut map = GridBuffer::new(40, 40, 255u8);
//! for row in 0..40 {
//!     map.set(Cell::new(row, 30), 0);
//! }
//!
//! let finder = FrontierFinder::new(FinderConfig::default()).unwrap();
//! let centers = finder.find_frontiers(Cell::new(20, 10), &map).unwrap();
//! println!("{} frontiers", centers.len());
//! ```
//!
//! ## Coordinate System
//!
//! - Cells are `(row, col)` indices into a row-major grid
//! - Metric positions use `x` along rows and `y` along columns, with cell
//!   `i` centred at `i * cell_size + cell_size / 2`
//! - Ray angle 0 points along +col, π/2 along +row

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid containers
pub mod grid;

// Configuration and YAML loading
pub mod config;

// Error types
pub mod error;

// Visibility simulation
pub mod raycast;

// Frontier classification, clustering and the finder
pub mod frontier;

// Re-export commonly used types
pub use core::{Cell, CellState, GridPoint, MetricPoint};

pub use grid::{FrontierMask, GridBuffer, OccupancyGrid, VisibilityGrid};

pub use config::{ClusterConfig, ConfigLoadError, FinderConfig, FrontierConfig, RayCastingConfig};

pub use error::{FrontierError, Result};

pub use raycast::{RayCaster, RayOutcome, RayTermination};

pub use frontier::{
    FrontierClassifier, FrontierClusterer, FrontierDetection, FrontierFinder, FrontierRegion,
};

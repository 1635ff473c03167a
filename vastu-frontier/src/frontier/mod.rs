//! Frontier detection.
//!
//! A frontier cell is a Free cell of the visibility grid with at least one
//! Unknown 8-neighbour: the edge of what the robot can currently see.
//!
//! ## Pipeline
//!
//! 1. [`RayCaster`](crate::raycast::RayCaster) simulates the sensor
//! 2. [`FrontierClassifier`] marks frontier cells
//! 3. [`FrontierClusterer`] groups them into [`FrontierRegion`]s
//! 4. [`FrontierFinder`] ties the stages together and reports region centers

mod classifier;
mod clusterer;
mod finder;
mod region;

pub use classifier::FrontierClassifier;
pub use clusterer::FrontierClusterer;
pub use finder::{FrontierDetection, FrontierFinder};
pub use region::FrontierRegion;

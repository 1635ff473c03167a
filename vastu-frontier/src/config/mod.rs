//! Configuration for the frontier pipeline.
//!
//! Everything is passed in by the caller; the library itself never reads
//! the environment. [`FinderConfig`] can also be loaded from a YAML file with
//! per-field defaults, so a config only needs the values it changes.
//!
//! | Section | Type | Description |
//! |---------|------|-------------|
//! | `frontier` | [`FrontierConfig`] | Opacity threshold, visibility markers |
//! | `ray_casting` | [`RayCastingConfig`] | Field of view, ray count, cell and step size, range |
//! | `clustering` | [`ClusterConfig`] | Minimum region size |
//! | `workers` | `usize` | Ray casting threads |

mod defaults;
mod error;
mod finder;
mod frontier;
mod ray_casting;

pub use error::ConfigLoadError;
pub use finder::{ClusterConfig, FinderConfig};
pub use frontier::FrontierConfig;
pub use ray_casting::RayCastingConfig;

//! Grid containers used by the frontier pipeline.
//!
//! ```text
//! ┌──────────────────┐  read-only  ┌──────────────┐  classify  ┌──────────────┐
//! │  OccupancyGrid   │ ──────────▶ │VisibilityGrid│ ─────────▶ │ FrontierMask │
//! │ (caller-owned)   │  ray cast   │ (per query)  │            │ (per query)  │
//! └──────────────────┘             └──────────────┘            └──────────────┘
//! ```
//!
//! ## Key Types
//!
//! - [`OccupancyGrid`]: Trait for any readable 2-D occupancy map
//! - [`GridBuffer`]: Row-major dense storage, implements [`OccupancyGrid`]
//!   for `f32` probability maps and `u8` map images alike
//! - [`VisibilityGrid`]: Free / Occupied / Unknown as seen from one viewpoint
//! - [`FrontierMask`]: Boolean grid of frontier cells

mod occupancy;
mod storage;
mod visibility;

pub use occupancy::OccupancyGrid;
pub use storage::GridBuffer;
pub use visibility::{FrontierMask, VisibilityGrid};

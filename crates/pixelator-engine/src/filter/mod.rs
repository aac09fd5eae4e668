//! Image filters.
//!
//! Every filter reads an immutable source matrix and returns a new matrix
//! of the same dimensions; the source is never written. Filters that need a
//! palette build a fresh one per call, so no state survives between calls.
//!
//! | name | filter |
//! |------|--------|
//! | `grid-weight` | [`GridWeight`] |
//! | `grid-space`, `grid-space2` | [`GridSpace`] |
//! | `grid-difference` | [`GridDifference`] |
//! | `linear-difference` .. `linear-difference4` | [`LinearDifference`] |
//! | `edge-detect` | [`EdgeDetect`] |
//! | `cluster` | [`ClusterQuantize`] |
//!
//! Neighbors outside the image do not exist: borders clip, never wrap.
//!
//! # Example
//!
//! ```
//! use pixelator_engine::{FilterKind, FilterSettings, Pixel, PixelMatrix};
//!
//! let image = PixelMatrix::new(8, 8, Pixel::opaque(128, 128, 128));
//! let filter = "grid-space".parse::<FilterKind>().unwrap()
//!     .build(&FilterSettings::default())
//!     .unwrap();
//! assert_eq!(filter.apply(&image), image);
//! ```

mod cluster;
mod edge;
mod grid;
mod grid_difference;
mod grid_space;
mod grid_weight;
mod kind;
mod linear_difference;
pub mod scan;

pub use cluster::ClusterQuantize;
pub use edge::EdgeDetect;
pub use grid::CELL_SIZE;
pub use grid_difference::GridDifference;
pub use grid_space::{CellSampling, GridSpace};
pub use grid_weight::{GridWeight, DEFAULT_CENTER_WEIGHT, DEFAULT_NEIGHBOR_WEIGHT};
pub use kind::{FilterKind, FilterSettings, UnknownFilter};
pub use linear_difference::{LinearDifference, LinearVariant, PaletteStrategy, UnknownStrategy};

use crate::matrix::PixelMatrix;

/// A transform from one pixel matrix to a new one.
pub trait Filter {
    /// Stable name used for selection and logging.
    fn name(&self) -> &'static str;

    /// Produce the filtered image. `source` is left untouched.
    fn apply(&self, source: &PixelMatrix) -> PixelMatrix;
}

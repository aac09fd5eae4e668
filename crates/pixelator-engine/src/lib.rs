#![allow(clippy::needless_range_loop, clippy::module_inception)]

//! pixelator-engine: color model and quantization filters
//!
//! Turns a pixel matrix into a stylized, color-reduced rendition. The crate
//! has no I/O: callers hand in a [`PixelMatrix`] and get a new one back.
//!
//! # Quick Start
//!
//! ```
//! use pixelator_engine::{Filter, LinearDifference, LinearVariant, Pixel, PixelMatrix};
//!
//! let red = Pixel::opaque(255, 0, 0);
//! let image = PixelMatrix::new(4, 4, red);
//! let out = LinearDifference::new(LinearVariant::NorthNeighbors).apply(&image);
//! assert_eq!(out, image);
//! ```
//!
//! # Components
//!
//! - [`color`]: packed ARGB [`Pixel`], Lab/XYZ/HSB conversions, CIE76,
//!   CIE94 and CIEDE2000 distances, and the five-level [`PerceptionLevel`]
//! - [`palette`]: [`LinearPalette`], [`GradientPalette`] and
//!   [`ClusterPalette`] behind the [`ColorPalette`] capability
//! - [`filter`]: the [`Filter`] implementations and [`FilterKind`] selection
//! - [`gradient`]: HSB interpolation between two colors
//! - [`preprocess`]: the triangle-filtered [`downsample`] used before clustering
//!
//! # Perceptual similarity
//!
//! Two colors are *similar* when their distance falls in levels 1-3 of the
//! perceptual scale, i.e. below 11. Linear and gradient palette lookups are
//! gated on similarity; cluster palette lookups are not, since that palette
//! exists to reduce the image to exactly `k` colors.
//!
//! | level | distance | meaning |
//! |-------|----------|---------|
//! | 1 | `[0, 1)` | imperceptible |
//! | 2 | `[1, 2)` | perceptible through close observation |
//! | 3 | `[2, 11)` | perceptible at a glance |
//! | 4 | `[11, 50)` | more similar than opposite |
//! | 5 | `[50, ∞)` | opposite |

pub mod color;
pub mod error;
pub mod filter;
pub mod gradient;
pub mod matrix;
pub mod palette;
pub mod preprocess;


pub use color::{DistanceFormula, Lab, ParseColorError, PerceptionLevel, Pixel, PixelAccumulator};
pub use error::EngineError;
pub use filter::{
    CellSampling, ClusterQuantize, EdgeDetect, Filter, FilterKind, FilterSettings, GridDifference,
    GridSpace, GridWeight, LinearDifference, LinearVariant, PaletteStrategy,
};
pub use gradient::{generate_gradient, Gradient};
pub use matrix::{MatrixError, PixelMatrix};
pub use palette::{
    AdaptivePalette, ClusterOptions, ClusterPalette, ColorPalette, GradientPalette, Hue,
    LinearPalette, PaletteError,
};
pub use preprocess::downsample;

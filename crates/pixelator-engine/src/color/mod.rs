//! Color model and perceptual color-distance engine.
//!
//! - [`Pixel`]: packed ARGB value with channel accessors and adjustments
//! - [`PixelAccumulator`]: floating-point weighted blending
//! - [`Lab`] / [`Xyz`] / [`Hsb`]: color spaces used by the distance formulas
//!   and the gradient generator
//! - [`DistanceFormula`]: CIE76, CIE94 and CIEDE2000
//! - [`PerceptionLevel`]: the five-level perceptual scale
//!
//! # Example
//!
//! ```
//! use pixelator_engine::{DistanceFormula, PerceptionLevel, Pixel};
//!
//! let red = Pixel::opaque(255, 0, 0);
//! let blue = Pixel::opaque(0, 0, 255);
//! let d = red.difference(blue, DistanceFormula::Cie76);
//! assert_eq!(PerceptionLevel::from_distance(d), PerceptionLevel::Opposite);
//! ```

mod distance;
mod hsb;
mod lab;
mod pixel;
mod scale;

pub use distance::{cie76, cie94, ciede2000, distance, DistanceFormula, UnknownFormula};
pub use hsb::{hsb_to_rgb, rgb_to_hsb, Hsb};
pub use lab::{rgb_to_lab, rgb_to_xyz, xyz_to_lab, Lab, Xyz, REF_X, REF_Y, REF_Z};
pub use pixel::{Channel, ParseColorError, Pixel, PixelAccumulator, OPAQUE};
pub use scale::{is_similar_distance, PerceptionLevel};

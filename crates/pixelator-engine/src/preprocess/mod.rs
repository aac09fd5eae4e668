//! Preprocessing applied before palette construction.
//!
//! Clustering cost grows with the number of pixels, so the k-means palette
//! works on a copy of the image shrunk with [`downsample`] until its longer
//! side fits a small bound (50 pixels by default). Shrinking goes through
//! the `image` crate's triangle filter.
//!
//! Saturation and contrast boosts are not here; they mutate a matrix in
//! place through [`PixelMatrix::increase_saturation`](crate::PixelMatrix::increase_saturation)
//! and [`PixelMatrix::increase_contrast`](crate::PixelMatrix::increase_contrast).

mod resize;

pub use resize::{downsample, target_dimensions};

//! Palette strategies deciding which representative color a region takes.
//!
//! Three interchangeable strategies share the [`ColorPalette`] capability:
//!
//! - [`LinearPalette`]: insertion-ordered list, similarity-gated lookup
//! - [`GradientPalette`]: colors bucketed by nearest pure hue, each bucket
//!   condensable into a 16-step ramp
//! - [`ClusterPalette`]: `k` centroids computed once by k-means; lookups are
//!   never gated, a nearest centroid always comes back
//!
//! The two palettes that grow while a filter scans also implement
//! [`AdaptivePalette`], so scan filters are generic over either.

mod cluster;
mod error;
mod gradient;
mod linear;

pub use cluster::{ClusterOptions, ClusterPalette};
pub use error::PaletteError;
pub use gradient::{GradientPalette, Hue};
pub use linear::LinearPalette;

use crate::color::{DistanceFormula, PerceptionLevel, Pixel};

/// Nearest-representative lookup shared by every palette.
pub trait ColorPalette {
    /// Closest stored color to `color`.
    ///
    /// Gated palettes return `None` when the closest color is not perceptually
    /// similar; ungated palettes return `None` only when they are empty.
    fn nearest(&self, color: Pixel) -> Option<Pixel>;

    /// Whether [`nearest`](Self::nearest) applies the similarity gate.
    fn similarity_gated(&self) -> bool;

    /// Number of stored colors.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A palette that grows as a filter discovers new colors.
pub trait AdaptivePalette: ColorPalette {
    /// Store `color` unconditionally (no merge with similar entries).
    fn add(&mut self, color: Pixel);

    /// Closest similar stored color, without recording the match.
    fn find_similar(&self, color: Pixel) -> Option<Pixel>;
}

/// Index and distance of the entry of `pool` closest to `candidate`.
///
/// Ties keep the first entry. Returns `None` only for an empty pool.
pub fn nearest_index(
    candidate: Pixel,
    pool: &[Pixel],
    formula: DistanceFormula,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &entry) in pool.iter().enumerate() {
        let d = candidate.difference(entry, formula);
        if best.map_or(true, |(_, min)| d < min) {
            best = Some((i, d));
        }
    }
    best
}

/// Closest entry of `pool` to `candidate`, if it is perceptually similar.
pub fn nearest_color(candidate: Pixel, pool: &[Pixel], formula: DistanceFormula) -> Option<Pixel> {
    nearest_index(candidate, pool, formula)
        .filter(|&(_, d)| PerceptionLevel::from_distance(d).is_similar())
        .map(|(i, _)| pool[i])
}

//! Insertion-ordered palette with similarity-gated lookup.

use super::{nearest_color, AdaptivePalette, ColorPalette};
use crate::color::{DistanceFormula, Pixel};

/// An unordered list of representative colors.
///
/// Entries are never merged: callers decide when to [`add`](Self::add).
/// [`exists`](Self::exists) performs the gated nearest search and remembers
/// the hit, which [`matched`](Self::matched) hands back afterwards.
///
/// # Example
///
/// ```
/// use pixelator_engine::{LinearPalette, Pixel};
///
/// let mut palette = LinearPalette::new();
/// let red = Pixel::opaque(255, 0, 0);
/// assert!(!palette.exists(red));
/// palette.add(red);
/// assert!(palette.exists(Pixel::opaque(252, 2, 0)));
/// assert_eq!(palette.matched(), Some(red));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearPalette {
    colors: Vec<Pixel>,
    matched: Option<Pixel>,
    formula: DistanceFormula,
}

impl LinearPalette {
    /// Empty palette using CIE76 distances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `formula` for every nearest search.
    pub fn with_formula(mut self, formula: DistanceFormula) -> Self {
        self.formula = formula;
        self
    }

    #[inline]
    pub fn formula(&self) -> DistanceFormula {
        self.formula
    }

    /// Append `color` unconditionally.
    pub fn add(&mut self, color: Pixel) {
        self.colors.push(color);
    }

    /// True when the nearest stored color is perceptually similar to `color`.
    ///
    /// On success the hit is recorded for [`matched`](Self::matched); on
    /// failure any earlier match is cleared. Ties keep the earliest entry.
    pub fn exists(&mut self, color: Pixel) -> bool {
        self.matched = self.find_similar(color);
        self.matched.is_some()
    }

    /// The color recorded by the last successful [`exists`](Self::exists).
    #[inline]
    pub fn matched(&self) -> Option<Pixel> {
        self.matched
    }

    /// Nearest similar color without recording it.
    pub fn find_similar(&self, color: Pixel) -> Option<Pixel> {
        nearest_color(color, &self.colors, self.formula)
    }

    /// Stored colors in insertion order.
    #[inline]
    pub fn colors(&self) -> &[Pixel] {
        &self.colors
    }
}

impl ColorPalette for LinearPalette {
    fn nearest(&self, color: Pixel) -> Option<Pixel> {
        self.find_similar(color)
    }

    fn similarity_gated(&self) -> bool {
        true
    }

    fn len(&self) -> usize {
        self.colors.len()
    }
}

impl AdaptivePalette for LinearPalette {
    fn add(&mut self, color: Pixel) {
        LinearPalette::add(self, color);
    }

    fn find_similar(&self, color: Pixel) -> Option<Pixel> {
        LinearPalette::find_similar(self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_has_no_match() {
        let mut palette = LinearPalette::new();
        assert!(!palette.exists(Pixel::WHITE));
        assert_eq!(palette.matched(), None);
        assert!(palette.is_empty());
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut palette = LinearPalette::new();
        palette.add(Pixel::WHITE);
        palette.add(Pixel::WHITE);
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_exists_picks_nearest_not_first_similar() {
        let mut palette = LinearPalette::new();
        let far = Pixel::opaque(120, 120, 120);
        let near = Pixel::opaque(128, 128, 128);
        palette.add(far);
        palette.add(near);
        assert!(palette.exists(Pixel::opaque(129, 129, 129)));
        assert_eq!(palette.matched(), Some(near));
    }

    #[test]
    fn test_failed_lookup_clears_match() {
        let mut palette = LinearPalette::new();
        palette.add(Pixel::BLACK);
        assert!(palette.exists(Pixel::opaque(2, 2, 2)));
        assert!(!palette.exists(Pixel::WHITE));
        assert_eq!(palette.matched(), None);
    }

    #[test]
    fn test_find_similar_does_not_record() {
        let mut palette = LinearPalette::new();
        palette.add(Pixel::BLACK);
        assert_eq!(palette.find_similar(Pixel::opaque(1, 1, 1)), Some(Pixel::BLACK));
        assert_eq!(palette.matched(), None);
    }

    #[test]
    fn test_trait_view_is_gated() {
        let mut palette = LinearPalette::new().with_formula(DistanceFormula::Ciede2000);
        palette.add(Pixel::BLACK);
        let view: &dyn ColorPalette = &palette;
        assert!(view.similarity_gated());
        assert_eq!(view.nearest(Pixel::WHITE), None);
        assert_eq!(view.nearest(Pixel::opaque(3, 3, 3)), Some(Pixel::BLACK));
    }
}

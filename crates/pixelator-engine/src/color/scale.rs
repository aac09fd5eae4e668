//! Perceptual scale: five ordered "just noticeable difference" levels.
//!
//! Bucket boundaries live in one table ([`PerceptionLevel::interval`]).
//! Classification uses the lower bound of the next level as the breakpoint,
//! so distances that fall in the gaps between intervals (e.g. `10.5`) stay
//! with the lower level.

use super::distance::DistanceFormula;
use super::pixel::Pixel;

/// Ordinal perceptibility of a color difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PerceptionLevel {
    /// Not perceptible by human eyes.
    Imperceptible = 1,
    /// Perceptible through close observation.
    CloseObservation = 2,
    /// Perceptible at a glance.
    Glance = 3,
    /// Colors are more similar than opposite.
    MoreSimilar = 4,
    /// Colors are exact opposites.
    Opposite = 5,
}

impl PerceptionLevel {
    /// All levels in ascending order.
    pub const ALL: [PerceptionLevel; 5] = [
        PerceptionLevel::Imperceptible,
        PerceptionLevel::CloseObservation,
        PerceptionLevel::Glance,
        PerceptionLevel::MoreSimilar,
        PerceptionLevel::Opposite,
    ];

    /// Closed distance interval `[low, high]` of this level.
    pub const fn interval(self) -> (f64, f64) {
        match self {
            PerceptionLevel::Imperceptible => (0.0, 0.99),
            PerceptionLevel::CloseObservation => (1.0, 1.99),
            PerceptionLevel::Glance => (2.0, 10.0),
            PerceptionLevel::MoreSimilar => (11.0, 49.0),
            PerceptionLevel::Opposite => (50.0, 100.0),
        }
    }

    /// Level number, 1 through 5.
    #[inline]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Bucket a raw distance into its level.
    pub fn from_distance(distance: f64) -> Self {
        for pair in Self::ALL.windows(2) {
            if distance < pair[1].interval().0 {
                return pair[0];
            }
        }
        PerceptionLevel::Opposite
    }

    /// Classify the CIE76 difference between two colors.
    pub fn between(a: Pixel, b: Pixel) -> Self {
        Self::from_distance(a.difference(b, DistanceFormula::Cie76))
    }

    /// True when every distance of this level lies below every distance of `other`.
    #[inline]
    pub fn less_than(self, other: PerceptionLevel) -> bool {
        self.interval().1 < other.interval().0
    }

    /// True when every distance of this level lies above every distance of `other`.
    #[inline]
    pub fn greater_than(self, other: PerceptionLevel) -> bool {
        self.interval().0 > other.interval().1
    }

    /// Similar means strictly below [`PerceptionLevel::MoreSimilar`] (levels 1-3).
    #[inline]
    pub fn is_similar(self) -> bool {
        self.less_than(PerceptionLevel::MoreSimilar)
    }
}

/// Shorthand for `PerceptionLevel::from_distance(d).is_similar()`.
#[inline]
pub fn is_similar_distance(distance: f64) -> bool {
    PerceptionLevel::from_distance(distance).is_similar()
}

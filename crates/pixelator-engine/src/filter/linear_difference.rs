//! Scan filters that carry one current color across the image.
//!
//! Four escalating variants share one decision procedure, run whenever the
//! source pixel is not similar to the current color:
//!
//! 1. [`LinearVariant::PaletteOnly`]: reuse a similar palette color or adopt
//!    the source pixel as a new entry.
//! 2. [`LinearVariant::NorthNeighbors`]: first test the three painted cells
//!    above (north-west, north, north-east) against the source; the first
//!    similar one wins. Otherwise fall through to the palette.
//! 3. [`LinearVariant::NearestNeighbor`]: take the nearest of those three
//!    cells and the current color, if it is similar; otherwise the palette.
//! 4. [`LinearVariant::Spiral`]: the third variant on a clockwise inward
//!    spiral, consulting the painted cells behind the cursor.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::scan::{ScanState, Traversal};
use super::Filter;
use crate::color::DistanceFormula;
use crate::matrix::PixelMatrix;
use crate::palette::{AdaptivePalette, GradientPalette, LinearPalette};

/// Decision procedure of a linear-difference scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinearVariant {
    #[default]
    PaletteOnly,
    NorthNeighbors,
    NearestNeighbor,
    Spiral,
}

impl LinearVariant {
    pub const ALL: [LinearVariant; 4] = [
        LinearVariant::PaletteOnly,
        LinearVariant::NorthNeighbors,
        LinearVariant::NearestNeighbor,
        LinearVariant::Spiral,
    ];

    /// Visiting order used by this variant.
    pub fn traversal(self) -> Traversal {
        match self {
            LinearVariant::Spiral => Traversal::Spiral,
            _ => Traversal::Raster,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LinearVariant::PaletteOnly => "linear-difference",
            LinearVariant::NorthNeighbors => "linear-difference2",
            LinearVariant::NearestNeighbor => "linear-difference3",
            LinearVariant::Spiral => "linear-difference4",
        }
    }
}

/// Palette a linear-difference scan grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteStrategy {
    #[default]
    Linear,
    Gradient,
}

impl PaletteStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            PaletteStrategy::Linear => "linear",
            PaletteStrategy::Gradient => "gradient",
        }
    }
}

impl fmt::Display for PaletteStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown palette strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown palette strategy '{0}' (expected linear or gradient)")]
pub struct UnknownStrategy(pub String);

impl FromStr for PaletteStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(PaletteStrategy::Linear),
            "gradient" => Ok(PaletteStrategy::Gradient),
            other => Err(UnknownStrategy(other.to_string())),
        }
    }
}

/// Linear-difference filter.
///
/// # Example
///
/// ```
/// use pixelator_engine::{Filter, LinearDifference, LinearVariant, Pixel, PixelMatrix};
///
/// let flat = PixelMatrix::new(5, 3, Pixel::opaque(10, 120, 200));
/// let out = LinearDifference::new(LinearVariant::Spiral).apply(&flat);
/// assert_eq!(out, flat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearDifference {
    pub variant: LinearVariant,
    pub palette: PaletteStrategy,
    pub formula: DistanceFormula,
}

impl LinearDifference {
    pub fn new(variant: LinearVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn palette(mut self, palette: PaletteStrategy) -> Self {
        self.palette = palette;
        self
    }

    pub fn formula(mut self, formula: DistanceFormula) -> Self {
        self.formula = formula;
        self
    }

    fn scan<P: AdaptivePalette>(&self, source: &PixelMatrix, palette: P) -> (PixelMatrix, usize) {
        let Some(seed) = source.get(0, 0) else {
            return (source.clone(), 0);
        };
        let mut state = ScanState::new(seed, palette, source.width(), source.height(), self.formula);
        for step in self.variant.traversal().steps(source.width(), source.height()) {
            state.advance(&step, source[(step.row, step.col)], self.variant);
        }
        let colors = state.palette().len();
        (state.into_matrix(seed), colors)
    }
}

impl Filter for LinearDifference {
    fn name(&self) -> &'static str {
        self.variant.name()
    }

    fn apply(&self, source: &PixelMatrix) -> PixelMatrix {
        let (out, colors) = match self.palette {
            PaletteStrategy::Linear => {
                self.scan(source, LinearPalette::new().with_formula(self.formula))
            }
            PaletteStrategy::Gradient => {
                self.scan(source, GradientPalette::new().with_formula(self.formula))
            }
        };
        tracing::debug!(
            variant = self.variant.name(),
            palette = %self.palette,
            colors,
            "linear difference done"
        );
        out
    }
}

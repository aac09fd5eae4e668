//! Hue-bucketed palette with condensable ramps.
//!
//! Every color is filed under the nearest of twelve pure hues spaced 30°
//! apart. Each bucket is an open-ended ramp; [`GradientPalette::condense`]
//! snaps every ramp onto a 16-step gradient between its lightest and darkest
//! member.

use std::fmt;

use super::{nearest_color, nearest_index, AdaptivePalette, ColorPalette};
use crate::color::{DistanceFormula, Pixel};
use crate::gradient::{generate_gradient, RAMP_CONDENSE_STEPS};

/// The twelve pure hues of the color wheel, in wheel order from red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Orange,
    Yellow,
    ChartreuseGreen,
    Green,
    SpringGreen,
    Cyan,
    Azure,
    Blue,
    Violet,
    Magenta,
    Rose,
}

impl Hue {
    pub const ALL: [Hue; 12] = [
        Hue::Red,
        Hue::Orange,
        Hue::Yellow,
        Hue::ChartreuseGreen,
        Hue::Green,
        Hue::SpringGreen,
        Hue::Cyan,
        Hue::Azure,
        Hue::Blue,
        Hue::Violet,
        Hue::Magenta,
        Hue::Rose,
    ];

    /// The hue as `0xRRGGBB`.
    pub const fn rgb(self) -> u32 {
        match self {
            Hue::Red => 0xFF0000,
            Hue::Orange => 0xFF7F00,
            Hue::Yellow => 0xFFFF00,
            Hue::ChartreuseGreen => 0x7FFF00,
            Hue::Green => 0x00FF00,
            Hue::SpringGreen => 0x00FF7F,
            Hue::Cyan => 0x00FFFF,
            Hue::Azure => 0x007FFF,
            Hue::Blue => 0x0000FF,
            Hue::Violet => 0x7F00FF,
            Hue::Magenta => 0xFF00FF,
            Hue::Rose => 0xFF007F,
        }
    }

    #[inline]
    pub const fn pixel(self) -> Pixel {
        Pixel::from_rgb(self.rgb())
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    /// Nearest pure hue to `color`. Always answers; there is no gate.
    pub fn nearest(color: Pixel, formula: DistanceFormula) -> Hue {
        let hues = Hue::ALL.map(Hue::pixel);
        nearest_index(color, &hues, formula).map_or(Hue::Red, |(i, _)| Hue::ALL[i])
    }

    pub fn name(self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Orange => "orange",
            Hue::Yellow => "yellow",
            Hue::ChartreuseGreen => "chartreuse-green",
            Hue::Green => "green",
            Hue::SpringGreen => "spring-green",
            Hue::Cyan => "cyan",
            Hue::Azure => "azure",
            Hue::Blue => "blue",
            Hue::Violet => "violet",
            Hue::Magenta => "magenta",
            Hue::Rose => "rose",
        }
    }
}

impl fmt::Display for Hue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Palette of twelve hue ramps.
///
/// # Example
///
/// ```
/// use pixelator_engine::{GradientPalette, Hue, Pixel};
///
/// let mut palette = GradientPalette::new();
/// palette.add(Pixel::opaque(200, 20, 10));
/// assert_eq!(palette.ramp(Hue::Red), &[Pixel::opaque(200, 20, 10)]);
/// assert_eq!(palette.total_colors(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GradientPalette {
    ramps: [Vec<Pixel>; 12],
    matched: Option<Pixel>,
    formula: DistanceFormula,
}

impl GradientPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `formula` for hue bucketing and ramp lookups.
    pub fn with_formula(mut self, formula: DistanceFormula) -> Self {
        self.formula = formula;
        self
    }

    /// File `color` under its nearest hue.
    pub fn add(&mut self, color: Pixel) {
        let hue = Hue::nearest(color, self.formula);
        self.ramps[hue.index()].push(color);
    }

    /// Gated lookup scoped to the bucket of the nearest hue; records the hit
    /// for [`matched`](Self::matched) and clears it on a miss.
    pub fn exists(&mut self, color: Pixel) -> bool {
        self.matched = self.find_similar(color);
        self.matched.is_some()
    }

    #[inline]
    pub fn matched(&self) -> Option<Pixel> {
        self.matched
    }

    /// Nearest similar color in the bucket of the nearest hue, not recorded.
    pub fn find_similar(&self, color: Pixel) -> Option<Pixel> {
        let hue = Hue::nearest(color, self.formula);
        nearest_color(color, &self.ramps[hue.index()], self.formula)
    }

    /// Colors filed under `hue`, in insertion order.
    #[inline]
    pub fn ramp(&self, hue: Hue) -> &[Pixel] {
        &self.ramps[hue.index()]
    }

    /// Number of colors across all ramps.
    pub fn total_colors(&self) -> usize {
        self.ramps.iter().map(Vec::len).sum()
    }

    /// Snap every color of every non-empty ramp to the nearest step of a
    /// 16-step gradient from the ramp's lightest to its darkest member.
    pub fn condense(&mut self) {
        let formula = self.formula;
        for (hue, ramp) in Hue::ALL.iter().zip(self.ramps.iter_mut()) {
            let (Some(lightest), Some(darkest)) = (lightest(ramp), darkest(ramp)) else {
                continue;
            };
            let steps = generate_gradient(lightest, darkest, RAMP_CONDENSE_STEPS);
            for color in ramp.iter_mut() {
                if let Some((i, _)) = nearest_index(*color, &steps, formula) {
                    *color = steps[i];
                }
            }
            tracing::debug!(%hue, colors = ramp.len(), "condensed ramp");
        }
    }
}

/// Highest-luminance member, first one on ties.
fn lightest(ramp: &[Pixel]) -> Option<Pixel> {
    ramp.iter().copied().reduce(|best, p| {
        if p.luminance() > best.luminance() {
            p
        } else {
            best
        }
    })
}

/// Lowest-luminance member, first one on ties.
fn darkest(ramp: &[Pixel]) -> Option<Pixel> {
    ramp.iter().copied().reduce(|best, p| {
        if p.luminance() < best.luminance() {
            p
        } else {
            best
        }
    })
}

impl ColorPalette for GradientPalette {
    fn nearest(&self, color: Pixel) -> Option<Pixel> {
        self.find_similar(color)
    }

    fn similarity_gated(&self) -> bool {
        true
    }

    fn len(&self) -> usize {
        self.total_colors()
    }
}

impl AdaptivePalette for GradientPalette {
    fn add(&mut self, color: Pixel) {
        GradientPalette::add(self, color);
    }

    fn find_similar(&self, color: Pixel) -> Option<Pixel> {
        GradientPalette::find_similar(self, color)
    }
}

//! Packed ARGB pixel and its blending accumulator.
//!
//! A [`Pixel`] is a 32-bit ARGB value (alpha in bits 24-31, red 16-23,
//! green 8-15, blue 0-7). Weighted blending never happens on the packed
//! value directly: callers accumulate into a [`PixelAccumulator`] and
//! repack once all weights have been applied.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::distance::{distance, DistanceFormula};
use super::hsb::{hsb_to_rgb, rgb_to_hsb};
use super::scale::PerceptionLevel;

/// Fully opaque alpha channel value.
pub const OPAQUE: u8 = 0xFF;

/// Slack added before truncation so that weight sums like
/// `0.1 + 24 * 0.0375` that land a hair under an integer still repack to it.
const REPACK_EPSILON: f64 = 1e-6;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length (expected 3, 6 or 8 characters)")]
    InvalidLength,
    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] std::num::ParseIntError),
    /// Input contains non-ASCII characters
    #[error("hex color must be ASCII")]
    NotAscii,
}

/// One of the four channels of a [`Pixel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    fn shift(self) -> u32 {
        match self {
            Channel::Alpha => 24,
            Channel::Red => 16,
            Channel::Green => 8,
            Channel::Blue => 0,
        }
    }
}

/// A packed ARGB color.
///
/// # Example
///
/// ```
/// use pixelator_engine::Pixel;
///
/// let red = Pixel::opaque(255, 0, 0);
/// assert_eq!(red.argb(), 0xFFFF_0000);
/// assert_eq!(red.red(), 255);
/// assert_eq!(red.alpha(), 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel(u32);

impl Pixel {
    /// Opaque black, used as the edge marker by edge detection.
    pub const BLACK: Pixel = Pixel(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Pixel = Pixel(0xFFFF_FFFF);

    /// Pack four channels into a pixel.
    #[inline]
    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Pack an opaque pixel.
    #[inline]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(OPAQUE, red, green, blue)
    }

    /// Wrap an already packed ARGB value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Build an opaque pixel from an RGB value without alpha (`0xRRGGBB`).
    #[inline]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }

    /// Build an opaque pixel from floating-point RGB coordinates.
    ///
    /// Each coordinate is truncated toward zero and clamped into `[0,255]`.
    /// Used to turn k-means centroids back into colors.
    pub fn from_rgb_f64(rgb: [f64; 3]) -> Self {
        let [r, g, b] = rgb.map(|c| c.trunc().clamp(0.0, 255.0) as u8);
        Self::opaque(r, g, b)
    }

    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// RGB part of the pixel with the alpha bits cleared.
    #[inline]
    pub const fn rgb(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> u8 {
        (self.0 >> channel.shift()) as u8
    }

    /// Overwrite a single channel in place.
    pub fn set_channel(&mut self, channel: Channel, value: u8) {
        let shift = channel.shift();
        self.0 = (self.0 & !(0xFF << shift)) | ((value as u32) << shift);
    }

    /// RGB components as floating-point coordinates, the input format of the
    /// color-distance engine.
    #[inline]
    pub fn rgb_f64(self) -> [f64; 3] {
        [self.red() as f64, self.green() as f64, self.blue() as f64]
    }

    /// Relative luminance `0.299R + 0.587G + 0.114B`.
    #[inline]
    pub fn luminance(self) -> f64 {
        0.299 * self.red() as f64 + 0.587 * self.green() as f64 + 0.114 * self.blue() as f64
    }

    /// Scale the HSB saturation by `factor`, clamping it into `[0,1]`.
    ///
    /// Alpha is left untouched.
    pub fn increase_saturation(&mut self, factor: f32) {
        let mut hsb = rgb_to_hsb(self.red(), self.green(), self.blue());
        hsb.saturation = (hsb.saturation * factor).clamp(0.0, 1.0);
        let (r, g, b) = hsb_to_rgb(hsb);
        *self = Self::new(self.alpha(), r, g, b);
    }

    /// Apply the photographic contrast curve.
    ///
    /// `amount` is clamped into `[-128, 128]`; `0` leaves the pixel unchanged.
    pub fn increase_contrast(&mut self, amount: i32) {
        let amount = amount.clamp(-128, 128) as f64;
        let factor = (259.0 * (amount + 255.0)) / (255.0 * (259.0 - amount));
        let adjust = |c: u8| (factor * (c as f64 - 128.0) + 128.0).clamp(0.0, 255.0) as u8;
        *self = Self::new(
            self.alpha(),
            adjust(self.red()),
            adjust(self.green()),
            adjust(self.blue()),
        );
    }

    /// Perceptual distance to another pixel (RGB only, alpha ignored).
    #[inline]
    pub fn difference(self, other: Pixel, formula: DistanceFormula) -> f64 {
        distance(self.rgb_f64(), other.rgb_f64(), formula)
    }

    /// CIE76 distance bucketed into the perceptual scale.
    #[inline]
    pub fn difference_scale(self, other: Pixel) -> PerceptionLevel {
        PerceptionLevel::between(self, other)
    }

    /// Average of a set of pixels: a zero accumulator blended with weight
    /// `1/n` against every element, then repacked.
    ///
    /// Returns `None` for an empty slice.
    pub fn average(pixels: &[Pixel]) -> Option<Pixel> {
        if pixels.is_empty() {
            return None;
        }
        let weight = 1.0 / pixels.len() as f64;
        let mut acc = PixelAccumulator::zero();
        for &p in pixels {
            acc.add(p, weight);
        }
        Some(acc.repack())
    }

    /// Hex representation `#RRGGBB` (alpha omitted).
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl From<u32> for Pixel {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.0
    }
}

impl FromStr for Pixel {
    type Err = ParseColorError;

    /// Parse a hex color.
    ///
    /// Supports `#RGB`, `#RRGGBB` (opaque) and `#AARRGGBB`, with or without
    /// the leading `#`. Parsing is case-insensitive; surrounding whitespace
    /// is trimmed.
    ///
    /// ```
    /// use pixelator_engine::Pixel;
    ///
    /// let red: Pixel = "#F00".parse().unwrap();
    /// assert_eq!(red, Pixel::opaque(255, 0, 0));
    /// let translucent: Pixel = "80ff0000".parse().unwrap();
    /// assert_eq!(translucent.alpha(), 0x80);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::NotAscii);
        }
        let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&s[range], 16);

        match s.len() {
            3 => {
                // Shorthand: each digit expands to two (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 => Ok(Self::opaque(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
            8 => Ok(Self::new(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Floating-point accumulator for weighted blending.
///
/// Channels grow unclamped while weights are added; [`repack`](Self::repack)
/// truncates each channel into `[0,255]` and produces the packed pixel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelAccumulator {
    alpha: f64,
    red: f64,
    green: f64,
    blue: f64,
}

impl PixelAccumulator {
    /// The zero pixel used as the starting point of a blend.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Accumulate `channel += pixel.channel * weight` for all four channels.
    #[inline]
    pub fn add(&mut self, pixel: Pixel, weight: f64) {
        self.alpha += pixel.alpha() as f64 * weight;
        self.red += pixel.red() as f64 * weight;
        self.green += pixel.green() as f64 * weight;
        self.blue += pixel.blue() as f64 * weight;
    }

    /// Multiply every channel by `factor`.
    #[inline]
    pub fn scale(&mut self, factor: f64) {
        self.alpha *= factor;
        self.red *= factor;
        self.green *= factor;
        self.blue *= factor;
    }

    /// Truncate each channel into `[0,255]` and pack.
    pub fn repack(&self) -> Pixel {
        let channel = |v: f64| (v + REPACK_EPSILON).trunc().clamp(0.0, 255.0) as u8;
        Pixel::new(
            channel(self.alpha),
            channel(self.red),
            channel(self.green),
            channel(self.blue),
        )
    }
}

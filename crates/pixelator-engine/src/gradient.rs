//! HSB linear-interpolation gradients.
//!
//! Both endpoints are converted to HSB and each of hue, saturation and
//! brightness is interpolated independently, then clamped to `[0,1]` and
//! converted back. Hue is interpolated linearly (no shortest-arc wrap), so a
//! red → blue gradient runs through yellow, green and cyan.

use crate::color::{hsb_to_rgb, rgb_to_hsb, Hsb, Pixel};

/// Number of steps generated by [`Gradient::default_colors`].
pub const DEFAULT_STEPS: usize = 8;
/// Number of steps of a pixel-to-pixel gradient ([`pixel_gradient`]).
pub const PIXEL_GRADIENT_STEPS: usize = 4;
/// Number of steps a gradient-palette ramp is condensed to.
pub const RAMP_CONDENSE_STEPS: usize = 16;

/// Start/end color pair of a gradient.
///
/// # Example
///
/// ```
/// use pixelator_engine::{Gradient, Pixel};
///
/// let gradient = Gradient::new(Pixel::opaque(255, 0, 0), Pixel::opaque(0, 0, 255));
/// let colors = gradient.colors(5);
/// assert_eq!(colors.len(), 5);
/// assert_eq!(colors[0], Pixel::opaque(255, 0, 0));
/// assert_eq!(colors[4], Pixel::opaque(0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    start: Pixel,
    end: Pixel,
}

impl Default for Gradient {
    /// Red to blue.
    fn default() -> Self {
        Self::new(Pixel::from_rgb(0xFF0000), Pixel::from_rgb(0x0000FF))
    }
}

impl Gradient {
    #[inline]
    pub fn new(start: Pixel, end: Pixel) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Pixel {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Pixel {
        self.end
    }

    pub fn set_start(&mut self, start: Pixel) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: Pixel) {
        self.end = end;
    }

    /// The gradient with [`DEFAULT_STEPS`] steps.
    pub fn default_colors(&self) -> Vec<Pixel> {
        self.colors(DEFAULT_STEPS)
    }

    /// Generate `steps` opaque colors from start to end.
    ///
    /// `steps == 0` yields nothing, `steps == 1` yields only the start color.
    pub fn colors(&self, steps: usize) -> Vec<Pixel> {
        generate_gradient(self.start, self.end, steps)
    }
}

#[inline]
fn interpolate(start: f32, end: f32, position: f32) -> f32 {
    (end * position + start * (1.0 - position)).clamp(0.0, 1.0)
}

/// Interpolate `steps` colors between `start` and `end` in HSB space.
pub fn generate_gradient(start: Pixel, end: Pixel, steps: usize) -> Vec<Pixel> {
    let from = rgb_to_hsb(start.red(), start.green(), start.blue());
    let to = rgb_to_hsb(end.red(), end.green(), end.blue());
    let last = steps.saturating_sub(1).max(1) as f32;

    (0..steps)
        .map(|step| {
            let p = step as f32 / last;
            let hsb = Hsb::new(
                interpolate(from.hue, to.hue, p),
                interpolate(from.saturation, to.saturation, p),
                interpolate(from.brightness, to.brightness, p),
            );
            let (r, g, b) = hsb_to_rgb(hsb);
            Pixel::opaque(r, g, b)
        })
        .collect()
}

/// Four-step gradient between two pixels.
pub fn pixel_gradient(start: Pixel, end: Pixel) -> Vec<Pixel> {
    generate_gradient(start, end, PIXEL_GRADIENT_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_one(a: Pixel, b: Pixel) -> bool {
        [
            (a.red(), b.red()),
            (a.green(), b.green()),
            (a.blue(), b.blue()),
        ]
        .iter()
        .all(|&(x, y)| (x as i32 - y as i32).abs() <= 1)
    }

    #[test]
    fn test_endpoints_reproduced() {
        let pairs = [
            (Pixel::opaque(255, 0, 0), Pixel::opaque(0, 0, 255)),
            (Pixel::opaque(12, 200, 77), Pixel::opaque(250, 240, 10)),
            (Pixel::opaque(0, 0, 0), Pixel::opaque(255, 255, 255)),
            (Pixel::opaque(90, 30, 200), Pixel::opaque(90, 30, 200)),
        ];
        for (start, end) in pairs {
            for steps in [2, 4, 8, 16] {
                let colors = generate_gradient(start, end, steps);
                assert_eq!(colors.len(), steps);
                assert!(within_one(colors[0], start), "{:?} vs {:?}", colors[0], start);
                assert!(
                    within_one(colors[steps - 1], end),
                    "{:?} vs {:?}",
                    colors[steps - 1],
                    end
                );
            }
        }
    }

    #[test]
    fn test_degenerate_step_counts() {
        let start = Pixel::opaque(1, 2, 3);
        let end = Pixel::opaque(200, 100, 50);
        assert!(generate_gradient(start, end, 0).is_empty());
        let single = generate_gradient(start, end, 1);
        assert_eq!(single.len(), 1);
        assert!(within_one(single[0], start));
    }

    #[test]
    fn test_black_to_white_brightness_is_monotonic() {
        let colors = generate_gradient(Pixel::BLACK, Pixel::WHITE, 16);
        for pair in colors.windows(2) {
            assert!(pair[0].red() <= pair[1].red());
            assert_eq!(pair[1].red(), pair[1].green());
        }
    }

    #[test]
    fn test_default_gradient() {
        let gradient = Gradient::default();
        assert_eq!(gradient.start(), Pixel::opaque(255, 0, 0));
        assert_eq!(gradient.end(), Pixel::opaque(0, 0, 255));
        assert_eq!(gradient.default_colors().len(), DEFAULT_STEPS);
        assert_eq!(pixel_gradient(gradient.start(), gradient.end()).len(), 4);
    }

    #[test]
    fn test_setters() {
        let mut gradient = Gradient::default();
        gradient.set_start(Pixel::WHITE);
        gradient.set_end(Pixel::BLACK);
        let colors = gradient.colors(3);
        assert_eq!(colors[0], Pixel::WHITE);
        assert_eq!(colors[2], Pixel::BLACK);
    }
}

//! Weighted 5x5 neighborhood blur.

use super::Filter;
use crate::color::PixelAccumulator;
use crate::matrix::PixelMatrix;

/// Default weight of the center pixel.
pub const DEFAULT_CENTER_WEIGHT: f64 = 0.1;
/// Default weight of each of the 24 neighbors.
pub const DEFAULT_NEIGHBOR_WEIGHT: f64 = 0.0375;

const RADIUS: isize = 2;

/// Blend every pixel with its 5x5 neighborhood.
///
/// Neighbors outside the image are skipped. Whatever weight is missing
/// from a full 1.0 goes to the center pixel, and an overweight kernel is
/// scaled down, so the applied weights always sum to one.
///
/// # Example
///
/// ```
/// use pixelator_engine::{Filter, GridWeight, Pixel, PixelMatrix};
///
/// let flat = PixelMatrix::new(6, 6, Pixel::opaque(90, 60, 30));
/// assert_eq!(GridWeight::new().apply(&flat), flat);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridWeight {
    pub center_weight: f64,
    pub neighbor_weight: f64,
}

impl Default for GridWeight {
    fn default() -> Self {
        Self {
            center_weight: DEFAULT_CENTER_WEIGHT,
            neighbor_weight: DEFAULT_NEIGHBOR_WEIGHT,
        }
    }
}

impl GridWeight {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn center_weight(mut self, weight: f64) -> Self {
        self.center_weight = weight;
        self
    }

    #[inline]
    pub fn neighbor_weight(mut self, weight: f64) -> Self {
        self.neighbor_weight = weight;
        self
    }

    /// Weights in effect: a non-positive (or non-finite) weight falls back
    /// to its default.
    fn effective(&self) -> (f64, f64) {
        let pick = |w: f64, default: f64| if w.is_finite() && w > 0.0 { w } else { default };
        (
            pick(self.center_weight, DEFAULT_CENTER_WEIGHT),
            pick(self.neighbor_weight, DEFAULT_NEIGHBOR_WEIGHT),
        )
    }

    /// The clipped kernel applied at `(row, col)` as `(row, col, weight)`
    /// triples. The weights sum to one.
    pub fn kernel(&self, row: usize, col: usize, width: usize, height: usize) -> Vec<(usize, usize, f64)> {
        let (center, neighbor) = self.effective();
        let mut cells = Vec::with_capacity(25);
        let mut total = 0.0;

        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                    continue;
                };
                if r >= height || c >= width {
                    continue;
                }
                let w = if dr == 0 && dc == 0 { center } else { neighbor };
                total += w;
                cells.push((r, c, w));
            }
        }

        if total < 1.0 {
            let shortfall = 1.0 - total;
            if let Some(cell) = cells.iter_mut().find(|(r, c, _)| *r == row && *c == col) {
                cell.2 += shortfall;
            }
        } else if total > 1.0 {
            for cell in &mut cells {
                cell.2 /= total;
            }
        }
        cells
    }
}

impl Filter for GridWeight {
    fn name(&self) -> &'static str {
        "grid-weight"
    }

    fn apply(&self, source: &PixelMatrix) -> PixelMatrix {
        let (width, height) = (source.width(), source.height());
        let mut out = source.clone();
        for row in 0..height {
            for col in 0..width {
                let mut acc = PixelAccumulator::zero();
                for (r, c, w) in self.kernel(row, col, width, height) {
                    acc.add(source[(r, c)], w);
                }
                out.set(row, col, acc.repack());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    fn weight_sum(kernel: &[(usize, usize, f64)]) -> f64 {
        kernel.iter().map(|k| k.2).sum()
    }

    #[test]
    fn test_kernel_sums_to_one_everywhere() {
        let gw = GridWeight::new();
        for row in 0..7 {
            for col in 0..6 {
                let k = gw.kernel(row, col, 6, 7);
                assert!((weight_sum(&k) - 1.0).abs() < 1e-12, "({row},{col})");
            }
        }
    }

    #[test]
    fn test_corner_kernel_folds_shortfall_into_center() {
        let k = GridWeight::new().kernel(0, 0, 10, 10);
        assert_eq!(k.len(), 9);
        let center = k.iter().find(|c| c.0 == 0 && c.1 == 0).unwrap().2;
        assert!((center - (1.0 - 8.0 * DEFAULT_NEIGHBOR_WEIGHT)).abs() < 1e-12);
    }

    #[test]
    fn test_overweight_kernel_is_normalized() {
        let gw = GridWeight::new().center_weight(0.5).neighbor_weight(0.5);
        let k = gw.kernel(2, 2, 5, 5);
        assert!((weight_sum(&k) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_weights_use_defaults() {
        let gw = GridWeight::new().center_weight(0.0).neighbor_weight(-1.0);
        assert_eq!(gw.kernel(2, 2, 5, 5), GridWeight::new().kernel(2, 2, 5, 5));
    }

    #[test]
    fn test_single_pixel_is_unchanged() {
        let m = PixelMatrix::new(1, 1, Pixel::opaque(3, 141, 59));
        assert_eq!(GridWeight::new().apply(&m), m);
    }

    #[test]
    fn test_blur_spreads_a_dot() {
        let mut m = PixelMatrix::new(5, 5, Pixel::BLACK);
        m.set(2, 2, Pixel::WHITE);
        let out = GridWeight::new().apply(&m);
        // 0.1 * 255 at the center, 0.0375 * 255 next to it
        assert_eq!(out[(2, 2)].red(), 25);
        assert_eq!(out[(2, 3)].red(), 9);
        assert_eq!(out[(2, 2)].alpha(), 255);
    }
}

//! Cell averages with palette-backed color reuse.

use super::grid::{cell_origins, inner_core, paint_cell};
use super::Filter;
use crate::color::{DistanceFormula, PerceptionLevel, Pixel};
use crate::matrix::PixelMatrix;
use crate::palette::LinearPalette;

/// Paint each 4x4 cell with its core average, unless that average is close
/// to the color already in use.
///
/// Cells are visited row by row carrying a current color. When a cell's
/// average is not similar to it, a similar color already seen is reused if
/// there is one; otherwise the average becomes a new palette entry and the
/// new current color. Adjacent blocks of nearly equal color therefore share
/// one color instead of flickering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridDifference {
    pub formula: DistanceFormula,
}

impl GridDifference {
    pub fn new(formula: DistanceFormula) -> Self {
        Self { formula }
    }
}

impl Filter for GridDifference {
    fn name(&self) -> &'static str {
        "grid-difference"
    }

    fn apply(&self, source: &PixelMatrix) -> PixelMatrix {
        let mut out = source.clone();
        let mut palette = LinearPalette::new().with_formula(self.formula);
        let mut current: Option<Pixel> = None;

        for (row, col) in cell_origins(source.width(), source.height()) {
            let core = inner_core(source, row, col);
            let average = Pixel::average(&core).unwrap_or(source[(row, col)]);

            let color = match current {
                None => {
                    palette.add(average);
                    average
                }
                Some(color) if PerceptionLevel::from_distance(color.difference(average, self.formula)).is_similar() => {
                    color
                }
                Some(_) => {
                    if palette.exists(average) {
                        palette.matched().unwrap_or(average)
                    } else {
                        palette.add(average);
                        average
                    }
                }
            };
            current = Some(color);
            paint_cell(&mut out, row, col, color);
        }

        tracing::debug!(palette = palette.colors().len(), "grid difference done");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_near_colors_share_one_block_color() {
        let a = Pixel::opaque(100, 100, 100);
        let b = Pixel::opaque(101, 101, 101);
        let rows = (0..4)
            .map(|_| (0..8).map(|c| if c < 4 { a } else { b }).collect())
            .collect();
        let out = GridDifference::default().apply(&PixelMatrix::from_rows(rows).unwrap());
        assert!(out.pixels().iter().all(|&p| p == a));
    }

    #[test]
    fn test_returning_color_is_reused_from_palette() {
        let red = Pixel::opaque(200, 0, 0);
        let near_red = Pixel::opaque(202, 0, 0);
        let blue = Pixel::opaque(0, 0, 200);
        let rows = (0..4)
            .map(|_| {
                (0..12)
                    .map(|c| match c / 4 {
                        0 => red,
                        1 => blue,
                        _ => near_red,
                    })
                    .collect()
            })
            .collect();
        let out = GridDifference::default().apply(&PixelMatrix::from_rows(rows).unwrap());
        assert_eq!(out[(0, 0)], red);
        assert_eq!(out[(0, 4)], blue);
        assert_eq!(out[(0, 8)], red, "near-red cell should reuse red");
    }

    #[test]
    fn test_core_average_is_used() {
        let mut m = PixelMatrix::new(4, 4, Pixel::BLACK);
        m.set(1, 1, Pixel::opaque(200, 200, 200));
        m.set(1, 2, Pixel::opaque(200, 200, 200));
        let out = GridDifference::default().apply(&m);
        assert!(out.pixels().iter().all(|&p| p == Pixel::opaque(100, 100, 100)));
    }
}

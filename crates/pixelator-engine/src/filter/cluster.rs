//! Quantize an image onto its own k-means palette.

use super::Filter;
use crate::matrix::PixelMatrix;
use crate::palette::{ClusterOptions, ClusterPalette, PaletteError};

/// Replace every pixel by the nearest centroid of a [`ClusterPalette`] built
/// from the image itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterQuantize {
    options: ClusterOptions,
}

impl ClusterQuantize {
    /// # Errors
    ///
    /// [`PaletteError::ZeroClusters`] when `options.size` is zero.
    pub fn new(options: ClusterOptions) -> Result<Self, PaletteError> {
        if options.size == 0 {
            return Err(PaletteError::ZeroClusters);
        }
        Ok(Self { options })
    }

    #[inline]
    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }
}

impl Filter for ClusterQuantize {
    fn name(&self) -> &'static str {
        "cluster"
    }

    fn apply(&self, source: &PixelMatrix) -> PixelMatrix {
        let palette = match ClusterPalette::new(source, &self.options) {
            Ok(palette) => palette,
            Err(err) => {
                tracing::debug!(%err, "nothing to quantize");
                return source.clone();
            }
        };

        let mut out = source.clone();
        for row in 0..source.height() {
            for col in 0..source.width() {
                out.set(row, col, palette.nearest_color(source[(row, col)]));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    #[test]
    fn test_zero_size_rejected() {
        assert_eq!(
            ClusterQuantize::new(ClusterOptions::new().size(0)),
            Err(PaletteError::ZeroClusters)
        );
    }

    #[test]
    fn test_single_cluster_flattens_image() {
        let rows = (0..6)
            .map(|r| (0..6).map(|c| Pixel::opaque(100 + r as u8, 50 + c as u8, 80)).collect())
            .collect();
        let m = PixelMatrix::from_rows(rows).unwrap();
        let out = ClusterQuantize::new(ClusterOptions::new().size(1)).unwrap().apply(&m);
        let first = out[(0, 0)];
        assert!(out.pixels().iter().all(|&p| p == first));
    }

    #[test]
    fn test_output_uses_at_most_k_colors() {
        let rows = (0..12)
            .map(|r| (0..12).map(|c| Pixel::opaque((r * 20) as u8, (c * 20) as u8, 128)).collect())
            .collect();
        let m = PixelMatrix::from_rows(rows).unwrap();
        let out = ClusterQuantize::new(ClusterOptions::new().size(3)).unwrap().apply(&m);
        let mut colors = out.to_argb();
        colors.sort_unstable();
        colors.dedup();
        assert!(colors.len() <= 3);
    }

    #[test]
    fn test_empty_image_passes_through() {
        let m = PixelMatrix::new(0, 0, Pixel::WHITE);
        let out = ClusterQuantize::new(ClusterOptions::new()).unwrap().apply(&m);
        assert!(out.is_empty());
    }
}

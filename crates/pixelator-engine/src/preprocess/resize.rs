//! Triangle-filtered downsampler on top of [`image::imageops::resize`].

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::matrix::PixelMatrix;

/// Dimensions after shrinking so the longer side equals `longest_side`.
///
/// Aspect ratio is preserved and each side stays at least one pixel.
/// Images that already fit (or a `longest_side` of zero) keep their size.
pub fn target_dimensions(width: usize, height: usize, longest_side: usize) -> (usize, usize) {
    let longest = width.max(height);
    if longest_side == 0 || longest <= longest_side {
        return (width, height);
    }
    let scale = longest_side as f64 / longest as f64;
    let shrink = |side: usize| ((side as f64 * scale).round() as usize).clamp(1, longest_side);
    (shrink(width), shrink(height))
}

/// Shrink `matrix` so its longer side is at most `longest_side`.
///
/// Resampling uses a triangle (bilinear) filter over straight RGBA. Matrices
/// that already fit are returned as an unchanged copy; this never enlarges.
pub fn downsample(matrix: &PixelMatrix, longest_side: usize) -> PixelMatrix {
    let (width, height) = (matrix.width(), matrix.height());
    let (new_width, new_height) = target_dimensions(width, height, longest_side);
    if (new_width, new_height) == (width, height) {
        return matrix.clone();
    }

    let (Ok(w), Ok(h), Ok(nw), Ok(nh)) = (
        u32::try_from(width),
        u32::try_from(height),
        u32::try_from(new_width),
        u32::try_from(new_height),
    ) else {
        tracing::warn!(width, height, "image too large to resample, keeping full size");
        return matrix.clone();
    };
    let Some(source) = RgbaImage::from_raw(w, h, matrix.to_rgba8()) else {
        return matrix.clone();
    };

    let resized = imageops::resize(&source, nw, nh, FilterType::Triangle);
    let Ok(out) = PixelMatrix::from_rgba8(new_width, new_height, resized.as_raw()) else {
        return matrix.clone();
    };

    tracing::debug!(
        from = %format!("{width}x{height}"),
        to = %format!("{new_width}x{new_height}"),
        "downsampled"
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    #[test]
    fn test_target_dimensions() {
        assert_eq!(target_dimensions(100, 50, 50), (50, 25));
        assert_eq!(target_dimensions(30, 200, 50), (8, 50));
        assert_eq!(target_dimensions(40, 40, 50), (40, 40));
        assert_eq!(target_dimensions(1000, 1, 50), (50, 1));
        assert_eq!(target_dimensions(80, 60, 0), (80, 60));
    }

    #[test]
    fn test_small_image_is_copied() {
        let m = PixelMatrix::new(10, 7, Pixel::opaque(1, 2, 3));
        assert_eq!(downsample(&m, 50), m);
    }

    #[test]
    fn test_solid_color_survives() {
        let color = Pixel::opaque(12, 200, 99);
        let m = PixelMatrix::new(120, 80, color);
        let small = downsample(&m, 50);
        assert_eq!((small.width(), small.height()), (50, 33));
        assert!(small.pixels().iter().all(|&p| p == color));
    }

    #[test]
    fn test_far_edges_keep_their_color() {
        // 100x10 -> 50x5: left half red, right half blue
        let red = Pixel::opaque(230, 20, 20);
        let blue = Pixel::opaque(20, 20, 230);
        let rows = (0..10)
            .map(|_| (0..100).map(|x| if x < 50 { red } else { blue }).collect())
            .collect();
        let m = PixelMatrix::from_rows(rows).unwrap();
        let small = downsample(&m, 50);
        assert_eq!((small.width(), small.height()), (50, 5));
        for row in 0..5 {
            assert_eq!(small[(row, 0)], red);
            assert_eq!(small[(row, 49)], blue);
        }
        // Next to the seam both halves blend
        let seam = small[(2, 24)];
        assert!(seam != red && seam != blue, "{seam:?}");
    }

    #[test]
    fn test_alpha_is_resampled() {
        let m = PixelMatrix::new(8, 4, Pixel::new(128, 10, 20, 30));
        let small = downsample(&m, 4);
        assert_eq!((small.width(), small.height()), (4, 2));
        assert!(small.pixels().iter().all(|&p| p == Pixel::new(128, 10, 20, 30)));
    }
}

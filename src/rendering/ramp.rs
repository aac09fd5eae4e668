//! Color ramp visualization: a gradient drawn as a row of square swatches.

use crate::error::AppError;
use pixelator_engine::{Pixel, PixelMatrix};

/// Edge length of one swatch in pixels.
pub const SWATCH_SIZE: usize = 100;
/// Background margin around and between swatches.
pub const SWATCH_GAP: usize = 5;

/// Render `colors` left to right as `size`-pixel squares on a white
/// background, separated and framed by `gap` pixels.
///
/// # Errors
///
/// [`AppError::Dimensions`] when the ramp would not fit in memory-addressable
/// dimensions.
pub fn render_ramp(colors: &[Pixel], size: usize, gap: usize) -> Result<PixelMatrix, AppError> {
    let n = colors.len();
    let too_large = || {
        AppError::Dimensions(format!("ramp of {n} swatches, {size}px each with {gap}px gaps"))
    };

    let frame = gap.checked_mul(2).ok_or_else(too_large)?;
    let width = n
        .checked_mul(size)
        .and_then(|swatches| swatches.checked_add((n + 1).checked_mul(gap)?))
        .ok_or_else(too_large)?;
    let height = if n == 0 {
        frame
    } else {
        size.checked_add(frame).ok_or_else(too_large)?
    };
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(std::mem::size_of::<Pixel>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or_else(too_large)?;

    let mut matrix = PixelMatrix::new(width, height, Pixel::WHITE);
    for (i, &color) in colors.iter().enumerate() {
        let left = gap + i * (size + gap);
        for row in gap..gap + size {
            for col in left..left + size {
                matrix.set(row, col, color);
            }
        }
    }
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelator_engine::generate_gradient;

    #[test]
    fn test_ramp_layout() {
        let red = Pixel::opaque(255, 0, 0);
        let blue = Pixel::opaque(0, 0, 255);
        let ramp = render_ramp(&[red, blue], 4, 1).unwrap();

        assert_eq!(ramp.width(), 11);
        assert_eq!(ramp.height(), 6);
        assert_eq!(ramp[(0, 0)], Pixel::WHITE);
        assert_eq!(ramp[(1, 1)], red);
        assert_eq!(ramp[(4, 4)], red);
        assert_eq!(ramp[(1, 5)], Pixel::WHITE);
        assert_eq!(ramp[(1, 6)], blue);
        assert_eq!(ramp[(4, 9)], blue);
        assert_eq!(ramp[(5, 9)], Pixel::WHITE);
    }

    #[test]
    fn test_ramp_of_gradient() {
        let colors = generate_gradient(Pixel::BLACK, Pixel::WHITE, 4);
        let ramp = render_ramp(&colors, SWATCH_SIZE, SWATCH_GAP).unwrap();
        assert_eq!(ramp.width(), 4 * SWATCH_SIZE + 5 * SWATCH_GAP);
        assert_eq!(ramp[(SWATCH_GAP, SWATCH_GAP)], Pixel::BLACK);
    }

    #[test]
    fn test_empty_ramp() {
        let ramp = render_ramp(&[], 10, 2).unwrap();
        assert_eq!((ramp.width(), ramp.height()), (2, 4));
    }

    #[test]
    fn test_oversized_ramp_is_error() {
        let colors = [Pixel::BLACK, Pixel::WHITE];
        assert!(matches!(render_ramp(&colors, usize::MAX, 1), Err(AppError::Dimensions(_))));
        assert!(matches!(render_ramp(&colors, 1, usize::MAX), Err(AppError::Dimensions(_))));
        assert!(matches!(render_ramp(&[], 0, usize::MAX), Err(AppError::Dimensions(_))));
        // Each side fits on its own but the pixel count does not
        let half = 1usize << (usize::BITS / 2);
        assert!(matches!(render_ramp(&colors, half, 0), Err(AppError::Dimensions(_))));
    }
}

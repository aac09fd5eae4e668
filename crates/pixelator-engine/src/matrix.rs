//! Row-major pixel matrix shared by every filter.
//!
//! A [`PixelMatrix`] owns its pixels exclusively. Filters read one matrix and
//! write a fresh one, so the source is never aliased by the result.

use std::ops::{Index, IndexMut};

use thiserror::Error;

use crate::color::Pixel;

/// Error type for matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Buffer length does not match `width * height * channels`
    #[error("buffer length mismatch: expected {expected} values for the given dimensions, got {actual}")]
    DimensionMismatch {
        /// Length implied by the dimensions
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// A row of a nested matrix has a different length than the first row
    #[error("ragged rows: row {row} has {actual} pixels, expected {expected}")]
    RaggedRows {
        /// Index of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },
}

/// A `height x width` grid of pixels in row-major order.
///
/// # Example
///
/// ```
/// use pixelator_engine::{Pixel, PixelMatrix};
///
/// let matrix = PixelMatrix::new(3, 2, Pixel::WHITE);
/// assert_eq!(matrix.width(), 3);
/// assert_eq!(matrix.height(), 2);
/// assert_eq!(matrix.get(1, 2), Some(Pixel::WHITE));
/// assert_eq!(matrix.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelMatrix {
    /// Create a matrix filled with one color.
    pub fn new(width: usize, height: usize, fill: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Wrap a row-major pixel buffer.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, MatrixError> {
        if pixels.len() != width * height {
            return Err(MatrixError::DimensionMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a matrix from nested rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a matrix from packed ARGB values.
    pub fn from_argb(width: usize, height: usize, argb: &[u32]) -> Result<Self, MatrixError> {
        Self::from_pixels(width, height, argb.iter().map(|&v| Pixel::from_argb(v)).collect())
    }

    /// Build a matrix from interleaved RGBA bytes.
    pub fn from_rgba8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, MatrixError> {
        if bytes.len() != width * height * 4 {
            return Err(MatrixError::DimensionMismatch {
                expected: width * height * 4,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::new(c[3], c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    /// Build an opaque matrix from interleaved RGB bytes.
    pub fn from_rgb8(width: usize, height: usize, bytes: &[u8]) -> Result<Self, MatrixError> {
        if bytes.len() != width * height * 3 {
            return Err(MatrixError::DimensionMismatch {
                expected: width * height * 3,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Pixel::opaque(c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Pixel at `(row, col)`, or `None` outside the matrix.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.pixels[row * self.width + col])
        } else {
            None
        }
    }

    /// Neighbor of `(row, col)` at a signed offset; `None` when it falls
    /// outside the matrix (borders clip, never wrap).
    #[inline]
    pub fn get_offset(&self, row: usize, col: usize, dr: isize, dc: isize) -> Option<Pixel> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        self.get(r, c)
    }

    /// Overwrite the pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the matrix.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        self[(row, col)] = pixel;
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks() rejects a zero chunk size
        self.pixels.chunks(self.width.max(1))
    }

    /// Packed ARGB values in row-major order.
    pub fn to_argb(&self) -> Vec<u32> {
        self.pixels.iter().map(|p| p.argb()).collect()
    }

    /// Interleaved RGBA bytes, the renderable bitmap form.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
        }
        bytes
    }

    /// Interleaved RGB bytes (alpha dropped).
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            bytes.extend_from_slice(&[p.red(), p.green(), p.blue()]);
        }
        bytes
    }

    /// Scale the saturation of every pixel in place.
    pub fn increase_saturation(&mut self, factor: f32) {
        for p in &mut self.pixels {
            p.increase_saturation(factor);
        }
    }

    /// Apply the contrast curve to every pixel in place.
    pub fn increase_contrast(&mut self, amount: i32) {
        for p in &mut self.pixels {
            p.increase_contrast(amount);
        }
    }
}

impl Index<(usize, usize)> for PixelMatrix {
    type Output = Pixel;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) outside {}x{} matrix",
            self.width,
            self.height
        );
        &self.pixels[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for PixelMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        assert!(
            row < self.height && col < self.width,
            "position ({row}, {col}) outside {}x{} matrix",
            self.width,
            self.height
        );
        &mut self.pixels[row * self.width + col]
    }
}

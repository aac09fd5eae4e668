//! Assertion helpers for tests.

use pixelator_engine::{Pixel, PixelMatrix};
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// Assert bytes carry the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.len() > 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n",
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert two matrices have the same width and height
pub fn assert_same_dimensions(actual: &PixelMatrix, expected: &PixelMatrix) {
    assert_eq!(
        (actual.width(), actual.height()),
        (expected.width(), expected.height()),
        "Matrix dimensions differ"
    );
}

/// Distinct colors in a matrix
pub fn distinct_colors(matrix: &PixelMatrix) -> HashSet<Pixel> {
    matrix.pixels().iter().copied().collect()
}

/// Assert a matrix uses at most `limit` distinct colors
pub fn assert_max_colors(matrix: &PixelMatrix, limit: usize) {
    let count = distinct_colors(matrix).len();
    assert!(
        count <= limit,
        "Expected at most {limit} distinct colors, found {count}"
    );
}

/// Assert every pixel of `matrix` is one of `palette`
pub fn assert_colors_within(matrix: &PixelMatrix, palette: &[Pixel]) {
    for (i, p) in matrix.pixels().iter().enumerate() {
        assert!(
            palette.contains(p),
            "Pixel {i} ({}) is not in the palette {:?}",
            p.to_hex(),
            palette.iter().map(|c| c.to_hex()).collect::<Vec<_>>()
        );
    }
}

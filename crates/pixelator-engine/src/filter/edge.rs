//! Naive edge tracing by exact color change.

use super::Filter;
use crate::color::Pixel;
use crate::matrix::PixelMatrix;

/// Paint a pixel black when its packed ARGB value differs from its right or
/// lower neighbor; keep it otherwise.
///
/// The comparison is bit-exact, not perceptual. The bottom-right pixel has
/// neither neighbor and is always kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeDetect;

impl Filter for EdgeDetect {
    fn name(&self) -> &'static str {
        "edge-detect"
    }

    fn apply(&self, source: &PixelMatrix) -> PixelMatrix {
        let mut out = source.clone();
        let differs = |row: usize, col: usize, dr: isize, dc: isize| {
            source
                .get_offset(row, col, dr, dc)
                .is_some_and(|n| n != source[(row, col)])
        };

        // horizontal pass
        for row in 0..source.height() {
            for col in 0..source.width() {
                if differs(row, col, 0, 1) {
                    out.set(row, col, Pixel::BLACK);
                }
            }
        }
        // vertical pass never clears a mark left by the horizontal one
        for col in 0..source.width() {
            for row in 0..source.height() {
                if differs(row, col, 1, 0) {
                    out.set(row, col, Pixel::BLACK);
                }
            }
        }
        out
    }
}

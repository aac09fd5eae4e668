//! Test fixtures and constants.

use pixelator_engine::{Pixel, PixelMatrix};
use std::path::{Path, PathBuf};

/// Named colors used across tests
pub mod colors {
    use pixelator_engine::Pixel;

    pub const RED: Pixel = Pixel::opaque(250, 10, 10);
    pub const BLUE: Pixel = Pixel::opaque(10, 10, 250);
    pub const GREEN: Pixel = Pixel::opaque(20, 200, 40);
    pub const GREY: Pixel = Pixel::opaque(128, 128, 128);
}

/// Left half red, right half blue.
pub fn two_tone(width: usize, height: usize) -> PixelMatrix {
    let mut m = PixelMatrix::new(width, height, colors::RED);
    for row in 0..height {
        for col in width / 2..width {
            m.set(row, col, colors::BLUE);
        }
    }
    m
}

/// Horizontal black-to-white ramp, one shade per column.
pub fn horizontal_ramp(width: usize, height: usize) -> PixelMatrix {
    let mut m = PixelMatrix::new(width, height, Pixel::BLACK);
    let span = width.saturating_sub(1).max(1);
    for row in 0..height {
        for col in 0..width {
            let v = (col * 255 / span) as u8;
            m.set(row, col, Pixel::opaque(v, v, v));
        }
    }
    m
}

/// Deterministic pseudo-random image.
pub fn noisy(width: usize, height: usize, seed: u32) -> PixelMatrix {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    let pixels = (0..width * height)
        .map(|_| Pixel::from_argb(0xFF00_0000 | (next() & 0x00FF_FFFF)))
        .collect();
    PixelMatrix::from_pixels(width, height, pixels).unwrap()
}

/// Write `matrix` as a PNG into `dir` and return its path.
pub fn write_fixture_png(dir: &Path, name: &str, matrix: &PixelMatrix) -> PathBuf {
    let path = dir.join(name);
    pixelator::rendering::write_png(&path, matrix).unwrap();
    path
}

/// Write a YAML config into `dir` and return its path.
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("pixelator.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

//! PNG file round trips through the rendering layer.

mod common;

use common::*;
use pixelator::error::AppError;
use pixelator::rendering::{encode_png, read_png, write_png};
use pixelator_engine::Pixel;
use pretty_assertions::assert_eq;

#[test]
fn test_write_then_read_preserves_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let image = noisy(13, 7, 99);

    let path = write_fixture_png(dir.path(), "noise.png", &image);
    let decoded = read_png(&path).unwrap();

    assert_eq!(decoded, image);
}

#[test]
fn test_translucent_pixels_survive() {
    let dir = tempfile::tempdir().unwrap();
    let mut image = two_tone(4, 2);
    image.set(0, 0, Pixel::new(0x40, 1, 2, 3));

    let path = dir.path().join("alpha.png");
    write_png(&path, &image).unwrap();

    assert_eq!(read_png(&path).unwrap()[(0, 0)], Pixel::new(0x40, 1, 2, 3));
}

#[test]
fn test_encoded_bytes_are_png() {
    assert_png(&encode_png(&horizontal_ramp(16, 2)).unwrap());
}

#[test]
fn test_read_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_png(&dir.path().join("missing.png"));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_read_non_png_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.png");
    std::fs::write(&path, b"GIF89a not really").unwrap();

    assert!(matches!(read_png(&path), Err(AppError::PngDecode(_))));
}

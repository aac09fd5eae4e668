//! PNG decode/encode between files and [`PixelMatrix`].
//!
//! Decoding accepts every PNG color type and bit depth and normalizes it to
//! 8-bit ARGB pixels: palettes and low bit depths are expanded, 16-bit
//! samples are stripped, grayscale is replicated into RGB and images without
//! an alpha channel come out opaque. Encoding always writes 8-bit RGBA.

use crate::error::AppError;
use pixelator_engine::{Pixel, PixelMatrix};
use std::io::Cursor;
use std::path::Path;

/// Decode PNG bytes into a pixel matrix.
pub fn decode_png(bytes: &[u8]) -> Result<PixelMatrix, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::PngDecode(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::PngDecode(e.to_string()))?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::PngDecode(format!(
            "unexpected bit depth {:?} after normalization",
            info.bit_depth
        )));
    }

    let width = info.width as usize;
    let height = info.height as usize;
    tracing::debug!(width, height, color_type = ?info.color_type, "Decoded PNG");

    let matrix = match info.color_type {
        png::ColorType::Rgba => PixelMatrix::from_rgba8(width, height, data)?,
        png::ColorType::Rgb => PixelMatrix::from_rgb8(width, height, data)?,
        png::ColorType::Grayscale => {
            let pixels = data.iter().map(|&v| Pixel::opaque(v, v, v)).collect();
            PixelMatrix::from_pixels(width, height, pixels)?
        }
        png::ColorType::GrayscaleAlpha => {
            let pixels = data
                .chunks_exact(2)
                .map(|c| Pixel::new(c[1], c[0], c[0], c[0]))
                .collect();
            PixelMatrix::from_pixels(width, height, pixels)?
        }
        png::ColorType::Indexed => {
            return Err(AppError::PngDecode(
                "indexed image was not expanded".to_string(),
            ))
        }
    };
    Ok(matrix)
}

/// Encode a pixel matrix as an 8-bit RGBA PNG.
pub fn encode_png(matrix: &PixelMatrix) -> Result<Vec<u8>, AppError> {
    let width = u32::try_from(matrix.width())
        .map_err(|_| AppError::PngEncode(format!("width {} too large", matrix.width())))?;
    let height = u32::try_from(matrix.height())
        .map_err(|_| AppError::PngEncode(format!("height {} too large", matrix.height())))?;

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&matrix.to_rgba8())
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<PixelMatrix, AppError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, matrix: &PixelMatrix) -> Result<(), AppError> {
    let bytes = encode_png(matrix)?;
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), width = matrix.width(), height = matrix.height(), "Wrote PNG");
    Ok(())
}

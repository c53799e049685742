//! PNG image format support
//!
//! Every PNG is decoded to 8-bit RGBA regardless of its stored color type,
//! and images are always written back as 8-bit RGBA.

use crate::{IoError, IoResult};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use resizer_core::{RasterImage, color::CHANNELS};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
///
/// Palette images and grayscale below 8 bits are expanded by the decoder,
/// 16-bit samples keep their high byte, gray is replicated into R, G and B,
/// and images without an alpha channel get alpha 255.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RasterImage> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let color_type = output_info.color_type;
    let bit_depth = output_info.bit_depth;

    // Bytes per input sample: 16-bit samples are read from their high byte
    let sample_bytes = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
    let samples = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpanded PNG palette: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };
    if bit_depth != BitDepth::Eight && bit_depth != BitDepth::Sixteen {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?}",
            color_type, bit_depth
        )));
    }

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let stride = samples * sample_bytes;

    let mut rgba = Vec::with_capacity(width as usize * height as usize * CHANNELS);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row.chunks_exact(stride).take(width as usize) {
            let sample = |i: usize| px[i * sample_bytes];
            let pixel = match samples {
                1 => [sample(0), sample(0), sample(0), 255],
                2 => [sample(0), sample(0), sample(0), sample(1)],
                3 => [sample(0), sample(1), sample(2), 255],
                _ => [sample(0), sample(1), sample(2), sample(3)],
            };
            rgba.extend_from_slice(&pixel);
        }
    }

    Ok(RasterImage::from_raw(width, height, rgba)?)
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(image: &RasterImage, writer: W) -> IoResult<()> {
    if image.is_empty() {
        return Err(IoError::InvalidData(format!(
            "cannot encode a {}x{} image",
            image.width(),
            image.height()
        )));
    }

    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(image.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

//! Nearest-neighbour resampling
//!
//! Each destination pixel copies the source pixel whose grid cell contains
//! its mapped position. No blending, no rounding: the position is floored.

use crate::TransformResult;
use crate::scale::source_position;
use resizer_core::{RasterImage, color::CHANNELS};

/// Resample `src` to `width` x `height` by sampling.
///
/// The size has already been validated and `src` is non-empty.
pub(crate) fn scale_sampled(src: &RasterImage, width: u32, height: u32) -> TransformResult<RasterImage> {
    let (src_w, src_h) = src.dimensions();
    let mut dst = RasterImage::new(width, height)?;

    let src_cols: Vec<usize> = (0..width)
        .map(|j| {
            let x = (source_position(j, width, src_w) as u32).min(src_w - 1);
            x as usize * CHANNELS
        })
        .collect();

    let src_data = src.data();
    let src_row_len = src_w as usize * CHANNELS;
    let dst_row_len = width as usize * CHANNELS;

    for (i, dst_row) in dst.data_mut().chunks_exact_mut(dst_row_len).enumerate() {
        let y = (source_position(i as u32, height, src_h) as u32).min(src_h - 1);
        let src_row = &src_data[y as usize * src_row_len..][..src_row_len];
        for (dst_px, &col) in dst_row.chunks_exact_mut(CHANNELS).zip(&src_cols) {
            dst_px.copy_from_slice(&src_row[col..col + CHANNELS]);
        }
    }

    Ok(dst)
}

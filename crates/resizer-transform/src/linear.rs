//! Bilinear resampling
//!
//! For each destination pixel the mapped source position `(x, y)` falls
//! between four samples. The two pairs sharing a row are blended along x
//! with weights `(x1 + 1 - x, x - x1)`, and the two results are blended
//! along y the same way.
//!
//! # Edge policy
//!
//! On the last column or row the "next" sample does not exist; it is
//! clamped to the last valid column or row before indexing. The weights are
//! still taken from the unclamped position, so the clamped pair blends a
//! sample with itself.
//!
//! # Truncation
//!
//! Each blend is computed in `f32` and truncated to `u8`, including the
//! intermediate row blends. Nothing is rounded.

use crate::TransformResult;
use crate::scale::source_position;
use resizer_core::{RasterImage, Rgba, color::CHANNELS};

/// Neighbour indices and weights along one axis.
#[derive(Debug, Clone, Copy)]
struct AxisSample {
    /// Lower neighbour (floor of the position)
    lo: usize,
    /// Upper neighbour, clamped to the last index
    hi: usize,
    /// Weight of `lo`
    w_lo: f32,
    /// Weight of `hi`
    w_hi: f32,
}

impl AxisSample {
    fn new(dst_index: u32, dst_len: u32, src_len: u32) -> Self {
        let pos = source_position(dst_index, dst_len, src_len) as f32;
        let p1 = pos.floor();
        let p2 = p1 + 1.0;
        let last = src_len as usize - 1;
        let lo = (p1 as usize).min(last);
        Self {
            lo,
            hi: (lo + 1).min(last),
            w_lo: p2 - pos,
            w_hi: pos - p1,
        }
    }
}

/// Blend two pixels channel by channel, truncating each result.
#[inline]
fn blend(a: &[u8], b: &[u8], w_a: f32, w_b: f32) -> Rgba {
    let mut out = [0u8; CHANNELS];
    for (k, v) in out.iter_mut().enumerate() {
        *v = (w_a * a[k] as f32 + w_b * b[k] as f32) as u8;
    }
    out
}

#[inline]
fn px(line: &[u8], x: usize) -> &[u8] {
    let off = x * CHANNELS;
    &line[off..off + CHANNELS]
}

/// Resample `src` to `width` x `height` by bilinear interpolation.
///
/// The size has already been validated and `src` is non-empty.
pub(crate) fn scale_bilinear(src: &RasterImage, width: u32, height: u32) -> TransformResult<RasterImage> {
    let (src_w, src_h) = src.dimensions();
    let mut dst = RasterImage::new(width, height)?;

    let cols: Vec<AxisSample> = (0..width).map(|j| AxisSample::new(j, width, src_w)).collect();

    let src_data = src.data();
    let src_row_len = src_w as usize * CHANNELS;
    let dst_row_len = width as usize * CHANNELS;

    for (i, dst_row) in dst.data_mut().chunks_exact_mut(dst_row_len).enumerate() {
        let ys = AxisSample::new(i as u32, height, src_h);
        let top = &src_data[ys.lo * src_row_len..][..src_row_len];
        let bottom = &src_data[ys.hi * src_row_len..][..src_row_len];

        for (dst_px, xs) in dst_row.chunks_exact_mut(CHANNELS).zip(&cols) {
            let upper = blend(px(top, xs.lo), px(top, xs.hi), xs.w_lo, xs.w_hi);
            let lower = blend(px(bottom, xs.lo), px(bottom, xs.hi), xs.w_lo, xs.w_hi);
            dst_px.copy_from_slice(&blend(&upper, &lower, ys.w_lo, ys.w_hi));
        }
    }

    Ok(dst)
}

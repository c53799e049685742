//! Image scaling operations
//!
//! Every entry point funnels into one path: resolve the target to absolute
//! pixels, validate it against the [`SizePolicy`], then run the selected
//! algorithm on a non-empty source.
//!
//! | Function | Target | Method |
//! |---|---|---|
//! | [`resample`] | [`TargetSize`] | any |
//! | [`scale`] | scale factors | any |
//! | [`scale_to_size`] | pixels | any |
//! | [`scale_by_sampling`] | pixels | nearest neighbour |
//! | [`scale_linear`] | pixels | bilinear |
//! | [`scale_bicubic`] | pixels | bicubic (not implemented) |

use crate::linear::scale_bilinear;
use crate::sampling::scale_sampled;
use crate::size::{SizePolicy, TargetSize};
use crate::{TransformError, TransformResult};
use log::{debug, trace};
use resizer_core::{Error, RasterImage};
use std::fmt;
use std::str::FromStr;

/// Interpolation method used to resample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbour sampling (copies one source pixel)
    #[default]
    Sampling,
    /// Bilinear interpolation of the four surrounding pixels
    Linear,
    /// Bicubic interpolation; declared but always rejected
    Bicubic,
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sampling => "nearest neighbour",
            Self::Linear => "bilinear",
            Self::Bicubic => "bicubic",
        };
        f.write_str(name)
    }
}

impl FromStr for ScaleMethod {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "nearest-neighbour" | "nearest-neighbor" | "sampling" => Ok(Self::Sampling),
            "bilinear" | "linear" => Ok(Self::Linear),
            "bicubic" | "cubic" => Ok(Self::Bicubic),
            _ => Err(TransformError::UnknownMethod(s.to_string())),
        }
    }
}

/// Map a destination index to a continuous source position.
///
/// Computes `dst_index * src_len / dst_len`, multiplying first so that
/// equal lengths map every index onto itself exactly.
#[inline]
pub(crate) fn source_position(dst_index: u32, dst_len: u32, src_len: u32) -> f64 {
    f64::from(dst_index) * f64::from(src_len) / f64::from(dst_len)
}

fn non_empty(src: &RasterImage) -> TransformResult<&RasterImage> {
    if src.is_empty() {
        return Err(Error::NullInput("source image has no pixels").into());
    }
    Ok(src)
}

/// Resample an image to a target size.
///
/// # Errors
///
/// - [`TransformError::InvalidSize`] if the resolved target fails `policy`
/// - [`TransformError::UnimplementedMethod`] for [`ScaleMethod::Bicubic`]
/// - [`TransformError::Core`] if `src` has no pixels
///
/// # Example
///
/// ```
/// use resizer_core::RasterImage;
/// use resizer_transform::{ScaleMethod, SizePolicy, TargetSize, resample};
///
/// let src = RasterImage::new_filled(100, 100, [10, 20, 30, 255]).unwrap();
/// let dst = resample(&src, TargetSize::scale(0.5, 0.5), ScaleMethod::Linear, SizePolicy::Minimal).unwrap();
/// assert_eq!(dst.dimensions(), (50, 50));
/// ```
pub fn resample(
    src: &RasterImage,
    target: TargetSize,
    method: ScaleMethod,
    policy: SizePolicy,
) -> TransformResult<RasterImage> {
    let (width, height) = target.resolve(src);
    let (width, height) = policy.validate(width, height).inspect_err(|_| {
        debug!(
            "rejected {} resample of {}x{} to {}x{} under {:?}",
            method,
            src.width(),
            src.height(),
            width,
            height,
            policy
        );
    })?;

    let dst = match method {
        ScaleMethod::Sampling => scale_sampled(non_empty(src)?, width, height)?,
        ScaleMethod::Linear => scale_bilinear(non_empty(src)?, width, height)?,
        ScaleMethod::Bicubic => {
            // TODO: implement bicubic interpolation (4x4 neighbourhood, Catmull-Rom weights)
            debug!("bicubic requested for {}x{}; not implemented", width, height);
            return Err(TransformError::UnimplementedMethod(method));
        }
    };

    trace!(
        "{} resample {}x{} -> {}x{}",
        method,
        src.width(),
        src.height(),
        width,
        height
    );
    Ok(dst)
}

/// Scale an image by per-axis factors.
///
/// The target is `trunc(src_dim * factor)` per axis.
pub fn scale(
    src: &RasterImage,
    scale_x: f32,
    scale_y: f32,
    method: ScaleMethod,
    policy: SizePolicy,
) -> TransformResult<RasterImage> {
    resample(src, TargetSize::scale(scale_x, scale_y), method, policy)
}

/// Scale an image to an exact size.
pub fn scale_to_size(
    src: &RasterImage,
    width: u32,
    height: u32,
    method: ScaleMethod,
    policy: SizePolicy,
) -> TransformResult<RasterImage> {
    resample(
        src,
        TargetSize::pixels(i64::from(width), i64::from(height)),
        method,
        policy,
    )
}

/// Scale an image to an exact size using nearest-neighbour sampling.
pub fn scale_by_sampling(
    src: &RasterImage,
    width: u32,
    height: u32,
    policy: SizePolicy,
) -> TransformResult<RasterImage> {
    scale_to_size(src, width, height, ScaleMethod::Sampling, policy)
}

/// Scale an image to an exact size using bilinear interpolation.
pub fn scale_linear(
    src: &RasterImage,
    width: u32,
    height: u32,
    policy: SizePolicy,
) -> TransformResult<RasterImage> {
    scale_to_size(src, width, height, ScaleMethod::Linear, policy)
}

/// Scale an image to an exact size using bicubic interpolation.
///
/// Validates the size, then always fails with
/// [`TransformError::UnimplementedMethod`].
pub fn scale_bicubic(
    src: &RasterImage,
    width: u32,
    height: u32,
    policy: SizePolicy,
) -> TransformResult<RasterImage> {
    scale_to_size(src, width, height, ScaleMethod::Bicubic, policy)
}

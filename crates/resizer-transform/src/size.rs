//! Target size resolution and validation
//!
//! A request names its target either in absolute pixels or as per-axis scale
//! factors. Scale factors are resolved against the source size first, so
//! both kinds of request go through the same [`SizePolicy`] check.

use crate::{TransformError, TransformResult};
use resizer_core::RasterImage;

/// Smallest accepted width or height
pub const MIN_DIMENSION: i64 = 2;

/// Upper bound used by [`SizePolicy::bounded`]
pub const DEFAULT_MAX_DIMENSION: u32 = 8192;

/// Which target sizes a resample request may ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePolicy {
    /// Width and height must be at least [`MIN_DIMENSION`]
    #[default]
    Minimal,
    /// As `Minimal`, and neither dimension may exceed `max`
    Bounded { max: u32 },
}

impl SizePolicy {
    /// Bounded policy with the [`DEFAULT_MAX_DIMENSION`] limit.
    pub fn bounded() -> Self {
        Self::Bounded {
            max: DEFAULT_MAX_DIMENSION,
        }
    }

    /// Policy from an optional upper bound; `None` means no upper bound.
    pub fn with_max(max: Option<u32>) -> Self {
        match max {
            Some(max) => Self::Bounded { max },
            None => Self::Minimal,
        }
    }

    /// Check a target size against this policy.
    pub fn is_valid_size(&self, width: i64, height: i64) -> bool {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return false;
        }
        match *self {
            Self::Minimal => true,
            Self::Bounded { max } => width <= i64::from(max) && height <= i64::from(max),
        }
    }

    /// Validate a target size and narrow it to pixel dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidSize`] if the size fails
    /// [`is_valid_size`](Self::is_valid_size) or does not fit in `u32`.
    pub fn validate(&self, width: i64, height: i64) -> TransformResult<(u32, u32)> {
        if !self.is_valid_size(width, height) {
            return Err(TransformError::InvalidSize { width, height });
        }
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(TransformError::InvalidSize { width, height }),
        }
    }
}

/// Target size of a resample request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetSize {
    /// Exact output size in pixels
    AbsolutePixels { width: i64, height: i64 },
    /// Output size as a multiple of the source size, per axis
    RelativeScale { width_factor: f32, height_factor: f32 },
}

impl TargetSize {
    /// Absolute target size.
    pub fn pixels(width: i64, height: i64) -> Self {
        Self::AbsolutePixels { width, height }
    }

    /// Relative target size (1.0 keeps the source dimension).
    pub fn scale(width_factor: f32, height_factor: f32) -> Self {
        Self::RelativeScale {
            width_factor,
            height_factor,
        }
    }

    /// Relative target size given in percent (100 keeps the source dimension).
    pub fn percent(width_percent: f32, height_percent: f32) -> Self {
        Self::scale(width_percent / 100.0, height_percent / 100.0)
    }

    /// Resolve to absolute pixels for a given source image.
    ///
    /// The result is not validated; see [`SizePolicy::validate`].
    pub fn resolve(&self, source: &RasterImage) -> (i64, i64) {
        match *self {
            Self::AbsolutePixels { width, height } => (width, height),
            Self::RelativeScale {
                width_factor,
                height_factor,
            } => resolve_scale(source.width(), source.height(), width_factor, height_factor),
        }
    }
}

/// Multiply each source dimension by its factor and truncate toward zero.
///
/// The product is computed in `f32`. NaN resolves to 0 and out-of-range
/// products saturate, so every input still yields a size the policy can
/// reject.
pub fn resolve_scale(
    source_width: u32,
    source_height: u32,
    width_factor: f32,
    height_factor: f32,
) -> (i64, i64) {
    (
        (source_width as f32 * width_factor) as i64,
        (source_height as f32 * height_factor) as i64,
    )
}

//! resizer-transform - Image resampling
//!
//! Produces a new [`RasterImage`](resizer_core::RasterImage) at a target
//! resolution:
//!
//! - Target sizes in absolute pixels or per-axis scale factors ([`TargetSize`])
//! - A configurable size check ([`SizePolicy`]: minimum 2x2, optional maximum)
//! - Nearest-neighbour sampling and bilinear interpolation ([`ScaleMethod`])
//!
//! The engine is stateless and synchronous. A failed request never produces
//! a partial image.

mod error;
mod linear;
mod sampling;
pub mod scale;
pub mod size;

pub use error::{TransformError, TransformResult};
pub use scale::{
    ScaleMethod, resample, scale, scale_bicubic, scale_by_sampling, scale_linear, scale_to_size,
};
pub use size::{DEFAULT_MAX_DIMENSION, MIN_DIMENSION, SizePolicy, TargetSize, resolve_scale};

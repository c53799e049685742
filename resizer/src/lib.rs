//! Resizer - Batch image resampling for Rust
//!
//! Resizes RGBA raster images with nearest-neighbour or bilinear
//! interpolation, and runs the same resize over a directory of PNG files.
//!
//! # Overview
//!
//! - [`RasterImage`] - owned RGBA pixel buffer
//! - [`io`] - PNG decoding and encoding
//! - [`transform`] - size policy, target sizes and the resamplers
//! - [`batch`] - directory-level resizing with per-file error reporting
//!
//! # Example
//!
//! ```
//! use resizer::RasterImage;
//! use resizer::transform::{ScaleMethod, SizePolicy, scale_to_size};
//!
//! let image = RasterImage::new_filled(640, 480, [0, 0, 0, 255]).unwrap();
//! let thumb = scale_to_size(&image, 64, 48, ScaleMethod::Linear, SizePolicy::Minimal).unwrap();
//! assert_eq!(thumb.dimensions(), (64, 48));
//! ```

pub mod batch;

// Re-export core types (primary data structures used everywhere)
pub use resizer_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use resizer_io as io;
pub use resizer_transform as transform;

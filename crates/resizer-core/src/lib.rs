//! Resizer Core - Basic data structures for image resampling
//!
//! This crate provides the data types shared by the rest of the workspace:
//!
//! - [`RasterImage`] - An owned, row-major 8-bit RGBA pixel buffer
//! - [`ImageFormat`] - File formats recognised by the I/O layer
//! - [`color`] - Pixel layout constants
//!
//! Every transform produces a new [`RasterImage`]; images are never resized
//! in place and never share their pixel storage.

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{ImageFormat, RasterImage, Rgba};

/// Pixel layout constants.
///
/// A pixel occupies 4 consecutive bytes in the order R, G, B, A.
pub mod color {
    /// Number of channels (bytes) per pixel
    pub const CHANNELS: usize = 4;
}

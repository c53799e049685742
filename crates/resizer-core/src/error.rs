//! Error types for resizer-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Resizer core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions (the byte count does not fit in memory)
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel buffer length does not match `width * height * 4`
    #[error("buffer size mismatch for {width}x{height}: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Index out of bounds
    #[error("index out of bounds: ({x}, {y}) outside {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Incompatible image sizes
    #[error("incompatible image sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u32, u32, u32, u32),

    /// Empty input where an image with pixels is required
    #[error("null or empty input: {0}")]
    NullInput(&'static str),
}

/// Result type alias for resizer core operations
pub type Result<T> = std::result::Result<T, Error>;

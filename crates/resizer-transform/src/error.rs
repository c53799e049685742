//! Error types for resizer-transform

use crate::ScaleMethod;
use thiserror::Error;

/// Errors that can occur during resampling
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] resizer_core::Error),

    /// Target size rejected by the size policy
    #[error("invalid target size: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },

    /// The method is declared but has no algorithm behind it
    #[error("{0} interpolation is not implemented")]
    UnimplementedMethod(ScaleMethod),

    /// Unrecognised method name
    #[error("unknown interpolation method: {0}")]
    UnknownMethod(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

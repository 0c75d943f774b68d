//! Error types for gridviz-transform

use thiserror::Error;

/// Errors that can occur in resolution-scaling arithmetic
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TransformError {
    /// Resolution is zero, negative, or not finite
    #[error("resolution must be positive and finite, got {0}")]
    InvalidResolution(f32),

    /// A dimension that must be nonzero is zero
    #[error("dimensions must be nonzero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;

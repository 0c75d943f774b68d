//! Error types for gridviz-color

use crate::encoding::PixelFormat;
use thiserror::Error;

/// Errors raised when building a color configuration
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    /// The three class encodings do not share one pixel format
    #[error("color encodings disagree on pixel format: {expected} vs {actual}")]
    FormatMismatch {
        expected: PixelFormat,
        actual: PixelFormat,
    },
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;

//! Error types for gridviz-io

use thiserror::Error;

/// Errors that can occur in the codec, compressor, or pipelines
#[derive(Debug, Error)]
pub enum IoError {
    /// Core message error
    #[error("core error: {0}")]
    Core(#[from] gridviz_core::Error),

    /// Color configuration error
    #[error("color error: {0}")]
    Color(#[from] gridviz_color::ColorError),

    /// Resolution-scaling error
    #[error("transform error: {0}")]
    Transform(#[from] gridviz_transform::TransformError),

    /// Grid data does not fill its declared raster dimensions
    #[error("grid data has {len} cells, which does not fill a {width}x{height} raster")]
    SizeMismatch { width: u32, height: u32, len: usize },

    /// Raster color type the codec cannot read cells from
    #[error("unsupported raster color type: {0}")]
    UnsupportedColorType(String),

    /// Unrecognized bitmap format tag
    #[error("unsupported bitmap format: {0}")]
    UnsupportedFormat(String),

    /// Bitmap encoder failure
    #[error("bitmap encode error: {0}")]
    Encode(String),
}

/// Result type for gridviz-io operations
pub type IoResult<T> = Result<T, IoError>;

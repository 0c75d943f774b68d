//! Error types for gridviz-core
//!
//! Provides a unified error type for constructing and validating the
//! message types in this crate.

use thiserror::Error;

/// Gridviz core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Grid data length disagrees with the metadata dimensions
    #[error("grid data has {actual} cells, {width}x{height} metadata requires {expected}")]
    DataSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Result type alias for gridviz-core operations
pub type Result<T> = std::result::Result<T, Error>;

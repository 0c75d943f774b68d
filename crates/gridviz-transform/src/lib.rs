//! Gridviz Transform - Resolution scaling
//!
//! This crate owns the arithmetic that relates grid dimensions to physical
//! resolutions, and the raster resize step driven by it:
//!
//! - [`scaled_size`] - Target pixel dimensions for a new resolution
//! - [`scaled_metadata`] - Grid metadata recomputed for a new resolution
//! - [`choose_resolution`] - The resolution implied by a goal bitmap size
//! - [`resize_raster`] - Exact-size nearest-neighbor resize

mod error;
pub mod resize;
pub mod resolution;

pub use error::{TransformError, TransformResult};
pub use resize::resize_raster;
pub use resolution::{choose_resolution, scaled_metadata, scaled_size};

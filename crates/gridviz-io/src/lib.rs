//! Gridviz IO - Grid/raster codec, bitmap compression, and the pipelines
//!
//! This crate composes the value mapping and resolution scaling into the
//! two operations the library exists for:
//!
//! - [`scale_grid`] - Rescale an occupancy grid to a new resolution
//! - [`compress_grid`] - Rescale a grid and compress it for wire transport
//!
//! Under them sit the reusable pieces:
//!
//! - [`grid_to_image`] / [`image_to_grid_data`] - Decode a grid into a
//!   raster and encode a raster back into grid cell data
//! - [`fill_compressed_bitmap`] / [`BitmapFormat`] - Encode a raster into
//!   a compressed-bitmap message payload

pub mod codec;
pub mod compress;
mod error;
pub mod pipeline;

pub use codec::{grid_to_image, image_to_grid_data};
pub use compress::{BitmapFormat, fill_compressed_bitmap};
pub use error::{IoError, IoResult};
pub use pipeline::{compress_grid, scale_grid};

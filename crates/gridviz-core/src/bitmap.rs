//! Compressed bitmap message
//!
//! The wire rendition of a rescaled occupancy grid: an encoded raster plus
//! the spatial information a receiver needs to place it. The payload bytes
//! and format tag are filled by the bitmap compressor; everything else is
//! copied from the source grid.

use crate::header::Header;
use crate::pose::Pose;

/// A compressed raster rendition of an occupancy grid.
///
/// `resolution_x` / `resolution_y` carry the physical size of one pixel on
/// each axis. The pipelines in this workspace always produce square pixels,
/// but the message keeps the axes separate for receivers that do not.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressedBitmap {
    /// Stamped frame of the source grid
    pub header: Header,
    /// World pose of the pixel at (0, 0)
    pub origin: Pose,
    /// Physical width of one pixel, in meters
    pub resolution_x: f32,
    /// Physical height of one pixel, in meters
    pub resolution_y: f32,
    /// Format tag of the payload (e.g. `"png"`)
    pub format: String,
    /// Encoded raster bytes
    pub data: Vec<u8>,
}

//! Occupancy grid message and metadata
//!
//! An occupancy grid is a row-major array of per-cell occupancy values plus
//! the spatial metadata needed to place it in the world. The shape mirrors
//! `nav_msgs/OccupancyGrid` / `nav_msgs/MapMetaData`.
//!
//! # Cell values
//!
//! Each cell is a signed byte with three meaningful classes:
//!
//! - [`CELL_UNKNOWN`] (`-1`) - never observed
//! - [`CELL_FREE`] (`0`) - observed free
//! - any other value - occupied, canonically [`CELL_OCCUPIED`] (`100`)

use crate::error::{Error, Result};
use crate::header::{Header, Time};
use crate::pose::Pose;

/// Cell value for space that has never been observed.
pub const CELL_UNKNOWN: i8 = -1;

/// Cell value for space observed to be free.
pub const CELL_FREE: i8 = 0;

/// Canonical cell value for occupied space.
pub const CELL_OCCUPIED: i8 = 100;

/// Spatial metadata for an occupancy grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapMetadata {
    /// Time the map was loaded
    pub map_load_time: Time,
    /// Physical edge length of one cell, in meters
    pub resolution: f32,
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// World pose of the cell at (0, 0)
    pub origin: Pose,
}

impl MapMetadata {
    /// Number of cells a grid with this metadata must hold.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A 2-D occupancy grid with its header and metadata.
///
/// Invariant: `data.len() == info.width * info.height`, row-major, the cell
/// at `(x, y)` stored at index `y * width + x`. The invariant is checked at
/// construction; the fields stay public so the value can cross a message
/// boundary without copying.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupancyGrid {
    /// Stamped frame the grid is expressed in
    pub header: Header,
    /// Spatial metadata
    pub info: MapMetadata,
    /// Per-cell occupancy values, row-major
    pub data: Vec<i8>,
}

impl OccupancyGrid {
    /// Create a grid, validating that `data` fills the metadata dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSizeMismatch`] if `data.len()` differs from
    /// `info.width * info.height`.
    pub fn new(header: Header, info: MapMetadata, data: Vec<i8>) -> Result<Self> {
        let expected = info.cell_count();
        if data.len() != expected {
            return Err(Error::DataSizeMismatch {
                width: info.width,
                height: info.height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { header, info, data })
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.data.len()
    }
}

//! Gridviz Core - Message types for occupancy-grid visualization transport
//!
//! This crate provides the data model shared by the gridviz crates:
//!
//! - [`OccupancyGrid`] / [`MapMetadata`] - A robot-mapping occupancy grid
//!   and its spatial metadata
//! - [`CompressedBitmap`] - A compressed raster rendition of a grid,
//!   suitable for wire transport
//! - [`Header`] / [`Time`] - Stamped frame references
//! - [`Pose`] / [`Point`] / [`Quaternion`] - Spatial poses
//!
//! The struct shapes mirror the ROS `nav_msgs/OccupancyGrid` family so that
//! values can be moved to and from a ROS transport layer without field
//! juggling, but nothing in this crate depends on ROS.
//!
//! All types are plain data: constructed once, read by the pipelines, never
//! mutated in place.

pub mod bitmap;
pub mod error;
pub mod grid;
pub mod header;
pub mod pose;

pub use bitmap::CompressedBitmap;
pub use error::{Error, Result};
pub use grid::{CELL_FREE, CELL_OCCUPIED, CELL_UNKNOWN, MapMetadata, OccupancyGrid};
pub use header::{Header, Time};
pub use pose::{Point, Pose, Quaternion};

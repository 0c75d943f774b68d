//! Gridviz - Occupancy-grid visualization and transport
//!
//! Converts robot-mapping occupancy grids into raster bitmaps for
//! visualization and network transport, and back:
//!
//! - Bidirectional mapping between occupancy classes and configurable
//!   pixel encodings (grayscale or RGBA)
//! - Resolution rescaling (coarsening or refining the cell size)
//! - Compression of rescaled grids into standard image formats
//!
//! # Example
//!
//! ```
//! use gridviz::{CELL_FREE, Header, MapMetadata, OccupancyGrid};
//!
//! let info = MapMetadata {
//!     resolution: 0.1,
//!     width: 4,
//!     height: 4,
//!     ..Default::default()
//! };
//! let grid = OccupancyGrid::new(Header::default(), info, vec![CELL_FREE; 16]).unwrap();
//!
//! // Coarsen to 0.2 m/cell: a 2x2 grid comes back.
//! let scaled = gridviz::io::scale_grid(&grid, 0.2, None).unwrap();
//! assert_eq!((scaled.info.width, scaled.info.height), (2, 2));
//!
//! // Or compress for transport.
//! let bitmap = gridviz::io::compress_grid(&grid, 0.2, "png", None).unwrap();
//! assert_eq!(bitmap.format, "png");
//! ```

// Re-export core types (message structs used everywhere)
pub use gridviz_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gridviz_color as color;
pub use gridviz_io as io;
pub use gridviz_transform as transform;

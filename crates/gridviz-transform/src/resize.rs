//! Raster resize step
//!
//! Resampling itself is delegated to the raster library; this module only
//! fixes the algorithm choice. Occupancy rasters are paletted data, so the
//! resize must use nearest-neighbor sampling: any interpolating filter
//! would emit pixel values outside the three-color palette, and the decode
//! step classifies every off-palette value as occupied.

use image::DynamicImage;
use image::imageops::FilterType;

/// Resize a raster to exactly `size`, sampling nearest-neighbor.
pub fn resize_raster(image: &DynamicImage, size: (u32, u32)) -> DynamicImage {
    let (width, height) = size;
    image.resize_exact(width, height, FilterType::Nearest)
}

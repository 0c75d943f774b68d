//! Top-level pipelines
//!
//! The two operations the library exists for. Both share the same front
//! half (decode the grid into a raster, compute the rescaled dimensions,
//! resize) and differ in what they do with the resized raster: re-encode
//! it into a new grid, or hand it to the bitmap compressor.
//!
//! Every call is a pure computation over its inputs; nothing is cached or
//! shared between invocations.

use gridviz_color::ColorConfiguration;
use gridviz_core::{CompressedBitmap, OccupancyGrid};
use gridviz_transform::{resize_raster, scaled_metadata, scaled_size};
use image::DynamicImage;
use log::debug;

use crate::codec::{grid_to_image, image_to_grid_data};
use crate::compress::fill_compressed_bitmap;
use crate::error::IoResult;

/// Decode, compute the rescaled size, and resize: the front half shared by
/// both pipelines.
fn rescale_raster(
    grid: &OccupancyGrid,
    resolution: f32,
    config: &ColorConfiguration,
) -> IoResult<DynamicImage> {
    let image = grid_to_image(grid, config)?;
    let size = scaled_size(
        (grid.info.width, grid.info.height),
        grid.info.resolution,
        resolution,
    )?;
    Ok(resize_raster(&image, size))
}

/// Rescale an occupancy grid to a new resolution.
///
/// Decodes the grid into a raster, resizes it nearest-neighbor to the
/// dimensions implied by `resolution`, and re-encodes the result into a
/// new grid. The returned grid keeps the source header, carries metadata
/// recomputed for the new resolution, and always satisfies
/// `data.len() == width * height`.
///
/// `config` defaults to [`ColorConfiguration::default`] when `None`.
///
/// # Errors
///
/// Returns an error if the grid data does not fill its declared
/// dimensions or if `resolution` is not a positive finite number.
pub fn scale_grid(
    grid: &OccupancyGrid,
    resolution: f32,
    config: Option<&ColorConfiguration>,
) -> IoResult<OccupancyGrid> {
    let config = config.copied().unwrap_or_default();
    let resized = rescale_raster(grid, resolution, &config)?;
    let data = image_to_grid_data(&resized, &config)?;
    let info = scaled_metadata(&grid.info, resolution)?;
    debug!(
        "scaled {}x{} grid at {} m/cell to {}x{} at {} m/cell",
        grid.info.width, grid.info.height, grid.info.resolution, info.width, info.height,
        info.resolution,
    );
    Ok(OccupancyGrid::new(grid.header.clone(), info, data)?)
}

/// Rescale an occupancy grid and compress it for wire transport.
///
/// Same front half as [`scale_grid`]; the resized raster is then encoded
/// into a [`CompressedBitmap`] whose payload format is the caller-supplied
/// `format` tag (e.g. `"png"`). The message carries the grid's header and
/// origin, with both pixel resolutions set to `resolution`.
///
/// `config` defaults to [`ColorConfiguration::default`] when `None`.
///
/// # Errors
///
/// As [`scale_grid`], plus [`crate::IoError::UnsupportedFormat`] for an
/// unrecognized format tag and [`crate::IoError::Encode`] when the encoder
/// rejects the raster.
pub fn compress_grid(
    grid: &OccupancyGrid,
    resolution: f32,
    format: &str,
    config: Option<&ColorConfiguration>,
) -> IoResult<CompressedBitmap> {
    let config = config.copied().unwrap_or_default();
    let resized = rescale_raster(grid, resolution, &config)?;

    let mut message = CompressedBitmap {
        header: grid.header.clone(),
        origin: grid.info.origin,
        resolution_x: resolution,
        resolution_y: resolution,
        ..Default::default()
    };
    fill_compressed_bitmap(&resized, format, &mut message)?;
    debug!(
        "compressed {}x{} grid to {} bytes of {} at {} m/pixel",
        grid.info.width,
        grid.info.height,
        message.data.len(),
        message.format,
        resolution,
    );
    Ok(message)
}

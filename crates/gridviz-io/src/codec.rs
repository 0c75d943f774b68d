//! Grid/raster codec
//!
//! Decodes an occupancy grid into a raster by running the cell values
//! through the value mapper, and encodes a raster back into grid cell
//! data by reading native pixel values in row-major order.
//!
//! The raster kind follows the color configuration's format: grayscale
//! configurations produce 8-bit luma rasters, RGBA configurations produce
//! 4-byte color rasters.

use gridviz_color::{ColorConfiguration, PixelFormat, cells_to_pixels, pixels_to_cells};
use gridviz_core::OccupancyGrid;
use image::{DynamicImage, GrayImage, RgbaImage};

use crate::error::{IoError, IoResult};

/// Decode an occupancy grid into a raster.
///
/// Cells are written row-major, so pixel `(x, y)` renders the cell at
/// index `y * width + x`.
///
/// # Errors
///
/// Returns [`IoError::SizeMismatch`] if the grid's data length disagrees
/// with its metadata dimensions.
pub fn grid_to_image(
    grid: &OccupancyGrid,
    config: &ColorConfiguration,
) -> IoResult<DynamicImage> {
    let (width, height) = (grid.info.width, grid.info.height);
    let size_mismatch = || IoError::SizeMismatch {
        width,
        height,
        len: grid.data.len(),
    };
    if grid.data.len() != grid.info.cell_count() {
        return Err(size_mismatch());
    }

    let buffer: Vec<u8> = cells_to_pixels(&grid.data, config).collect();
    let raster = match config.format() {
        PixelFormat::Gray => {
            GrayImage::from_raw(width, height, buffer).map(DynamicImage::ImageLuma8)
        }
        PixelFormat::Rgba => {
            RgbaImage::from_raw(width, height, buffer).map(DynamicImage::ImageRgba8)
        }
    };
    raster.ok_or_else(size_mismatch)
}

/// Encode a raster back into grid cell data.
///
/// Reads native pixel values row-major (luma: the intensity byte; RGBA:
/// the little-endian packed channels) and classifies each against the
/// configuration. The result is materialized, ready to move into an
/// [`OccupancyGrid`].
///
/// # Errors
///
/// Returns [`IoError::UnsupportedColorType`] for rasters that are neither
/// 8-bit luma nor 8-bit RGBA.
pub fn image_to_grid_data(
    image: &DynamicImage,
    config: &ColorConfiguration,
) -> IoResult<Vec<i8>> {
    match image {
        DynamicImage::ImageLuma8(gray) => Ok(pixels_to_cells(
            gray.pixels().map(|pixel| u32::from(pixel.0[0])),
            config,
        )
        .collect()),
        DynamicImage::ImageRgba8(rgba) => Ok(pixels_to_cells(
            rgba.pixels().map(|pixel| u32::from_le_bytes(pixel.0)),
            config,
        )
        .collect()),
        other => Err(IoError::UnsupportedColorType(format!("{:?}", other.color()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridviz_core::{CELL_FREE, CELL_OCCUPIED, CELL_UNKNOWN, Header, MapMetadata};

    fn grid(width: u32, height: u32, data: Vec<i8>) -> OccupancyGrid {
        OccupancyGrid {
            header: Header::default(),
            info: MapMetadata {
                resolution: 0.1,
                width,
                height,
                ..Default::default()
            },
            data,
        }
    }

    #[test]
    fn test_decode_gray_row_major() {
        let config = ColorConfiguration::default();
        let source = grid(2, 2, vec![CELL_UNKNOWN, CELL_FREE, CELL_OCCUPIED, CELL_FREE]);
        let image = grid_to_image(&source, &config).unwrap();
        let gray = image.as_luma8().unwrap();
        assert_eq!(gray.get_pixel(0, 0).0[0], 128);
        assert_eq!(gray.get_pixel(1, 0).0[0], 1);
        assert_eq!(gray.get_pixel(0, 1).0[0], 0);
        assert_eq!(gray.get_pixel(1, 1).0[0], 1);
    }

    #[test]
    fn test_decode_rejects_length_mismatch() {
        let config = ColorConfiguration::default();
        let source = grid(3, 3, vec![CELL_FREE; 8]);
        let err = grid_to_image(&source, &config).unwrap_err();
        assert!(matches!(
            err,
            IoError::SizeMismatch {
                width: 3,
                height: 3,
                len: 8,
            }
        ));
    }

    #[test]
    fn test_encode_reads_row_major() {
        let config = ColorConfiguration::default();
        let image = DynamicImage::ImageLuma8(
            GrayImage::from_raw(2, 1, vec![128, 0]).unwrap(),
        );
        let data = image_to_grid_data(&image, &config).unwrap();
        assert_eq!(data, vec![CELL_UNKNOWN, CELL_OCCUPIED]);
    }

    #[test]
    fn test_round_trip_preserves_canonical_cells() {
        let config = ColorConfiguration::default();
        let source = grid(
            3,
            2,
            vec![
                CELL_UNKNOWN,
                CELL_FREE,
                CELL_OCCUPIED,
                CELL_OCCUPIED,
                CELL_FREE,
                CELL_UNKNOWN,
            ],
        );
        let image = grid_to_image(&source, &config).unwrap();
        let data = image_to_grid_data(&image, &config).unwrap();
        assert_eq!(data, source.data);
    }

    #[test]
    fn test_rgba_round_trip() {
        use gridviz_color::PixelEncoding;

        let config = ColorConfiguration::from_colors(
            Some(PixelEncoding::Rgba {
                red: 0,
                green: 0,
                blue: 0,
                alpha: 255,
            }),
            Some(PixelEncoding::Rgba {
                red: 255,
                green: 255,
                blue: 255,
                alpha: 255,
            }),
            Some(PixelEncoding::Rgba {
                red: 128,
                green: 128,
                blue: 128,
                alpha: 0,
            }),
        )
        .unwrap();
        let source = grid(2, 1, vec![CELL_OCCUPIED, CELL_UNKNOWN]);
        let image = grid_to_image(&source, &config).unwrap();
        assert!(image.as_rgba8().is_some());
        let data = image_to_grid_data(&image, &config).unwrap();
        assert_eq!(data, source.data);
    }

    #[test]
    fn test_encode_rejects_other_color_types() {
        let config = ColorConfiguration::default();
        let image = DynamicImage::new_rgb8(2, 2);
        assert!(matches!(
            image_to_grid_data(&image, &config),
            Err(IoError::UnsupportedColorType(_))
        ));
    }
}

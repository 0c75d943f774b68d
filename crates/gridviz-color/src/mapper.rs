//! Cell value to pixel mapping
//!
//! Pure, total, lazy adapters between occupancy cell values and pixels,
//! driven by a [`ColorConfiguration`]. Both directions are single-pass
//! iterators; callers materialize them only at the raster or message
//! boundary where a fixed-size buffer is required.
//!
//! Decoding is deliberately lossy: a pixel value that matches neither the
//! unknown nor the free encoding is classified as occupied, whether or not
//! it equals the configured occupied value. Interpolated or foreign pixels
//! therefore land on the conservative side.

use crate::config::ColorConfiguration;
use crate::encoding::PixelEncoding;
use gridviz_core::{CELL_FREE, CELL_OCCUPIED, CELL_UNKNOWN};

fn encoding_for(config: &ColorConfiguration, cell: i8) -> &PixelEncoding {
    match cell {
        CELL_UNKNOWN => config.unknown(),
        CELL_FREE => config.free(),
        _ => config.occupied(),
    }
}

/// Map cell values to the flat byte stream of their pixel encodings.
///
/// Yields `cells.len() * bytes_per_pixel` bytes in row-major cell order:
/// `-1` maps to the unknown encoding, `0` to free, anything else to
/// occupied.
pub fn cells_to_pixels<'a>(
    cells: &'a [i8],
    config: &'a ColorConfiguration,
) -> impl Iterator<Item = u8> + 'a {
    cells
        .iter()
        .flat_map(move |&cell| encoding_for(config, cell).bytes())
}

/// Map native pixel values back to cell values.
///
/// A value equal to the unknown encoding yields `-1`, equal to the free
/// encoding yields `0`, and anything else yields the canonical occupied
/// value `100` (the catch-all policy described in the module docs).
pub fn pixels_to_cells<'a, I>(
    values: I,
    config: &'a ColorConfiguration,
) -> impl Iterator<Item = i8> + 'a
where
    I: IntoIterator<Item = u32> + 'a,
{
    let unknown = config.unknown().value();
    let free = config.free().value();
    values.into_iter().map(move |value| {
        if value == unknown {
            CELL_UNKNOWN
        } else if value == free {
            CELL_FREE
        } else {
            CELL_OCCUPIED
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::PixelEncoding;

    #[test]
    fn test_cells_to_pixels_gray_defaults() {
        let config = ColorConfiguration::default();
        let cells = [-1i8, 0, 1, 50, 100];
        let bytes: Vec<u8> = cells_to_pixels(&cells, &config).collect();
        // unknown=128, free=1, everything else occupied=0
        assert_eq!(bytes, vec![128, 1, 0, 0, 0]);
    }

    #[test]
    fn test_cells_to_pixels_rgba_is_four_bytes_per_cell() {
        let config = ColorConfiguration::from_colors(
            Some(PixelEncoding::Rgba {
                red: 10,
                green: 20,
                blue: 30,
                alpha: 255,
            }),
            Some(PixelEncoding::Rgba {
                red: 0,
                green: 0,
                blue: 0,
                alpha: 0,
            }),
            Some(PixelEncoding::Rgba {
                red: 1,
                green: 1,
                blue: 1,
                alpha: 1,
            }),
        )
        .unwrap();
        let cells = [CELL_OCCUPIED, CELL_FREE];
        let bytes: Vec<u8> = cells_to_pixels(&cells, &config).collect();
        assert_eq!(bytes, vec![10, 20, 30, 255, 0, 0, 0, 0]);
    }

    #[test]
    fn test_pixels_to_cells_maps_each_class() {
        let config = ColorConfiguration::default();
        let cells: Vec<i8> = pixels_to_cells([128u32, 1, 0], &config).collect();
        assert_eq!(cells, vec![CELL_UNKNOWN, CELL_FREE, CELL_OCCUPIED]);
    }

    #[test]
    fn test_pixels_to_cells_catch_all_is_occupied() {
        // 77 matches no configured encoding and must decode as occupied.
        let config = ColorConfiguration::default();
        let cells: Vec<i8> = pixels_to_cells([77u32], &config).collect();
        assert_eq!(cells, vec![CELL_OCCUPIED]);
    }

    #[test]
    fn test_round_trip_over_canonical_values() {
        let config = ColorConfiguration::default();
        let cells = [CELL_UNKNOWN, CELL_FREE, CELL_OCCUPIED, CELL_FREE];
        let bytes: Vec<u8> = cells_to_pixels(&cells, &config).collect();
        let back: Vec<i8> =
            pixels_to_cells(bytes.into_iter().map(u32::from), &config).collect();
        assert_eq!(back, cells);
    }

    #[test]
    fn test_noncanonical_occupied_normalizes_to_100() {
        let config = ColorConfiguration::default();
        let bytes: Vec<u8> = cells_to_pixels(&[42i8], &config).collect();
        let back: Vec<i8> =
            pixels_to_cells(bytes.into_iter().map(u32::from), &config).collect();
        assert_eq!(back, vec![CELL_OCCUPIED]);
    }
}

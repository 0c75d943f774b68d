//! Color configuration
//!
//! Chooses one [`PixelEncoding`] per occupancy class. The three encodings
//! must agree on a single [`PixelFormat`]; that format decides which kind
//! of raster the codec builds.

use crate::encoding::{PixelEncoding, PixelFormat};
use crate::error::{ColorError, ColorResult};

/// Default encoding for occupied cells: black.
pub const DEFAULT_COLOR_OCCUPIED: PixelEncoding = PixelEncoding::Gray(0);

/// Default encoding for free cells: intensity 1, distinguished from
/// occupied by exact value.
pub const DEFAULT_COLOR_FREE: PixelEncoding = PixelEncoding::Gray(1);

/// Default encoding for unknown cells: mid-gray.
pub const DEFAULT_COLOR_UNKNOWN: PixelEncoding = PixelEncoding::Gray(128);

/// Color specification used when converting between an occupancy grid and
/// a raster.
///
/// # Examples
///
/// ```
/// use gridviz_color::{ColorConfiguration, PixelEncoding, PixelFormat};
///
/// let config = ColorConfiguration::from_colors(
///     Some(PixelEncoding::Gray(0)),
///     None,
///     Some(PixelEncoding::Gray(64)),
/// )
/// .unwrap();
/// assert_eq!(config.format(), PixelFormat::Gray);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfiguration {
    occupied: PixelEncoding,
    free: PixelEncoding,
    unknown: PixelEncoding,
    format: PixelFormat,
}

impl ColorConfiguration {
    /// Build a configuration, filling unset classes with the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::FormatMismatch`] unless all three encodings
    /// (after defaulting) share one pixel format.
    pub fn from_colors(
        occupied: Option<PixelEncoding>,
        free: Option<PixelEncoding>,
        unknown: Option<PixelEncoding>,
    ) -> ColorResult<Self> {
        let occupied = occupied.unwrap_or(DEFAULT_COLOR_OCCUPIED);
        let free = free.unwrap_or(DEFAULT_COLOR_FREE);
        let unknown = unknown.unwrap_or(DEFAULT_COLOR_UNKNOWN);

        let format = occupied.format();
        for encoding in [&free, &unknown] {
            if encoding.format() != format {
                return Err(ColorError::FormatMismatch {
                    expected: format,
                    actual: encoding.format(),
                });
            }
        }

        Ok(Self {
            occupied,
            free,
            unknown,
            format,
        })
    }

    /// The shared pixel format of the three encodings.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Encoding for occupied cells.
    pub fn occupied(&self) -> &PixelEncoding {
        &self.occupied
    }

    /// Encoding for free cells.
    pub fn free(&self) -> &PixelEncoding {
        &self.free
    }

    /// Encoding for unknown cells.
    pub fn unknown(&self) -> &PixelEncoding {
        &self.unknown
    }
}

impl Default for ColorConfiguration {
    /// The all-grayscale default palette.
    fn default() -> Self {
        Self {
            occupied: DEFAULT_COLOR_OCCUPIED,
            free: DEFAULT_COLOR_FREE,
            unknown: DEFAULT_COLOR_UNKNOWN,
            format: PixelFormat::Gray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let config = ColorConfiguration::default();
        assert_eq!(config.format(), PixelFormat::Gray);
        assert_eq!(config.occupied().value(), 0);
        assert_eq!(config.free().value(), 1);
        assert_eq!(config.unknown().value(), 128);
    }

    #[test]
    fn test_from_colors_defaults_unset_slots() {
        let config = ColorConfiguration::from_colors(None, None, None).unwrap();
        assert_eq!(config, ColorConfiguration::default());

        let config =
            ColorConfiguration::from_colors(Some(PixelEncoding::Gray(5)), None, None).unwrap();
        assert_eq!(config.occupied().value(), 5);
        assert_eq!(config.free(), &DEFAULT_COLOR_FREE);
    }

    #[test]
    fn test_mixed_formats_rejected() {
        let err = ColorConfiguration::from_colors(
            Some(PixelEncoding::Rgba {
                red: 0,
                green: 0,
                blue: 0,
                alpha: 255,
            }),
            Some(PixelEncoding::Gray(1)),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ColorError::FormatMismatch {
                expected: PixelFormat::Rgba,
                actual: PixelFormat::Gray,
            }
        );
    }

    #[test]
    fn test_all_rgba_accepted() {
        let white = PixelEncoding::Rgba {
            red: 255,
            green: 255,
            blue: 255,
            alpha: 255,
        };
        let clear = PixelEncoding::Rgba {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        };
        let red = PixelEncoding::Rgba {
            red: 255,
            green: 0,
            blue: 0,
            alpha: 255,
        };
        let config =
            ColorConfiguration::from_colors(Some(red), Some(white), Some(clear)).unwrap();
        assert_eq!(config.format(), PixelFormat::Rgba);
    }
}

//! Bitmap compression
//!
//! Encodes a raster into the payload of a [`CompressedBitmap`] message.
//! The format travels through the pipelines as an opaque tag string and is
//! interpreted only here.

use gridviz_core::CompressedBitmap;
use image::DynamicImage;
use std::io::Cursor;

use crate::error::{IoError, IoResult};

/// Bitmap payload format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmapFormat {
    /// PNG, lossless
    Png,
    /// JFIF JPEG, lossy (grayscale rasters only; JPEG has no alpha)
    Jpeg,
    /// Uncompressed BMP
    Bmp,
    /// TIFF
    Tiff,
}

impl BitmapFormat {
    /// Parse a caller-supplied format tag, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] for tags naming no supported
    /// format.
    pub fn from_tag(tag: &str) -> IoResult<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "png" => Ok(BitmapFormat::Png),
            "jpeg" | "jpg" => Ok(BitmapFormat::Jpeg),
            "bmp" => Ok(BitmapFormat::Bmp),
            "tiff" | "tif" => Ok(BitmapFormat::Tiff),
            _ => Err(IoError::UnsupportedFormat(tag.to_string())),
        }
    }

    /// Canonical tag for this format.
    pub fn tag(self) -> &'static str {
        match self {
            BitmapFormat::Png => "png",
            BitmapFormat::Jpeg => "jpeg",
            BitmapFormat::Bmp => "bmp",
            BitmapFormat::Tiff => "tiff",
        }
    }

    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            BitmapFormat::Png => "png",
            BitmapFormat::Jpeg => "jpg",
            BitmapFormat::Bmp => "bmp",
            BitmapFormat::Tiff => "tif",
        }
    }

    fn encoder_format(self) -> image::ImageFormat {
        match self {
            BitmapFormat::Png => image::ImageFormat::Png,
            BitmapFormat::Jpeg => image::ImageFormat::Jpeg,
            BitmapFormat::Bmp => image::ImageFormat::Bmp,
            BitmapFormat::Tiff => image::ImageFormat::Tiff,
        }
    }
}

/// Encode `image` into `message`'s payload in the tagged format.
///
/// Sets `message.format` and `message.data`; all other message fields are
/// the caller's business.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for an unrecognized tag and
/// [`IoError::Encode`] when the encoder rejects the raster (for example
/// JPEG with an RGBA raster).
pub fn fill_compressed_bitmap(
    image: &DynamicImage,
    format: &str,
    message: &mut CompressedBitmap,
) -> IoResult<()> {
    let format = BitmapFormat::from_tag(format)?;
    let mut payload = Cursor::new(Vec::new());
    image
        .write_to(&mut payload, format.encoder_format())
        .map_err(|e| IoError::Encode(e.to_string()))?;
    message.format = format.tag().to_string();
    message.data = payload.into_inner();
    Ok(())
}

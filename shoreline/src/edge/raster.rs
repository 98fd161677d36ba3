//! Raster input validation for decoded image files.

use image::{DynamicImage, RgbImage};

use super::error::EdgeError;

/// Extracts an 8-bit RGB raster from a decoded image, failing fast on any
/// other channel layout.
///
/// The extractor compares pixels against its reference water color channel
/// by channel, so the layout has to be known rather than guessed. Callers
/// holding an RGBA or grayscale decode must convert deliberately instead of
/// relying on a silent reinterpretation here.
pub fn rgb8_from_dynamic(image: DynamicImage) -> Result<RgbImage, EdgeError> {
    match image {
        DynamicImage::ImageRgb8(rgb) => Ok(rgb),
        other => Err(EdgeError::UnsupportedChannelLayout(other.color())),
    }
}

//! Error types for water-edge extraction.

use std::fmt;

use image::ColorType;

/// Errors that can occur during water-edge extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeError {
    /// Raster has zero area.
    EmptyRaster { width: u32, height: u32 },
    /// Raster channel layout does not match the expected 8-bit RGB input.
    UnsupportedChannelLayout(ColorType),
}

impl fmt::Display for EdgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeError::EmptyRaster { width, height } => {
                write!(
                    f,
                    "Empty raster {}×{}: width and height must be positive",
                    width, height
                )
            }
            EdgeError::UnsupportedChannelLayout(color) => {
                write!(
                    f,
                    "Unsupported channel layout {:?}: expected 8-bit RGB",
                    color
                )
            }
        }
    }
}

impl std::error::Error for EdgeError {}

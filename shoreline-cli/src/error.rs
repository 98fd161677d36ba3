//! CLI error type.

use std::fmt;

use shoreline::{CoordError, EdgeError};

/// Errors that can occur while running a CLI command.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file problem.
    Config(String),

    /// Coordinate conversion failed.
    Coord(CoordError),

    /// Water-edge extraction failed.
    Edge(EdgeError),

    /// Image decoding or encoding failed.
    Image(image::ImageError),

    /// JSON output serialization failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Coord(e) => write!(f, "Coordinate error: {}", e),
            CliError::Edge(e) => write!(f, "Extraction error: {}", e),
            CliError::Image(e) => write!(f, "Image error: {}", e),
            CliError::Serialize(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(_) => None,
            CliError::Coord(e) => Some(e),
            CliError::Edge(e) => Some(e),
            CliError::Image(e) => Some(e),
            CliError::Serialize(e) => Some(e),
        }
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coord(e)
    }
}

impl From<EdgeError> for CliError {
    fn from(e: EdgeError) -> Self {
        CliError::Edge(e)
    }
}

impl From<image::ImageError> for CliError {
    fn from(e: image::ImageError) -> Self {
        CliError::Image(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e)
    }
}

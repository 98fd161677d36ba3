//! Value types and errors for geographic/pixel coordinate conversion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pixel edge length of one map tile at the base projection scale.
pub const TILE_SIZE: f64 = 256.0;

/// Minimum supported zoom level.
pub const MIN_ZOOM: u8 = 0;

/// Maximum supported zoom level.
pub const MAX_ZOOM: u8 = 21;

/// Minimum valid longitude in degrees.
pub const MIN_LON: f64 = -180.0;

/// Maximum valid longitude in degrees.
pub const MAX_LON: f64 = 180.0;

/// Northern edge of the standard Web Mercator validity range, in degrees.
///
/// Latitudes beyond this still project without error (the projection is only
/// singular at ±90°), but round-trip precision is guaranteed within ±this.
pub const MERCATOR_MAX_LAT: f64 = 85.05112878;

/// A geographic point in degrees.
///
/// Latitude is positive north, longitude positive east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90, exclusive at the poles).
    pub lat: f64,
    /// Longitude in degrees (-180 to 180).
    pub lon: f64,
}

/// A point in the global Web Mercator pixel space at a given zoom level.
///
/// The pixel space spans `2^zoom * 256` pixels in each direction; the value
/// is meaningless without the zoom level it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

/// Geographic extent covered by a rendered viewport.
///
/// Derived and read-only: the northwest corner always has greater latitude
/// and lesser longitude than the southeast corner. Viewports crossing the
/// antimeridian are not normalized (known limitation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north_west: GeoPoint,
    pub south_east: GeoPoint,
}

impl BoundingBox {
    /// Northern edge in degrees.
    pub fn north(&self) -> f64 {
        self.north_west.lat
    }

    /// Western edge in degrees.
    pub fn west(&self) -> f64 {
        self.north_west.lon
    }

    /// Southern edge in degrees.
    pub fn south(&self) -> f64 {
        self.south_east.lat
    }

    /// Eastern edge in degrees.
    pub fn east(&self) -> f64 {
        self.south_east.lon
    }
}

/// Errors that can occur during coordinate conversion.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CoordError {
    /// Latitude at or beyond the projection singularity.
    #[error("invalid latitude {0}: projection is undefined at or beyond ±90°")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180].
    #[error("invalid longitude {0}: must be within [-180, 180]")]
    InvalidLongitude(f64),

    /// Zoom level above the supported maximum.
    #[error("invalid zoom level {0}: supported range is 0..=21")]
    InvalidZoom(u8),

    /// Zero-area viewport dimensions.
    #[error("invalid viewport dimensions {width}×{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edge_accessors() {
        let bounds = BoundingBox {
            north_west: GeoPoint {
                lat: 51.0,
                lon: -1.0,
            },
            south_east: GeoPoint { lat: 50.0, lon: 1.0 },
        };

        assert_eq!(bounds.north(), 51.0);
        assert_eq!(bounds.west(), -1.0);
        assert_eq!(bounds.south(), 50.0);
        assert_eq!(bounds.east(), 1.0);
    }

    #[test]
    fn test_coord_error_display_latitude() {
        let err = CoordError::InvalidLatitude(90.0);
        assert!(err.to_string().contains("invalid latitude 90"));
    }

    #[test]
    fn test_coord_error_display_dimensions() {
        let err = CoordError::InvalidDimensions {
            width: 0,
            height: 640,
        };
        assert!(err.to_string().contains("0×640"));
    }

    #[test]
    fn test_bounding_box_serializes_to_degree_fields() {
        let bounds = BoundingBox {
            north_west: GeoPoint {
                lat: -34.2,
                lon: 140.4,
            },
            south_east: GeoPoint {
                lat: -34.3,
                lon: 140.5,
            },
        };

        let json = serde_json::to_string(&bounds).expect("bounding box should serialize");
        assert!(json.contains("north_west"));
        assert!(json.contains("140.4"));
    }
}

//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and the global Web Mercator pixel space used by map tile providers, plus
//! the geographic bounding box of a fixed-size viewport centered on a point.
//!
//! The pixel space at zoom `z` spans `2^z * 256` pixels in each direction.
//! Longitude maps linearly; latitude maps through the spherical Mercator
//! transform and is therefore only singular at exactly ±90°.

mod types;

pub use types::{
    BoundingBox, CoordError, GeoPoint, PixelPoint, MAX_LON, MAX_ZOOM, MERCATOR_MAX_LAT, MIN_LON,
    MIN_ZOOM, TILE_SIZE,
};

use std::f64::consts::PI;

/// Converts geographic coordinates to global pixel coordinates.
///
/// # Arguments
///
/// * `point` - Geographic point; latitude must be strictly within (-90, 90)
/// * `zoom` - Zoom level (0 to 21)
///
/// # Returns
///
/// A `Result` containing the pixel coordinates or an error if inputs are
/// invalid. Validation happens before any projection math, so the function
/// never returns NaN or infinity for accepted inputs.
#[inline]
pub fn geo_to_pixel(point: GeoPoint, zoom: u8) -> Result<PixelPoint, CoordError> {
    // Validate inputs; the projection is singular at the poles
    if !point.lat.is_finite() || point.lat.abs() >= 90.0 {
        return Err(CoordError::InvalidLatitude(point.lat));
    }
    if !point.lon.is_finite() || !(MIN_LON..=MAX_LON).contains(&point.lon) {
        return Err(CoordError::InvalidLongitude(point.lon));
    }
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let scale = 2.0_f64.powi(zoom as i32) * TILE_SIZE;

    // Longitude maps linearly across the pixel space
    let x = (point.lon + 180.0) / 360.0 * scale;

    // Latitude maps through the Mercator transform; asinh(tan(lat)) is the
    // ln(tan + sec) form written without the intermediate overflow
    let lat_rad = point.lat.to_radians();
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * scale;

    Ok(PixelPoint { x, y })
}

/// Converts global pixel coordinates back to geographic coordinates.
///
/// Inverse of [`geo_to_pixel`] for the same zoom level: longitude is the
/// linear inverse, latitude is `atan(sinh(π(1 - 2y/scale)))` in degrees.
#[inline]
pub fn pixel_to_geo(point: PixelPoint, zoom: u8) -> Result<GeoPoint, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }

    let scale = 2.0_f64.powi(zoom as i32) * TILE_SIZE;

    let lon = point.x / scale * 360.0 - 180.0;
    let lat = (PI * (1.0 - 2.0 * point.y / scale)).sinh().atan().to_degrees();

    Ok(GeoPoint { lat, lon })
}

/// Computes the geographic bounding box of a viewport centered on a point.
///
/// Projects the center to pixel space, offsets by half the viewport size in
/// each direction, and inverse-projects the two corners. Pure function with
/// no side effects.
///
/// # Arguments
///
/// * `center` - Geographic center of the viewport
/// * `zoom` - Zoom level (0 to 21)
/// * `width` - Viewport width in pixels, must be positive
/// * `height` - Viewport height in pixels, must be positive
///
/// # Errors
///
/// Returns `CoordError::InvalidDimensions` for a zero width or height, and
/// propagates validation errors for the center point and zoom.
///
/// Viewports that extend past the antimeridian or the poles are not
/// normalized; corner longitudes may leave [-180, 180] in that case.
pub fn compute_bounds(
    center: GeoPoint,
    zoom: u8,
    width: u32,
    height: u32,
) -> Result<BoundingBox, CoordError> {
    if width == 0 || height == 0 {
        return Err(CoordError::InvalidDimensions { width, height });
    }

    let center_px = geo_to_pixel(center, zoom)?;
    let half_width = f64::from(width) / 2.0;
    let half_height = f64::from(height) / 2.0;

    let north_west = pixel_to_geo(
        PixelPoint {
            x: center_px.x - half_width,
            y: center_px.y - half_height,
        },
        zoom,
    )?;
    let south_east = pixel_to_geo(
        PixelPoint {
            x: center_px.x + half_width,
            y: center_px.y + half_height,
        },
        zoom,
    )?;

    Ok(BoundingBox {
        north_west,
        south_east,
    })
}

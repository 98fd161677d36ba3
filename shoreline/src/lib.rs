//! Shoreline - stylized water-edge overlays from web-map imagery
//!
//! This library provides the core functionality for turning a map viewport
//! into a transparent-background line drawing of the visible water/land
//! boundary. It is built from two independent, composable pieces:
//!
//! - [`coord`] - conversions between geographic coordinates and the global
//!   Web Mercator pixel space, and the bounding box a fixed-size viewport
//!   covers at a given zoom level.
//! - [`edge`] - the image pipeline that isolates water-colored pixels in a
//!   rendered raster and renders their boundary as an RGBA overlay.
//!
//! Fetching the rendered raster and presenting the overlay are caller
//! concerns; everything here is a pure, synchronous function over in-memory
//! values.
//!
//! ```
//! use shoreline::coord::{compute_bounds, GeoPoint};
//! use shoreline::edge::WaterEdgeExtractor;
//!
//! let center = GeoPoint { lat: -34.220359, lon: 140.4311491 };
//! let bounds = compute_bounds(center, 14, 640, 640)?;
//! assert!(bounds.north() > bounds.south());
//!
//! let _extractor = WaterEdgeExtractor::new();
//! # Ok::<(), shoreline::coord::CoordError>(())
//! ```

pub mod config;
pub mod coord;
pub mod edge;

pub use config::ConfigFile;
pub use coord::{compute_bounds, geo_to_pixel, pixel_to_geo, BoundingBox, CoordError, GeoPoint, PixelPoint};
pub use edge::{rgb8_from_dynamic, EdgeError, WaterEdgeExtractor};

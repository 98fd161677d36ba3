//! Water-edge extraction for rendered map rasters.
//!
//! This module turns a color map raster into a stylized boundary overlay:
//! pixels matching a reference water color (within a per-channel tolerance)
//! are isolated, the contour of that region is detected, and the contour is
//! rendered as a thin light-gray stroke on a transparent background.
//!
//! # Pipeline
//!
//! ```text
//! RgbImage ──► threshold ──► canny ──► dilate ──► median ──► border ──► RgbaImage
//!              (binary mask)  (edges)   (3×3)      (5×5)     suppression
//! ```
//!
//! The whole pipeline is pure and deterministic; decoding the input and
//! encoding the overlay belong to the caller.
//!
//! # Example
//!
//! ```no_run
//! use shoreline::edge::{rgb8_from_dynamic, WaterEdgeExtractor};
//!
//! let raster = rgb8_from_dynamic(image::open("viewport.png")?)?;
//! let overlay = WaterEdgeExtractor::new().extract(&raster)?;
//! overlay.save("overlay.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod extractor;
mod raster;

pub use error::EdgeError;
pub use extractor::{WaterEdgeExtractor, DEFAULT_TOLERANCE, DEFAULT_WATER_COLOR, EDGE_COLOR};
pub use raster::rgb8_from_dynamic;

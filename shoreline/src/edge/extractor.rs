//! Water-edge extraction pipeline.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::distance_transform::Norm;
use imageproc::edges::canny;
use imageproc::filter::median_filter;
use imageproc::morphology::dilate;
use tracing::debug;

use super::error::EdgeError;

/// Reference water color used when none is configured, in RGB order.
///
/// Calibrated for the default styling of common static-map renderings; other
/// map styles need their own reference color.
pub const DEFAULT_WATER_COLOR: Rgb<u8> = Rgb([249, 192, 156]);

/// Per-channel matching tolerance used when none is configured.
pub const DEFAULT_TOLERANCE: u8 = 20;

/// Color of the rendered boundary stroke, in RGB order.
pub const EDGE_COLOR: Rgb<u8> = Rgb([204, 204, 204]);

// Canny thresholds tuned for a strictly 0/255 mask
const CANNY_LOW: f32 = 100.0;
const CANNY_HIGH: f32 = 200.0;

// 5×5 median neighborhood
const MEDIAN_RADIUS: u32 = 2;

/// Extracts the water/land boundary of a rendered map raster as a thin
/// anti-aliased stroke on a transparent background.
///
/// The extractor is a pure value: it holds a reference water color and a
/// per-channel tolerance, and [`extract`](Self::extract) is deterministic
/// with no I/O or shared state. Both the input raster and the reference
/// color are interpreted in RGB channel order.
///
/// # Example
///
/// ```
/// use image::{Rgb, RgbImage};
/// use shoreline::edge::WaterEdgeExtractor;
///
/// let raster = RgbImage::from_pixel(640, 640, Rgb([249, 192, 156]));
/// let extractor = WaterEdgeExtractor::new().with_tolerance(20);
///
/// let overlay = extractor.extract(&raster)?;
/// assert_eq!(overlay.dimensions(), raster.dimensions());
/// # Ok::<(), shoreline::edge::EdgeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterEdgeExtractor {
    water_color: Rgb<u8>,
    tolerance: u8,
}

impl Default for WaterEdgeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterEdgeExtractor {
    /// Creates an extractor with the default water color and tolerance.
    pub fn new() -> Self {
        Self {
            water_color: DEFAULT_WATER_COLOR,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the reference water color (RGB order).
    pub fn with_water_color(mut self, color: Rgb<u8>) -> Self {
        self.water_color = color;
        self
    }

    /// Sets the per-channel matching tolerance.
    ///
    /// Tolerances that would push a channel bound past 0 or 255 are clamped
    /// silently; a tolerance of 0 requires an exact color match.
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The configured reference water color.
    pub fn water_color(&self) -> Rgb<u8> {
        self.water_color
    }

    /// The configured per-channel tolerance.
    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Runs the extraction pipeline on an 8-bit RGB raster.
    ///
    /// Stages, each feeding the next: color thresholding into a binary
    /// water mask, Canny edge detection, one 3×3 dilation to thicken the
    /// stroke, 5×5 median smoothing, border suppression, and RGBA overlay
    /// construction.
    ///
    /// The overlay has the input's exact dimensions. Every pixel is either
    /// fully transparent or [`EDGE_COLOR`] with full alpha. The outermost
    /// row and column on all four sides are always transparent, which keeps
    /// edge-detector artifacts from image-boundary clipping out of the
    /// rendered stroke.
    ///
    /// An all-water or all-land raster yields an all-transparent overlay.
    ///
    /// # Errors
    ///
    /// Returns `EdgeError::EmptyRaster` if the raster has zero area.
    pub fn extract(&self, image: &RgbImage) -> Result<RgbaImage, EdgeError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(EdgeError::EmptyRaster { width, height });
        }

        let mask = self.water_mask(image);
        let edges = canny(&mask, CANNY_LOW, CANNY_HIGH);
        let thickened = dilate(&edges, Norm::LInf, 1);
        let mut smoothed = median_filter(&thickened, MEDIAN_RADIUS, MEDIAN_RADIUS);
        suppress_border(&mut smoothed);

        let edge_pixels = smoothed.pixels().filter(|p| p.0[0] > 0).count();
        debug!(width, height, edge_pixels, "extracted water edge");

        Ok(to_overlay(&smoothed))
    }

    /// Thresholds the raster into a binary mask: 255 where every channel
    /// falls within the tolerance band around the water color, else 0.
    fn water_mask(&self, image: &RgbImage) -> GrayImage {
        let tolerance = i16::from(self.tolerance);
        let mut lower = [0u8; 3];
        let mut upper = [0u8; 3];
        for channel in 0..3 {
            let reference = i16::from(self.water_color.0[channel]);
            lower[channel] = (reference - tolerance).clamp(0, 255) as u8;
            upper[channel] = (reference + tolerance).clamp(0, 255) as u8;
        }

        GrayImage::from_fn(image.width(), image.height(), |x, y| {
            let pixel = image.get_pixel(x, y).0;
            let is_water = (0..3).all(|c| (lower[c]..=upper[c]).contains(&pixel[c]));
            Luma([if is_water { 255 } else { 0 }])
        })
    }
}

/// Zeroes the outermost row and column on all four sides.
fn suppress_border(edges: &mut GrayImage) {
    let (width, height) = edges.dimensions();
    for x in 0..width {
        edges.put_pixel(x, 0, Luma([0]));
        edges.put_pixel(x, height - 1, Luma([0]));
    }
    for y in 0..height {
        edges.put_pixel(0, y, Luma([0]));
        edges.put_pixel(width - 1, y, Luma([0]));
    }
}

/// Expands the single-channel edge image to an RGBA overlay: stroke color
/// with full alpha where an edge was detected, fully transparent elsewhere.
fn to_overlay(edges: &GrayImage) -> RgbaImage {
    let Rgb([r, g, b]) = EDGE_COLOR;
    RgbaImage::from_fn(edges.width(), edges.height(), |x, y| {
        if edges.get_pixel(x, y).0[0] > 0 {
            Rgba([r, g, b, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

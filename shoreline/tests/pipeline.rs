//! End-to-end tests for the viewport-to-overlay pipeline: bounding box
//! computation for a map viewport plus water-edge extraction on synthetic
//! rasters of the same size.

use image::{Rgb, RgbImage};
use shoreline::coord::{compute_bounds, geo_to_pixel, GeoPoint};
use shoreline::edge::{WaterEdgeExtractor, DEFAULT_WATER_COLOR};

const LAND: Rgb<u8> = Rgb([232, 232, 226]);

/// The reference viewport: Lake Bonney at zoom 14, 640×640.
const LAKE_BONNEY: GeoPoint = GeoPoint {
    lat: -34.220359,
    lon: 140.4311491,
};

#[test]
fn test_viewport_bounds_cover_the_center() {
    let bounds = compute_bounds(LAKE_BONNEY, 14, 640, 640).expect("valid viewport");

    assert!(bounds.north() > LAKE_BONNEY.lat && LAKE_BONNEY.lat > bounds.south());
    assert!(bounds.west() < LAKE_BONNEY.lon && LAKE_BONNEY.lon < bounds.east());

    // 640 pixels at zoom 14 is 2.5 tiles, a fraction of a degree
    assert!(bounds.east() - bounds.west() < 0.1);
    assert!(bounds.north() - bounds.south() < 0.1);
}

#[test]
fn test_viewport_corners_are_half_a_viewport_from_the_center() {
    let zoom = 14;
    let bounds = compute_bounds(LAKE_BONNEY, zoom, 640, 640).expect("valid viewport");

    let center_px = geo_to_pixel(LAKE_BONNEY, zoom).unwrap();
    let nw_px = geo_to_pixel(bounds.north_west, zoom).unwrap();
    let se_px = geo_to_pixel(bounds.south_east, zoom).unwrap();

    assert!((center_px.x - nw_px.x - 320.0).abs() < 1e-6);
    assert!((center_px.y - nw_px.y - 320.0).abs() < 1e-6);
    assert!((se_px.x - center_px.x - 320.0).abs() < 1e-6);
    assert!((se_px.y - center_px.y - 320.0).abs() < 1e-6);
}

#[test]
fn test_half_water_viewport_draws_a_vertical_shoreline() {
    // Left half water, right half land, split at column 320
    let raster = RgbImage::from_fn(640, 640, |x, _| {
        if x < 320 {
            DEFAULT_WATER_COLOR
        } else {
            Rgb([0, 0, 0])
        }
    });

    let overlay = WaterEdgeExtractor::new().extract(&raster).expect("valid raster");
    assert_eq!(overlay.dimensions(), (640, 640));

    let mut stroke_columns = Vec::new();
    for (x, y, pixel) in overlay.enumerate_pixels() {
        if pixel.0[3] > 0 {
            stroke_columns.push(x);
            assert_eq!(pixel.0, [204, 204, 204, 255]);
            assert!(y > 0 && y < 639, "Stroke on a suppressed border row");
            assert!(x > 0 && x < 639, "Stroke on a suppressed border column");
        }
    }

    assert!(!stroke_columns.is_empty(), "Shoreline should be drawn");
    for &x in &stroke_columns {
        assert!(
            (312..=328).contains(&x),
            "Stroke column {} is far from the split at 320",
            x
        );
    }
}

#[test]
fn test_inland_lake_draws_a_closed_ring() {
    // A rectangular lake surrounded by land
    let (left, right, top, bottom) = (100u32, 220u32, 80u32, 180u32);
    let raster = RgbImage::from_fn(320, 260, |x, y| {
        if (left..right).contains(&x) && (top..bottom).contains(&y) {
            DEFAULT_WATER_COLOR
        } else {
            LAND
        }
    });

    let overlay = WaterEdgeExtractor::new().extract(&raster).expect("valid raster");
    let stroke: Vec<(u32, u32)> = overlay
        .enumerate_pixels()
        .filter(|(_, _, p)| p.0[3] > 0)
        .map(|(x, y, _)| (x, y))
        .collect();

    assert!(!stroke.is_empty(), "Lake outline should be drawn");

    // Every stroke pixel lies near the lake perimeter...
    for &(x, y) in &stroke {
        let near_vertical_side = (x.abs_diff(left) <= 6 || x.abs_diff(right) <= 6)
            && y + 6 >= top
            && y <= bottom + 6;
        let near_horizontal_side = (y.abs_diff(top) <= 6 || y.abs_diff(bottom) <= 6)
            && x + 6 >= left
            && x <= right + 6;
        assert!(
            near_vertical_side || near_horizontal_side,
            "Stroke pixel ({}, {}) is not on the lake perimeter",
            x,
            y
        );
    }

    // ...and all four sides are present
    let mid_y = (top + bottom) / 2;
    let mid_x = (left + right) / 2;
    assert!(stroke.iter().any(|&(x, y)| x.abs_diff(left) <= 6 && y == mid_y));
    assert!(stroke.iter().any(|&(x, y)| x.abs_diff(right) <= 6 && y == mid_y));
    assert!(stroke.iter().any(|&(x, y)| y.abs_diff(top) <= 6 && x == mid_x));
    assert!(stroke.iter().any(|&(x, y)| y.abs_diff(bottom) <= 6 && x == mid_x));

    // The lake interior stays transparent
    assert_eq!(overlay.get_pixel(mid_x, mid_y).0[3], 0);
}

#[test]
fn test_overlay_survives_png_round_trip_unchanged() {
    use std::io::Cursor;

    let raster = RgbImage::from_fn(128, 128, |x, _| {
        if x < 64 {
            DEFAULT_WATER_COLOR
        } else {
            LAND
        }
    });
    let overlay = WaterEdgeExtractor::new().extract(&raster).expect("valid raster");

    // Lossless encode/decode must pass pixel values through unchanged
    let mut encoded = Vec::new();
    overlay
        .write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
        .expect("png encode");
    let decoded = image::load_from_memory(&encoded)
        .expect("png decode")
        .to_rgba8();

    assert_eq!(decoded.as_raw(), overlay.as_raw());
}

//! `bounds` command: geographic extent of a map viewport.

use clap::Args;
use shoreline::config::ConfigFile;
use shoreline::coord::{compute_bounds, BoundingBox, GeoPoint};

use crate::commands::common;
use crate::error::CliError;

/// Compute the geographic bounding box of a viewport centered on a point.
#[derive(Debug, Args)]
pub struct BoundsArgs {
    /// Latitude of the viewport center, in degrees.
    #[arg(allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the viewport center, in degrees.
    #[arg(allow_negative_numbers = true)]
    pub lon: f64,

    /// Zoom level (0-21).
    pub zoom: u8,

    /// Viewport width in pixels (defaults to config, then 640).
    #[arg(long)]
    pub width: Option<u32>,

    /// Viewport height in pixels (defaults to config, then 640).
    #[arg(long)]
    pub height: Option<u32>,

    /// Print the bounding box as JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: BoundsArgs, config: &ConfigFile) -> Result<(), CliError> {
    let (width, height) = common::resolve_viewport(args.width, args.height, config);
    let center = GeoPoint {
        lat: args.lat,
        lon: args.lon,
    };

    let bounds = compute_bounds(center, args.zoom, width, height)?;
    tracing::debug!(
        zoom = args.zoom,
        width,
        height,
        "computed viewport bounds"
    );

    print!("{}", render(&bounds, args.json)?);
    Ok(())
}

fn render(bounds: &BoundingBox, json: bool) -> Result<String, CliError> {
    if json {
        let mut out = serde_json::to_string_pretty(bounds)?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(format!(
            "north: {:.6}\nwest:  {:.6}\nsouth: {:.6}\neast:  {:.6}\n",
            bounds.north(),
            bounds.west(),
            bounds.south(),
            bounds.east()
        ))
    }
}

//! `extract` command: water-edge overlay from a rendered map image.

use std::path::{Path, PathBuf};

use clap::Args;
use image::Rgb;
use shoreline::config::{parse_color, ConfigFile};
use shoreline::rgb8_from_dynamic;

use crate::commands::common;
use crate::error::CliError;

/// Extract the water/land boundary of a rendered map image as a
/// transparent-background PNG overlay.
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input image; must decode to 8-bit RGB.
    pub input: PathBuf,

    /// Output PNG path.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Reference water color as "r,g,b" (defaults to config, then 249,192,156).
    #[arg(long, value_parser = parse_color)]
    pub water_color: Option<Rgb<u8>>,

    /// Per-channel matching tolerance (defaults to config, then 20).
    #[arg(long)]
    pub tolerance: Option<u8>,
}

pub fn run(args: ExtractArgs, config: &ConfigFile) -> Result<(), CliError> {
    let extractor = common::resolve_extractor(args.water_color, args.tolerance, config);
    let overlay = extract_file(&args.input, &extractor)?;

    overlay.save(&args.output)?;
    println!(
        "Wrote {}×{} overlay to {}",
        overlay.width(),
        overlay.height(),
        args.output.display()
    );
    Ok(())
}

fn extract_file(
    input: &Path,
    extractor: &shoreline::WaterEdgeExtractor,
) -> Result<image::RgbaImage, CliError> {
    let decoded = image::open(input)?;
    let raster = rgb8_from_dynamic(decoded)?;
    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        input = %input.display(),
        "decoded input raster"
    );
    Ok(extractor.extract(&raster)?)
}

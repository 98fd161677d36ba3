//! Common resolution helpers shared across CLI commands.
//!
//! CLI flags take precedence, then the config file, then built-in defaults.

use std::path::Path;

use image::Rgb;
use shoreline::config::ConfigFile;
use shoreline::WaterEdgeExtractor;

use crate::error::CliError;

/// Load the config file from an explicit path or the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let result = match path {
        Some(path) => ConfigFile::load(path),
        None => ConfigFile::load_default(),
    };
    result.map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve extractor settings from CLI flags and config.
pub fn resolve_extractor(
    cli_water_color: Option<Rgb<u8>>,
    cli_tolerance: Option<u8>,
    config: &ConfigFile,
) -> WaterEdgeExtractor {
    WaterEdgeExtractor::new()
        .with_water_color(cli_water_color.unwrap_or(config.extract.water_color))
        .with_tolerance(cli_tolerance.unwrap_or(config.extract.tolerance))
}

/// Resolve viewport dimensions from CLI flags and config.
pub fn resolve_viewport(
    cli_width: Option<u32>,
    cli_height: Option<u32>,
    config: &ConfigFile,
) -> (u32, u32) {
    (
        cli_width.unwrap_or(config.viewport.width),
        cli_height.unwrap_or(config.viewport.height),
    )
}

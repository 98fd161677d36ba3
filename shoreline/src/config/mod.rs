//! Configuration file support.
//!
//! Reads an INI config file supplying defaults for the extraction
//! parameters and the viewport size, so a calibrated water color for a
//! particular map style only has to be written down once:
//!
//! ```ini
//! [extract]
//! water_color = 249,192,156
//! tolerance = 20
//!
//! [viewport]
//! width = 640
//! height = 640
//! ```
//!
//! The default location is `shoreline/config.ini` under the platform config
//! directory. A missing file or missing keys fall back to built-in
//! defaults; malformed values are an error rather than being ignored.

use std::fmt;
use std::path::{Path, PathBuf};

use image::Rgb;
use ini::Ini;

use crate::edge::{DEFAULT_TOLERANCE, DEFAULT_WATER_COLOR};

/// Default viewport width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 640;

/// Default viewport height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 640;

/// Parsed configuration file with defaults applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigFile {
    pub extract: ExtractSettings,
    pub viewport: ViewportSettings,
}

/// Settings for the `[extract]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSettings {
    /// Reference water color in RGB order.
    pub water_color: Rgb<u8>,
    /// Per-channel matching tolerance.
    pub tolerance: u8,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            water_color: DEFAULT_WATER_COLOR,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Settings for the `[viewport]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            extract: ExtractSettings::default(),
            viewport: ViewportSettings::default(),
        }
    }
}

/// Errors that can occur while loading the config file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read or parsed as INI.
    Parse(String),
    /// A key held a value that does not parse.
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Failed to load config file: {}", msg),
            ConfigError::InvalidValue {
                section,
                key,
                value,
            } => {
                write!(f, "Invalid config value [{}] {} = {}", section, key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigFile {
    /// Default config file location under the platform config directory.
    ///
    /// Returns `None` when the platform has no config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shoreline").join("config.ini"))
    }

    /// Loads the config file from its default location.
    ///
    /// A missing file is not an error; built-in defaults apply.
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads a config file from an explicit path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("extract")) {
            if let Some(value) = section.get("water_color") {
                config.extract.water_color =
                    parse_color(value).map_err(|_| ConfigError::InvalidValue {
                        section: "extract",
                        key: "water_color",
                        value: value.to_string(),
                    })?;
            }
            if let Some(value) = section.get("tolerance") {
                config.extract.tolerance =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        section: "extract",
                        key: "tolerance",
                        value: value.to_string(),
                    })?;
            }
        }

        if let Some(section) = ini.section(Some("viewport")) {
            if let Some(value) = section.get("width") {
                config.viewport.width = parse_dimension("viewport", "width", value)?;
            }
            if let Some(value) = section.get("height") {
                config.viewport.height = parse_dimension("viewport", "height", value)?;
            }
        }

        Ok(config)
    }
}

fn parse_dimension(
    section: &'static str,
    key: &'static str,
    value: &str,
) -> Result<u32, ConfigError> {
    match value.parse::<u32>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::InvalidValue {
            section,
            key,
            value: value.to_string(),
        }),
    }
}

/// Parses an `r,g,b` color triple.
///
/// Shared between the config file and CLI flags, and usable directly as a
/// clap value parser.
pub fn parse_color(value: &str) -> Result<Rgb<u8>, String> {
    let mut channels = value.split(',').map(|part| part.trim().parse::<u8>());

    let mut next = || {
        channels
            .next()
            .and_then(|parsed| parsed.ok())
            .ok_or_else(|| format!("expected color as r,g,b with channels 0-255, got '{}'", value))
    };

    let color = Rgb([next()?, next()?, next()?]);
    if channels.next().is_some() {
        return Err(format!(
            "expected color as r,g,b with channels 0-255, got '{}'",
            value
        ));
    }
    Ok(color)
}

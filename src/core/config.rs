//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.gallery/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::core::catalog::Filter;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub tui: TuiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// File path or http(s) URL of the artworks document.
    pub catalog: Option<String>,
    pub default_filter: Option<Filter>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CarouselConfig {
    pub interval_ms: Option<u64>,
}

/// Terminal cell size in gesture distance units.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TuiConfig {
    pub cell_width: Option<f64>,
    pub cell_height: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CATALOG: &str = "artworks.json";
pub const DEFAULT_INTERVAL_MS: u64 = 8000;
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;
pub const DEFAULT_CELL_HEIGHT: f64 = 16.0;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub catalog: String,
    pub filter: Filter,
    pub auto_advance: Duration,
    pub cell_width: f64,
    pub cell_height: f64,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.gallery/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".gallery").join("config.toml"))
}

/// Load config from `~/.gallery/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GalleryConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GalleryConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GalleryConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GalleryConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: GalleryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Gallery Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# catalog = "artworks.json"          # Path or http(s) URL. Or set GALLERY_CATALOG
# default_filter = "all"             # "all", "available", "reserved", "sold"

# [carousel]
# interval_ms = 8000                 # Auto-advance period

# [tui]
# cell_width = 8.0                   # Terminal cell size in gesture units;
# cell_height = 16.0                 # a swipe needs 50 units of travel
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_catalog` and `cli_filter` are from CLI flags (None = not specified).
pub fn resolve(
    config: &GalleryConfig,
    cli_catalog: Option<&str>,
    cli_filter: Option<Filter>,
) -> ResolvedConfig {
    // Catalog: CLI → env → config → default
    let catalog = cli_catalog
        .map(|s| s.to_string())
        .or_else(|| std::env::var("GALLERY_CATALOG").ok())
        .or_else(|| config.general.catalog.clone())
        .unwrap_or_else(|| DEFAULT_CATALOG.to_string());

    // Filter: CLI → env → config → default
    let filter = cli_filter
        .or_else(|| {
            std::env::var("GALLERY_FILTER")
                .ok()
                .and_then(|value| match Filter::from_str(&value, true) {
                    Ok(filter) => Some(filter),
                    Err(e) => {
                        warn!("Ignoring GALLERY_FILTER: {}", e);
                        None
                    }
                })
        })
        .or(config.general.default_filter)
        .unwrap_or_default();

    let interval_ms = match config.carousel.interval_ms {
        Some(0) => {
            warn!("carousel.interval_ms must be positive, using {}", DEFAULT_INTERVAL_MS);
            DEFAULT_INTERVAL_MS
        }
        Some(ms) => ms,
        None => DEFAULT_INTERVAL_MS,
    };

    ResolvedConfig {
        catalog,
        filter,
        auto_advance: Duration::from_millis(interval_ms),
        cell_width: positive_or(config.tui.cell_width, DEFAULT_CELL_WIDTH),
        cell_height: positive_or(config.tui.cell_height, DEFAULT_CELL_HEIGHT),
    }
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(default)
}

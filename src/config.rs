//! Configuration for the grid, palette and benchmark repetitions.
//!
//! Loaded from YAML. Every field has a default, so a partial file (or none at
//! all) is valid. Command-line flags are applied on top by the binary.

use crate::benchmark::{Repetitions, CIRCLE_REPETITIONS, FILL_REPETITIONS, LINE_REPETITIONS};
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::GridBounds;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Grid extents and on-screen cell size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Number of rows.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Side of one cell in output pixels.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
}

fn default_width() -> u32 {
    96
}
fn default_height() -> u32 {
    54
}
fn default_cell_size() -> u32 {
    20
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cell_size: default_cell_size(),
        }
    }
}

impl GridConfig {
    /// Addressable grid extents.
    #[must_use]
    pub const fn bounds(&self) -> GridBounds {
        GridBounds::new(self.width, self.height)
    }
}

/// Colors used when exporting a rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Filled interior cells.
    #[serde(default = "default_fill")]
    pub fill: Rgba,

    /// Rasterized polygon outline used by boundary fill.
    #[serde(default = "default_boundary")]
    pub boundary: Rgba,

    /// Polygon edges drawn over the fill.
    #[serde(default = "default_polygon")]
    pub polygon: Rgba,

    /// Empty cells.
    #[serde(default = "default_background")]
    pub background: Rgba,

    /// Rasterized line segments.
    #[serde(default = "default_line")]
    pub line: Rgba,

    /// Rasterized circles.
    #[serde(default = "default_circle")]
    pub circle: Rgba,
}

fn default_fill() -> Rgba {
    Rgba::rgb(0, 255, 100)
}
fn default_boundary() -> Rgba {
    Rgba::rgb(255, 0, 0)
}
fn default_polygon() -> Rgba {
    Rgba::rgb(255, 255, 255)
}
fn default_background() -> Rgba {
    Rgba::rgb(20, 20, 20)
}
fn default_line() -> Rgba {
    Rgba::rgb(255, 0, 0)
}
fn default_circle() -> Rgba {
    Rgba::rgb(50, 89, 210)
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            fill: default_fill(),
            boundary: default_boundary(),
            polygon: default_polygon(),
            background: default_background(),
            line: default_line(),
            circle: default_circle(),
        }
    }
}

/// Timed repetitions per strategy family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Repetitions of each line strategy.
    #[serde(default = "default_line_repetitions")]
    pub line_repetitions: usize,

    /// Repetitions of each circle strategy.
    #[serde(default = "default_circle_repetitions")]
    pub circle_repetitions: usize,

    /// Repetitions of each fill strategy.
    #[serde(default = "default_fill_repetitions")]
    pub fill_repetitions: usize,
}

fn default_line_repetitions() -> usize {
    LINE_REPETITIONS
}
fn default_circle_repetitions() -> usize {
    CIRCLE_REPETITIONS
}
fn default_fill_repetitions() -> usize {
    FILL_REPETITIONS
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            line_repetitions: default_line_repetitions(),
            circle_repetitions: default_circle_repetitions(),
            fill_repetitions: default_fill_repetitions(),
        }
    }
}

impl BenchmarkConfig {
    /// Repetition counts for the harness.
    #[must_use]
    pub const fn repetitions(&self) -> Repetitions {
        Repetitions {
            line: self.line_repetitions,
            circle: self.circle_repetitions,
            fill: self.fill_repetitions,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Grid settings.
    #[serde(default)]
    pub grid: GridConfig,

    /// Palette.
    #[serde(default)]
    pub colors: ColorConfig,

    /// Benchmark repetitions.
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
}

impl Config {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config_dir>/trueno-raster/config.yaml`, when the platform has a
    /// config directory.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trueno-raster").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file cannot be read, or
    /// [`Error::ConfigParse`] if it is not valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration, falling back to defaults when the file is
    /// missing or invalid.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Serializes the configuration back to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }
}

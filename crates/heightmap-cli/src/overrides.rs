//! Config loading with command-line overrides.
//!
//! A JSON config file (optional) provides the base; any flag given on the
//! command line replaces the matching field.

use anyhow::{Context, Result};
use heightmap_core::{AxisMapping, ConfigError, HeightmapConfig, OffsetMode, PermutationMode};
use std::path::Path;

/// Flag values that override config fields. `None` keeps the base value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub octave: Option<f64>,
    pub table_size: Option<usize>,
    pub permutation: Option<String>,
    pub offsets: Option<String>,
    pub axes: Option<String>,
    pub frequency: Option<f64>,
    pub seed: Option<u32>,
}

impl ConfigOverrides {
    /// Replace every field of `config` that has an override.
    pub fn apply(&self, mut config: HeightmapConfig) -> Result<HeightmapConfig, ConfigError> {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(octave) = self.octave {
            config.octave = octave;
        }
        if let Some(table_size) = self.table_size {
            config.table_size = table_size;
        }
        if let Some(permutation) = &self.permutation {
            config.permutation = permutation.parse::<PermutationMode>()?;
        }
        if let Some(offsets) = &self.offsets {
            config.offsets = offsets.parse::<OffsetMode>()?;
        }
        if let Some(axes) = &self.axes {
            config.axes = axes.parse::<AxisMapping>()?;
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Load the base config (file or defaults), apply overrides, and validate.
pub fn load_config(config_path: Option<&str>, overrides: &ConfigOverrides) -> Result<HeightmapConfig> {
    let base = match config_path {
        Some(path) => HeightmapConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => HeightmapConfig::default(),
    };

    let config = overrides.apply(base)?;
    config.validate()?;
    Ok(config)
}

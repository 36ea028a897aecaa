//! Heightmap generation parameters.
//!
//! Loaded from JSON, every field optional; missing fields take the legacy
//! defaults (300 x 300 pixels, 256-entry table, octave 0.45).

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::{AxisMapping, GridSampling};
use crate::noise::{OffsetMode, PermutationMode, MIN_TABLE_LEN};

/// Default output width in pixels.
pub const DEFAULT_WIDTH: u32 = 300;
/// Default output height in pixels.
pub const DEFAULT_HEIGHT: u32 = 300;
/// Default z slice.
pub const DEFAULT_OCTAVE: f64 = 0.45;

/// Errors from loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unknown {kind} '{value}', expected one of: {expected}")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Everything the pipeline needs to produce one heightmap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeightmapConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Fixed z coordinate of the sampled slice.
    pub octave: f64,
    /// Permutation table entries.
    pub table_size: usize,
    pub permutation: PermutationMode,
    pub offsets: OffsetMode,
    pub axes: AxisMapping,
    /// Multiplier on normalized pixel coordinates; 1.0 spans one lattice cell.
    pub frequency: f64,
    /// RNG seed for the permutation table. `None` lets the caller pick one.
    pub seed: Option<u32>,
}

impl Default for HeightmapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            octave: DEFAULT_OCTAVE,
            table_size: MIN_TABLE_LEN,
            permutation: PermutationMode::default(),
            offsets: OffsetMode::default(),
            axes: AxisMapping::default(),
            frequency: 1.0,
            seed: None,
        }
    }
}

impl HeightmapConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check every field before any sampling happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidParameter(format!(
                "resolution must be at least 1x1, got [{}, {}]",
                self.width, self.height
            )));
        }

        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| ConfigError::InvalidParameter("resolution is too large".to_string()))?;

        if self.table_size < MIN_TABLE_LEN {
            return Err(ConfigError::InvalidParameter(format!(
                "table_size must be at least {}, got {}",
                MIN_TABLE_LEN, self.table_size
            )));
        }

        validate_finite("octave", self.octave)?;
        validate_finite("frequency", self.frequency)?;

        Ok(())
    }

    /// Per-cell sampling parameters.
    pub fn sampling(&self) -> GridSampling {
        GridSampling {
            octave: self.octave,
            frequency: self.frequency,
            axes: self.axes,
        }
    }
}

fn validate_finite(name: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

impl FromStr for PermutationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "with_replacement" | "with-replacement" => Ok(PermutationMode::WithReplacement),
            "shuffled" => Ok(PermutationMode::Shuffled),
            other => Err(ConfigError::UnknownVariant {
                kind: "permutation mode",
                value: other.to_string(),
                expected: "with_replacement, shuffled",
            }),
        }
    }
}

impl FromStr for OffsetMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "corrected" => Ok(OffsetMode::Corrected),
            "reference" => Ok(OffsetMode::Reference),
            other => Err(ConfigError::UnknownVariant {
                kind: "offset mode",
                value: other.to_string(),
                expected: "corrected, reference",
            }),
        }
    }
}

impl FromStr for AxisMapping {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reference" => Ok(AxisMapping::Reference),
            "direct" => Ok(AxisMapping::Direct),
            other => Err(ConfigError::UnknownVariant {
                kind: "axis mapping",
                value: other.to_string(),
                expected: "reference, direct",
            }),
        }
    }
}

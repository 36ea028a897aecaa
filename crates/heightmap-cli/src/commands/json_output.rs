//! JSON output types for machine-readable CLI output.

use heightmap_core::{HeightmapConfig, HeightmapResult};
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
pub mod error_codes {
    /// Config file could not be read or parsed, or a flag was invalid
    pub const INVALID_CONFIG: &str = "CLI_001";
    /// Generation or encoding failed
    pub const GENERATION_ERROR: &str = "CLI_002";
    /// Output file could not be written
    pub const WRITE_ERROR: &str = "CLI_003";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

/// Sample statistics of a generated grid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SampleStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Output of `generate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

/// Details of a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResult {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub seed: u32,
    /// BLAKE3 hash of the PNG bytes
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SampleStats>,
    /// Effective config, with the seed resolved
    pub config: HeightmapConfig,
    pub duration_ms: u64,
}

impl GenerateOutput {
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: Vec::new(),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }
}

impl GenerateResult {
    pub fn from_heightmap(
        path: &str,
        config: &HeightmapConfig,
        heightmap: &HeightmapResult,
        duration_ms: u64,
    ) -> Self {
        let stats = heightmap
            .grid
            .stats()
            .map(|(min, max, mean)| SampleStats { min, max, mean });
        Self {
            path: path.to_string(),
            width: heightmap.grid.width,
            height: heightmap.grid.height,
            seed: heightmap.seed,
            hash: heightmap.hash.clone(),
            stats,
            config: HeightmapConfig {
                seed: Some(heightmap.seed),
                ..config.clone()
            },
            duration_ms,
        }
    }
}

/// Output of `sample --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleOutput {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub seed: u32,
    pub value: f64,
}

/// Output of `table --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableOutput {
    pub seed: u32,
    pub values: Vec<u8>,
}

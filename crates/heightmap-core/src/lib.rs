//! Perlin Heightmap Core
//!
//! Samples 3D improved gradient noise over a pixel grid and encodes the
//! result as a grayscale PNG heightmap.
//!
//! # Features
//!
//! - **Permutation Table**: with-replacement or shuffled, built from an explicit seeded RNG
//! - **Noise Evaluator**: Perlin's improved noise with fade, gradient, and trilinear lerp
//! - **Height Grid**: parallel per-pixel sampling into normalized [0, 1] values
//! - **Deterministic PNG**: fixed compression settings for byte-identical output
//!
//! # Example
//!
//! ```no_run
//! use heightmap_core::{generate_heightmap, save_heightmap, HeightmapConfig};
//! use std::path::Path;
//!
//! let config = HeightmapConfig {
//!     seed: Some(42),
//!     ..HeightmapConfig::default()
//! };
//!
//! let result = generate_heightmap(&config).unwrap();
//! save_heightmap(&result, Path::new("img.png")).unwrap();
//! ```
//!
//! # Determinism
//!
//! Same config + same seed = byte-identical PNG. The noise evaluator is a
//! pure function of its inputs and the read-only table.

pub mod config;
pub mod generate;
pub mod grid;
pub mod noise;
pub mod png;
pub mod rng;

// Re-export main types for convenience
pub use config::{ConfigError, HeightmapConfig};
pub use generate::{build_noise, generate_heightmap, populate_grid, save_heightmap, GenerateError, HeightmapResult};
pub use grid::{AxisMapping, GridSampling, HeightGrid};
pub use noise::{evaluate, fade, gradient, lerp, ImprovedNoise, Noise3D, NoiseError, OffsetMode, PermutationMode, PermutationTable};
pub use png::{PngConfig, PngError};
pub use rng::DeterministicRng;

//! Main entry point for heightmap generation.
//!
//! Config in, permutation table built from an explicit RNG, grid populated,
//! PNG encoded.

use std::path::Path;

use thiserror::Error;

use crate::config::{ConfigError, HeightmapConfig};
use crate::grid::HeightGrid;
use crate::noise::{ImprovedNoise, NoiseError, PermutationTable};
use crate::png::{self, PngConfig, PngError};
use crate::rng::DeterministicRng;

/// Errors from heightmap generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Noise error: {0}")]
    Noise(#[from] NoiseError),
}

/// A generated heightmap and the encoded image.
#[derive(Debug)]
pub struct HeightmapResult {
    /// Seed the permutation table was built from.
    pub seed: u32,
    /// Normalized samples.
    pub grid: HeightGrid,
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
    /// BLAKE3 hash of the PNG bytes.
    pub hash: String,
}

/// Build a permutation table and noise generator for `config`.
pub fn build_noise(config: &HeightmapConfig, seed: u32) -> Result<ImprovedNoise, GenerateError> {
    let mut rng = DeterministicRng::new(seed);
    let table = PermutationTable::build(config.table_size, &mut rng, config.permutation);
    Ok(ImprovedNoise::new(table)?.with_offsets(config.offsets))
}

/// Sample the grid for `config` using an already-built noise generator.
pub fn populate_grid(config: &HeightmapConfig, noise: &ImprovedNoise) -> Result<HeightGrid, GenerateError> {
    config.validate()?;
    Ok(HeightGrid::populate(
        config.width,
        config.height,
        noise,
        config.sampling(),
    ))
}

/// Generate a heightmap. Without a seed in `config`, one is taken from the
/// system clock and returned in the result.
pub fn generate_heightmap(config: &HeightmapConfig) -> Result<HeightmapResult, GenerateError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(DeterministicRng::seed_from_clock);
    let noise = build_noise(config, seed)?;
    let grid = populate_grid(config, &noise)?;
    let (png, hash) = png::write_heightmap_to_vec_with_hash(&grid, &PngConfig::default())?;

    Ok(HeightmapResult {
        seed,
        grid,
        png,
        hash,
    })
}

/// Write the encoded image to `path`, creating parent directories.
pub fn save_heightmap(result: &HeightmapResult, path: &Path) -> Result<(), GenerateError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &result.png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::AxisMapping;
    use crate::noise::{Noise3D, PermutationMode};

    fn small_config(seed: u32) -> HeightmapConfig {
        HeightmapConfig {
            width: 32,
            height: 24,
            seed: Some(seed),
            ..HeightmapConfig::default()
        }
    }

    #[test]
    fn test_same_seed_same_image() {
        let a = generate_heightmap(&small_config(42)).unwrap();
        let b = generate_heightmap(&small_config(42)).unwrap();
        assert_eq!(a.seed, 42);
        assert_eq!(a.hash, b.hash);
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_different_seed_different_image() {
        let a = generate_heightmap(&small_config(1)).unwrap();
        let b = generate_heightmap(&small_config(2)).unwrap();
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn test_grid_matches_requested_dimensions() {
        let result = generate_heightmap(&small_config(3)).unwrap();
        assert_eq!((result.grid.width, result.grid.height), (32, 24));
        assert_eq!(result.grid.data.len(), 32 * 24);
        assert!(result.grid.data.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_invalid_config_fails_before_sampling() {
        let config = HeightmapConfig {
            width: 0,
            ..small_config(1)
        };
        let err = generate_heightmap(&config).unwrap_err();
        assert!(matches!(err, GenerateError::Config(ConfigError::InvalidParameter(_))));
    }

    #[test]
    fn test_short_table_surfaces_noise_error() {
        let config = HeightmapConfig {
            table_size: 100,
            ..small_config(1)
        };
        let err = build_noise(&config, 1).unwrap_err();
        assert!(matches!(err, GenerateError::Noise(NoiseError::TableTooShort { len: 100, .. })));
    }

    #[test]
    fn test_lattice_frequency_gives_uniform_grid() {
        // frequency == size puts every sample on a lattice point.
        let config = HeightmapConfig {
            width: 16,
            height: 16,
            octave: 0.0,
            frequency: 16.0,
            axes: AxisMapping::Direct,
            seed: Some(5),
            ..HeightmapConfig::default()
        };
        let result = generate_heightmap(&config).unwrap();
        assert!(result.grid.data.iter().all(|&v| v == 0.5));
    }

    #[test]
    fn test_build_noise_respects_modes() {
        let config = HeightmapConfig {
            table_size: 512,
            permutation: PermutationMode::Shuffled,
            ..small_config(9)
        };
        let noise = build_noise(&config, 9).unwrap();
        assert_eq!(noise.table().len(), 512);
        assert_eq!(noise.offsets(), config.offsets);
        assert!((0.0..=1.0).contains(&noise.sample_01(0.3, 0.6, 0.45)));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("img.png");
        let result = generate_heightmap(&small_config(4)).unwrap();
        save_heightmap(&result, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), result.png);
    }

    #[test]
    fn test_save_into_file_parent_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = generate_heightmap(&small_config(4)).unwrap();
        let err = save_heightmap(&result, &blocker.join("img.png")).unwrap_err();
        assert!(matches!(err, GenerateError::Io(_)));
    }
}

//! CLI argument definitions for the `heightmap` command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use heightmap_cli::overrides::ConfigOverrides;

/// Heightmap - Perlin noise heightmap generator
#[derive(Parser)]
#[command(name = "heightmap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a heightmap PNG
    Generate {
        /// Path of the PNG to write
        #[arg(short, long, default_value = "img.png")]
        out: String,

        #[command(flatten)]
        noise: NoiseArgs,

        /// Output width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Output height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Pixel-to-noise mapping (reference, direct)
        #[arg(long, value_parser = ["reference", "direct"])]
        axes: Option<String>,

        /// Multiplier on normalized pixel coordinates
        #[arg(long)]
        frequency: Option<f64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Evaluate the noise at one point
    Sample {
        /// Noise-space x coordinate
        #[arg(short, long, allow_negative_numbers = true)]
        x: f64,

        /// Noise-space y coordinate
        #[arg(short, long, allow_negative_numbers = true)]
        y: f64,

        /// Noise-space z coordinate (default: the octave)
        #[arg(short, long, allow_negative_numbers = true)]
        z: Option<f64>,

        #[command(flatten)]
        noise: NoiseArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the permutation table for a seed
    Table {
        #[command(flatten)]
        noise: NoiseArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Options shared by every command that builds a noise generator.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct NoiseArgs {
    /// JSON config file; flags override its values
    #[arg(short, long)]
    pub config: Option<String>,

    /// RNG seed for the permutation table (default: from the clock)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Fixed z slice of the noise
    #[arg(long, allow_negative_numbers = true)]
    pub octave: Option<f64>,

    /// Number of permutation table entries (at least 256)
    #[arg(long)]
    pub table_size: Option<usize>,

    /// How table entries are drawn (with-replacement, shuffled)
    #[arg(long, value_parser = ["with-replacement", "with_replacement", "shuffled"])]
    pub permutation: Option<String>,

    /// Fractional offset mode (corrected, reference)
    #[arg(long, value_parser = ["corrected", "reference"])]
    pub offsets: Option<String>,
}

impl NoiseArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            octave: self.octave,
            table_size: self.table_size,
            permutation: self.permutation.clone(),
            offsets: self.offsets.clone(),
            seed: self.seed,
            ..ConfigOverrides::default()
        }
    }
}

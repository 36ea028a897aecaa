//! Sample command implementation
//!
//! Evaluates the noise at a single point.

use anyhow::{Context, Result};
use colored::Colorize;
use heightmap_core::{build_noise, DeterministicRng};
use std::process::ExitCode;

use super::json_output::SampleOutput;
use crate::overrides::{load_config, ConfigOverrides};

/// Run the sample command
///
/// `z` defaults to the configured octave.
pub fn run(
    x: f64,
    y: f64,
    z: Option<f64>,
    config_path: Option<&str>,
    overrides: &ConfigOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    let config = load_config(config_path, overrides)?;
    let z = z.unwrap_or(config.octave);
    let seed = config.seed.unwrap_or_else(DeterministicRng::seed_from_clock);

    let noise = build_noise(&config, seed).context("Failed to build noise")?;
    let value = noise
        .evaluate_at(x, y, z)
        .with_context(|| format!("Cannot sample at ({}, {}, {})", x, y, z))?;

    if json_output {
        let output = SampleOutput { x, y, z, seed, value };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{} ({}, {}, {}) {}",
            "Sample".cyan().bold(),
            x,
            y,
            z,
            format!("seed {}", seed).dimmed()
        );
        println!("{}", value);
    }

    Ok(ExitCode::SUCCESS)
}

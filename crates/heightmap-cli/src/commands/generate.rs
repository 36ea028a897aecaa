//! Generate command implementation
//!
//! Samples the noise over the configured grid and writes the PNG heightmap.

use anyhow::{Context, Result};
use colored::Colorize;
use heightmap_core::{generate_heightmap, save_heightmap, HeightmapConfig};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, GenerateOutput, GenerateResult, JsonError};
use crate::overrides::{load_config, ConfigOverrides};

/// Run the generate command
///
/// # Arguments
/// * `out` - Path of the PNG to write
/// * `config_path` - Optional JSON config file
/// * `overrides` - Flags replacing config fields
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    out: &str,
    config_path: Option<&str>,
    overrides: &ConfigOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(out, config_path, overrides)
    } else {
        run_human(out, config_path, overrides)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(out: &str, config_path: Option<&str>, overrides: &ConfigOverrides) -> Result<ExitCode> {
    let start = Instant::now();
    let config = load_config(config_path, overrides)?;

    println!("{} {}", "Generating heightmap:".cyan().bold(), out);
    if let Some(path) = config_path {
        println!("{} {}", "Config:".dimmed(), path);
    }
    print_config(&config);

    let result = generate_heightmap(&config).context("Failed to generate heightmap")?;
    if config.seed.is_none() {
        println!(
            "{} {} {}",
            "Seed:".dimmed(),
            result.seed,
            "(from clock)".dimmed()
        );
    }

    save_heightmap(&result, Path::new(out))
        .with_context(|| format!("Failed to write heightmap: {}", out))?;

    if let Some((min, max, mean)) = result.grid.stats() {
        println!(
            "{} min {:.4}, max {:.4}, mean {:.4}",
            "Samples:".dimmed(),
            min,
            max,
            mean
        );
    }
    println!("{} {}", "Hash:".dimmed(), &result.hash[..16]);
    println!(
        "\n{} {} ({} ms)",
        "Wrote".green().bold(),
        out,
        start.elapsed().as_millis()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(out: &str, config_path: Option<&str>, overrides: &ConfigOverrides) -> Result<ExitCode> {
    let start = Instant::now();

    let config = match load_config(config_path, overrides) {
        Ok(config) => config,
        Err(e) => {
            return print_failure(JsonError::new(error_codes::INVALID_CONFIG, format!("{:#}", e)));
        }
    };

    let result = match generate_heightmap(&config) {
        Ok(result) => result,
        Err(e) => {
            return print_failure(JsonError::new(error_codes::GENERATION_ERROR, e.to_string()));
        }
    };

    if let Err(e) = save_heightmap(&result, Path::new(out)) {
        return print_failure(JsonError::new(
            error_codes::WRITE_ERROR,
            format!("Failed to write heightmap {}: {}", out, e),
        ));
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    let output = GenerateOutput::success(GenerateResult::from_heightmap(
        out,
        &config,
        &result,
        duration_ms,
    ));
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitCode::SUCCESS)
}

fn print_failure(error: JsonError) -> Result<ExitCode> {
    let output = GenerateOutput::failure(vec![error]);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(1))
}

fn print_config(config: &HeightmapConfig) {
    println!(
        "{} {}x{}",
        "Size:".dimmed(),
        config.width,
        config.height
    );
    println!("{} {}", "Octave:".dimmed(), config.octave);
    println!(
        "{} {} entries, {:?}",
        "Table:".dimmed(),
        config.table_size,
        config.permutation
    );
    println!(
        "{} offsets {:?}, axes {:?}, frequency {}",
        "Sampling:".dimmed(),
        config.offsets,
        config.axes,
        config.frequency
    );
    if let Some(seed) = config.seed {
        println!("{} {}", "Seed:".dimmed(), seed);
    }
}

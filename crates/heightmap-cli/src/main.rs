//! Heightmap CLI - Perlin noise heightmap generator
//!
//! This binary builds a permutation table, samples improved gradient noise
//! over a pixel grid, and writes the result as a PNG.

use clap::Parser;
use heightmap_cli::commands;
use heightmap_cli::overrides::ConfigOverrides;
use std::process::ExitCode;

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            out,
            noise,
            width,
            height,
            axes,
            frequency,
            json,
        } => {
            let overrides = ConfigOverrides {
                width,
                height,
                axes,
                frequency,
                ..noise.overrides()
            };
            commands::generate::run(&out, noise.config.as_deref(), &overrides, json)
        }
        Commands::Sample {
            x,
            y,
            z,
            noise,
            json,
        } => commands::sample::run(x, y, z, noise.config.as_deref(), &noise.overrides(), json),
        Commands::Table { noise, json } => {
            commands::table::run(noise.config.as_deref(), &noise.overrides(), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

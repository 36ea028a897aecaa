//! Table command implementation
//!
//! Prints the permutation table a seed produces.

use anyhow::Result;
use colored::Colorize;
use heightmap_core::{DeterministicRng, PermutationTable};
use std::process::ExitCode;

use super::json_output::TableOutput;
use crate::overrides::{load_config, ConfigOverrides};

const PER_LINE: usize = 16;

/// Run the table command
pub fn run(config_path: Option<&str>, overrides: &ConfigOverrides, json_output: bool) -> Result<ExitCode> {
    let config = load_config(config_path, overrides)?;
    let seed = config.seed.unwrap_or_else(DeterministicRng::seed_from_clock);

    let mut rng = DeterministicRng::new(seed);
    let table = PermutationTable::build(config.table_size, &mut rng, config.permutation);

    if json_output {
        let output = TableOutput {
            seed,
            values: table.values().to_vec(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} entries, {:?}, seed {}",
        "Permutation table:".cyan().bold(),
        table.len(),
        config.permutation,
        seed
    );
    for (i, chunk) in table.values().chunks(PER_LINE).enumerate() {
        let row: Vec<String> = chunk.iter().map(|v| format!("{:3}", v)).collect();
        println!("{} {}", format!("{:4}:", i * PER_LINE).dimmed(), row.join(" "));
    }

    Ok(ExitCode::SUCCESS)
}

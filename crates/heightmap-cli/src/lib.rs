//! Perlin Heightmap CLI library.
//!
//! Config loading and the command implementations behind the `heightmap`
//! binary.

pub mod commands;
pub mod overrides;

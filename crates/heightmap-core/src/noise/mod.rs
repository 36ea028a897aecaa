//! Noise generation primitives.
//!
//! A single 3D gradient noise (Perlin's 2002 "improved noise") driven by a
//! caller-supplied permutation table. Output is deterministic given the same
//! table and coordinates.

mod improved;
mod permutation;

use thiserror::Error;

pub use improved::{evaluate, ImprovedNoise, OffsetMode};
pub use permutation::{PermutationMode, PermutationTable, MIN_TABLE_LEN};

/// Errors from noise evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoiseError {
    #[error("permutation table has {len} entries, at least {required} are required")]
    TableTooShort { len: usize, required: usize },

    #[error("{axis} coordinate is not finite")]
    NonFiniteCoordinate { axis: char },
}

/// Trait for 3D noise generators.
pub trait Noise3D {
    /// Sample the raw noise at a 3D coordinate, roughly in [-1, 1].
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;

    /// Sample the noise remapped to [0, 1].
    ///
    /// Clamped, since the interpolated gradient sum can overshoot the unit
    /// range by a rounding error. Coordinates must be finite; a NaN or
    /// infinite input yields NaN.
    fn sample_01(&self, x: f64, y: f64, z: f64) -> f64 {
        ((self.sample(x, y, z) + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

/// Quintic fade curve, `6t^5 - 15t^4 + 10t^3`.
///
/// Has zero first and second derivatives at 0 and 1, so interpolation
/// between lattice gradients is C2 continuous.
#[inline]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Dot product of `(x, y, z)` with one of the 12 cube-edge gradients,
/// selected by the low 4 bits of `hash`.
///
/// - `u` is `x` when `h < 8`, otherwise `y`.
/// - `v` is `y` when `h < 4`, `x` when `h` is 12 or 14, otherwise `z`.
/// - Bit 0 negates `u`, bit 1 negates `v`.
#[inline]
pub fn gradient(hash: u8, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    let u = if h & 1 == 0 { u } else { -u };
    let v = if h & 2 == 0 { v } else { -v };
    u + v
}

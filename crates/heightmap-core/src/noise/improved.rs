//! Improved (2002) Perlin noise in 3D.
//!
//! Corner naming follows Perlin's reference: `A`/`B` hash the x corners with
//! the y lattice coordinate, `AA`/`AB`/`BA`/`BB` add the z lattice coordinate.

use serde::{Deserialize, Serialize};

use super::permutation::{PermutationTable, MIN_TABLE_LEN};
use super::{fade, gradient, lerp, Noise3D, NoiseError};

/// How fractional offsets inside a lattice cell are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetMode {
    /// Each axis uses its own fractional part.
    #[default]
    Corrected,
    /// The y and z offsets are taken from `x` minus the floor of their axis,
    /// reproducing the legacy offset derivation. Sampling collapses to a
    /// function of x within each cell.
    Reference,
}

/// 3D gradient noise over a validated permutation table.
#[derive(Debug, Clone)]
pub struct ImprovedNoise {
    table: PermutationTable,
    offsets: OffsetMode,
}

impl ImprovedNoise {
    /// Create a noise generator, rejecting tables shorter than 256 entries.
    pub fn new(table: PermutationTable) -> Result<Self, NoiseError> {
        check_table(&table)?;
        Ok(Self {
            table,
            offsets: OffsetMode::default(),
        })
    }

    /// Set the fractional offset mode.
    pub fn with_offsets(mut self, offsets: OffsetMode) -> Self {
        self.offsets = offsets;
        self
    }

    pub fn table(&self) -> &PermutationTable {
        &self.table
    }

    pub fn offsets(&self) -> OffsetMode {
        self.offsets
    }

    /// Checked [`Noise3D::sample_01`]: rejects NaN and infinite coordinates,
    /// which have no lattice cell.
    pub fn evaluate_at(&self, x: f64, y: f64, z: f64) -> Result<f64, NoiseError> {
        check_coordinates(x, y, z)?;
        Ok(self.sample_01(x, y, z))
    }
}

impl Noise3D for ImprovedNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        sample_raw(&self.table, self.offsets, x, y, z)
    }
}

/// Evaluate the noise at one point, remapped to [0, 1].
///
/// Uses [`OffsetMode::Corrected`]. Fails if the table is too short to hash
/// lattice corners or if a coordinate is not finite.
pub fn evaluate(x: f64, y: f64, z: f64, table: &PermutationTable) -> Result<f64, NoiseError> {
    check_table(table)?;
    check_coordinates(x, y, z)?;
    let raw = sample_raw(table, OffsetMode::Corrected, x, y, z);
    Ok(((raw + 1.0) * 0.5).clamp(0.0, 1.0))
}

fn check_table(table: &PermutationTable) -> Result<(), NoiseError> {
    if table.len() < MIN_TABLE_LEN {
        return Err(NoiseError::TableTooShort {
            len: table.len(),
            required: MIN_TABLE_LEN,
        });
    }
    Ok(())
}

fn check_coordinates(x: f64, y: f64, z: f64) -> Result<(), NoiseError> {
    for (axis, value) in [('x', x), ('y', y), ('z', z)] {
        if !value.is_finite() {
            return Err(NoiseError::NonFiniteCoordinate { axis });
        }
    }
    Ok(())
}

/// Lattice coordinate wrapped into [0, 255].
#[inline]
fn lattice(floored: f64) -> usize {
    ((floored as i64) & 255) as usize
}

fn sample_raw(p: &PermutationTable, offsets: OffsetMode, x: f64, y: f64, z: f64) -> f64 {
    let (x_floor, y_floor, z_floor) = (x.floor(), y.floor(), z.floor());
    let (xi, yi, zi) = (lattice(x_floor), lattice(y_floor), lattice(z_floor));

    let x_off = x - x_floor;
    let (y_off, z_off) = match offsets {
        OffsetMode::Corrected => (y - y_floor, z - z_floor),
        OffsetMode::Reference => (x - y_floor, x - z_floor),
    };
    let (x, y, z) = (x_off, y_off, z_off);

    let u = fade(x);
    let v = fade(y);
    let w = fade(z);

    let a = p.at(xi) + yi;
    let aa = p.at(a) + zi;
    let ab = p.at(a + 1) + zi;
    let b = p.at(xi + 1) + yi;
    let ba = p.at(b) + zi;
    let bb = p.at(b + 1) + zi;

    let grad = |corner: usize, dx: f64, dy: f64, dz: f64| gradient(p.at(corner) as u8, dx, dy, dz);

    lerp(
        w,
        lerp(
            v,
            lerp(u, grad(aa, x, y, z), grad(ba, x - 1.0, y, z)),
            lerp(u, grad(ab, x, y - 1.0, z), grad(bb, x - 1.0, y - 1.0, z)),
        ),
        lerp(
            v,
            lerp(u, grad(aa + 1, x, y, z - 1.0), grad(ba + 1, x - 1.0, y, z - 1.0)),
            lerp(
                u,
                grad(ab + 1, x, y - 1.0, z - 1.0),
                grad(bb + 1, x - 1.0, y - 1.0, z - 1.0),
            ),
        ),
    )
}

//! Permutation table construction.

use serde::{Deserialize, Serialize};

use crate::rng::DeterministicRng;

/// Smallest table the noise evaluator accepts.
pub const MIN_TABLE_LEN: usize = 256;

/// How table entries are drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermutationMode {
    /// Every entry drawn independently from [0, 255]; values may repeat.
    #[default]
    WithReplacement,
    /// A Fisher-Yates shuffle of 0..=255, repeated cyclically past 256 entries.
    Shuffled,
}

/// Lookup table hashing lattice coordinates into gradient indices.
///
/// Immutable once built. Lookups wrap modulo the table length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    values: Vec<u8>,
}

impl PermutationTable {
    /// Build a table of exactly `size` entries from `rng`.
    ///
    /// Sizes below [`MIN_TABLE_LEN`] are allowed here and rejected when the
    /// table is handed to the evaluator.
    pub fn build(size: usize, rng: &mut DeterministicRng, mode: PermutationMode) -> Self {
        let values = match mode {
            PermutationMode::WithReplacement => (0..size).map(|_| rng.gen_u8()).collect(),
            PermutationMode::Shuffled => {
                let mut source: Vec<u8> = (0..=255).collect();

                // Fisher-Yates shuffle
                for i in (1..256).rev() {
                    let j = rng.gen_range(0..=i);
                    source.swap(i, j);
                }

                source.iter().copied().cycle().take(size).collect()
            }
        };

        Self { values }
    }

    /// Wrap caller-supplied values.
    pub fn from_values(values: Vec<u8>) -> Self {
        Self { values }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw entries in order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Entry at `index`, wrapped into the table.
    ///
    /// Callers must have rejected empty tables.
    #[inline]
    pub(crate) fn at(&self, index: usize) -> usize {
        self.values[index % self.values.len()] as usize
    }
}

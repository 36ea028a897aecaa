//! Height grid: one noise sample per pixel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::noise::Noise3D;

/// How pixel indices map to noise-space coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMapping {
    /// Pixel `(px, py)` samples `(py / width, px / height)`, matching the
    /// legacy heightmap images.
    #[default]
    Reference,
    /// Pixel `(px, py)` samples `(px / width, py / height)`.
    Direct,
}

impl AxisMapping {
    /// Noise-space `(x, y)` for a pixel, before frequency scaling.
    #[inline]
    pub fn coords(self, px: u32, py: u32, width: u32, height: u32) -> (f64, f64) {
        match self {
            AxisMapping::Reference => (py as f64 / width as f64, px as f64 / height as f64),
            AxisMapping::Direct => (px as f64 / width as f64, py as f64 / height as f64),
        }
    }
}

/// Sampling parameters shared by every cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSampling {
    /// Fixed z slice.
    pub octave: f64,
    /// Multiplier applied to normalized x and y.
    pub frequency: f64,
    pub axes: AxisMapping,
}

/// Grid of normalized samples in [0, 1], row-major by pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Samples (row-major).
    pub data: Vec<f64>,
}

impl HeightGrid {
    /// Create a new grid filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Evaluate `noise` once per pixel.
    ///
    /// Rows are filled in parallel; the result is identical to a sequential
    /// fill. Zero-sized grids come back empty.
    pub fn populate<N>(width: u32, height: u32, noise: &N, sampling: GridSampling) -> Self
    where
        N: Noise3D + Sync,
    {
        let mut grid = Self::new(width, height, 0.0);
        if width == 0 || height == 0 {
            return grid;
        }

        grid.data
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(py, row)| {
                for (px, cell) in row.iter_mut().enumerate() {
                    let (x, y) = sampling.axes.coords(px as u32, py as u32, width, height);
                    *cell = noise.sample_01(
                        x * sampling.frequency,
                        y * sampling.frequency,
                        sampling.octave,
                    );
                }
            });

        grid
    }

    /// Get a sample at the given pixel.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set a sample at the given pixel.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Minimum, maximum, and mean sample, or `None` for an empty grid.
    pub fn stats(&self) -> Option<(f64, f64, f64)> {
        if self.data.is_empty() {
            return None;
        }
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        let mut sum = 0.0;
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
            sum += v;
        }
        Some((min, max, sum / self.data.len() as f64))
    }

    /// Opaque RGBA bytes, `R = G = B = floor(255 * sample)`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for &v in &self.data {
            let i = intensity(v);
            bytes.extend_from_slice(&[i, i, i, 0xff]);
        }
        bytes
    }
}

#[inline]
fn intensity(v: f64) -> u8 {
    (255.0 * v.clamp(0.0, 1.0)).floor() as u8
}

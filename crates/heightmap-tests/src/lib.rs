//! Heightmap End-to-End Test Infrastructure
//!
//! Helpers for the integration tests under `tests/`:
//!
//! - Decoding written PNGs back into pixels
//! - Checking that repeated generation is byte-identical
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p heightmap-tests
//! ```

use std::fmt;
use std::path::Path;

/// Error type for decoding failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Description of what went wrong.
    pub message: String,
}

impl FormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PNG error: {}", self.message)
    }
}

impl std::error::Error for FormatError {}

/// A decoded PNG image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// RGBA value of the pixel at `(x, y)`.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Decode PNG bytes.
pub fn decode_png(data: &[u8]) -> Result<DecodedImage, FormatError> {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder
        .read_info()
        .map_err(|e| FormatError::new(e.to_string()))?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| FormatError::new(e.to_string()))?;
    buf.truncate(info.buffer_size());

    Ok(DecodedImage {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        pixels: buf,
    })
}

/// Read and decode a PNG file.
pub fn decode_png_file(path: &Path) -> Result<DecodedImage, FormatError> {
    let data = std::fs::read(path).map_err(|e| FormatError::new(e.to_string()))?;
    decode_png(&data)
}

/// Run `generate` `runs` times and report whether every output matched the
/// first.
pub fn is_deterministic<F>(mut generate: F, runs: usize) -> bool
where
    F: FnMut() -> Vec<u8>,
{
    let first = generate();
    (1..runs).all(|_| generate() == first)
}

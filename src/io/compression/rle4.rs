//! Two-byte RLE4 codes.
//!
//! The high nibble of the first byte is the colour (`0xF` white, `0x0`
//! black); the low nibble and the whole second byte hold a 12-bit run length.

use super::RunLengthEncoder;

/// Largest run a two-byte code can hold.
pub const RLE4_MAX_RUN: usize = 0xFFF;

/// Encoder for two-byte RLE4 codes.
#[derive(Debug, Clone, Copy)]
pub struct Rle4Encoder {
    max_run: usize,
}

impl Rle4Encoder {
    pub fn new() -> Self {
        Self {
            max_run: RLE4_MAX_RUN,
        }
    }

    /// Encoder with a lower run cap, clamped to `1..=0xFFF`.
    pub fn with_max_run(max_run: usize) -> Self {
        Self {
            max_run: max_run.clamp(1, RLE4_MAX_RUN),
        }
    }
}

impl Default for Rle4Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLengthEncoder for Rle4Encoder {
    fn max_run(&self) -> usize {
        self.max_run
    }

    fn push_code(&self, white: bool, run: usize, out: &mut Vec<u8>) {
        let color: u8 = if white { 0xF } else { 0x0 };
        out.push((color << 4) | (run >> 8) as u8);
        out.push((run & 0xFF) as u8);
    }
}

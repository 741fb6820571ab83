//! One-byte RLE codes.
//!
//! Bit 7 is the colour (1 = white), bits 0..7 the run length.

use super::RunLengthEncoder;

/// Largest run a one-byte code can hold.
pub const RLE_MAX_RUN: usize = 0x7F;

/// Encoder for one-byte RLE codes.
#[derive(Debug, Clone, Copy)]
pub struct Rle7Encoder {
    max_run: usize,
}

impl Rle7Encoder {
    pub fn new() -> Self {
        Self {
            max_run: RLE_MAX_RUN,
        }
    }

    /// Encoder with a lower run cap, clamped to `1..=0x7F`.
    ///
    /// Legacy `.photon` files use 125 to match the vendor slicer's output.
    pub fn with_max_run(max_run: usize) -> Self {
        Self {
            max_run: max_run.clamp(1, RLE_MAX_RUN),
        }
    }
}

impl Default for Rle7Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLengthEncoder for Rle7Encoder {
    fn max_run(&self) -> usize {
        self.max_run
    }

    fn push_code(&self, white: bool, run: usize, out: &mut Vec<u8>) {
        let color: u8 = if white { 0x80 } else { 0x00 };
        out.push(color | run as u8);
    }
}

//! Run-length compression for layer images.
//!
//! Layer images are binarised before encoding: a sample of exactly 255 is
//! white, anything else (including antialiasing greys) is black. Two code
//! layouts exist:
//! - **RLE** (`.photon`, `.pws`): 1 byte per run, 7-bit length
//! - **RLE4** (everything else): 2 bytes per run, 12-bit length

pub mod rle;
pub mod rle4;

pub use rle::Rle7Encoder;
pub use rle4::Rle4Encoder;

use crate::profile::Encoding;

/// Trait for run-length encoding a binarised single-channel raster.
pub trait RunLengthEncoder: Send + Sync {
    /// Longest run a single code may describe.
    fn max_run(&self) -> usize;

    /// Append the codes for one run to `out`.
    fn push_code(&self, white: bool, run: usize, out: &mut Vec<u8>);

    /// Encode `samples` left to right into a fresh buffer.
    fn encode(&self, samples: &[u8]) -> Vec<u8> {
        let max_run = self.max_run();
        let mut out = Vec::new();
        let mut i = 0;
        while i < samples.len() {
            let run = scan_run(samples, i, max_run);
            self.push_code(is_white(samples[i]), run, &mut out);
            i += run;
        }
        out
    }
}

/// Binarisation rule shared by both encoders.
#[inline]
pub fn is_white(sample: u8) -> bool {
    sample == 255
}

/// Length of the same-colour run starting at `start`, capped at `max_run`.
///
/// Never reads past the end of `samples`; near the end the count of the
/// remaining pixels is returned.
pub fn scan_run(samples: &[u8], start: usize, max_run: usize) -> usize {
    let white = is_white(samples[start]);
    samples[start..]
        .iter()
        .take(max_run)
        .take_while(|&&s| is_white(s) == white)
        .count()
}

/// Default encoder for a profile encoding.
pub fn encoder_for(encoding: Encoding) -> Box<dyn RunLengthEncoder> {
    match encoding {
        Encoding::Rle => Box::new(Rle7Encoder::new()),
        Encoding::Rle4 => Box::new(Rle4Encoder::new()),
    }
}

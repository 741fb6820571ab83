//! Shared test utilities for photon-writer integration tests.
//!
//! Raster builders live in [`builders`]; this module holds the little-endian
//! field readers and a run-length decoder used to check encoder output.
//! Decoding is only ever needed by tests.

#![allow(dead_code)]

pub mod builders;

use photon_writer::{Encoding, PrinterProfile};

// ===========================================================================
// Field readers
// ===========================================================================

pub fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

pub fn read_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

pub fn read_f32(buf: &[u8], at: usize) -> f32 {
    f32::from_bits(read_u32(buf, at))
}

/// Zero-padded ASCII field as a string, without the padding.
pub fn read_ascii(buf: &[u8], at: usize, width: usize) -> String {
    let field = &buf[at..at + width];
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

// ===========================================================================
// Run-length decoding
// ===========================================================================

/// One decoded `(white, run)` code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub white: bool,
    pub len: usize,
}

/// Split RLE4 data into runs.
pub fn rle4_runs(data: &[u8]) -> Vec<Run> {
    assert_eq!(data.len() % 2, 0, "RLE4 data must be whole codes");
    data.chunks_exact(2)
        .map(|code| {
            let color = code[0] >> 4;
            assert!(color == 0xF || color == 0x0, "bad RLE4 colour nibble {color:#X}");
            Run {
                white: color == 0xF,
                len: (((code[0] & 0x0F) as usize) << 8) | code[1] as usize,
            }
        })
        .collect()
}

/// Split one-byte RLE data into runs.
pub fn rle_runs(data: &[u8]) -> Vec<Run> {
    data.iter()
        .map(|&code| Run {
            white: code & 0x80 != 0,
            len: (code & 0x7F) as usize,
        })
        .collect()
}

pub fn runs(data: &[u8], encoding: Encoding) -> Vec<Run> {
    match encoding {
        Encoding::Rle => rle_runs(data),
        Encoding::Rle4 => rle4_runs(data),
    }
}

/// Expand encoded data back into binarised samples (255 / 0).
pub fn decode(data: &[u8], encoding: Encoding) -> Vec<u8> {
    let mut out = Vec::new();
    for run in runs(data, encoding) {
        out.extend(std::iter::repeat(if run.white { 255 } else { 0 }).take(run.len));
    }
    out
}

/// Collapse samples the way the encoders binarise them.
pub fn binarise(samples: &[u8]) -> Vec<u8> {
    samples.iter().map(|&s| if s == 255 { 255 } else { 0 }).collect()
}

// ===========================================================================
// Profiles
// ===========================================================================

/// Small current-format profile for `major`, with a bed size so that 516
/// files can be written.
pub fn small_profile(major: u32, encoding: Encoding) -> PrinterProfile {
    PrinterProfile::new((major, 1), 0.05, (16, 8), (4, 2), encoding, "pwmx")
        .with_printer_model("Test printer")
        .with_physical_dimensions(photon_writer::BedSize::new(40.0, 20.0, 100.0))
}

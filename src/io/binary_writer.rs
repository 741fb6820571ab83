//! Cursor-based little-endian byte buffer writer.
//!
//! Every multi-byte value is little-endian. Fixed-width ASCII fields are
//! zero padded; text longer than its field is cut at the field width.

use std::io::{Cursor, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use log::warn;

use crate::error::{PhotonError, Result};

/// Sequential writer over an owned byte buffer.
pub struct BinaryWriter {
    cursor: Cursor<Vec<u8>>,
}

impl BinaryWriter {
    /// Create a writer whose buffer is pre-sized for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cursor: Cursor::new(Vec::with_capacity(capacity)),
        }
    }

    /// Current write position.
    #[inline]
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.cursor.write_u8(value)?;
        Ok(())
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.cursor.write_u16::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.cursor.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.cursor.write_f32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write a slice of 16-bit words.
    pub fn write_u16_slice(&mut self, values: &[u16]) -> Result<()> {
        for &v in values {
            self.cursor.write_u16::<LittleEndian>(v)?;
        }
        Ok(())
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.cursor.write_all(bytes)?;
        Ok(())
    }

    /// Write `count` zero bytes.
    pub fn write_zeros(&mut self, count: usize) -> Result<()> {
        self.write_bytes(&vec![0u8; count])
    }

    /// Write `text` into a field of exactly `width` bytes.
    pub fn write_fixed_ascii(&mut self, text: &str, width: usize) -> Result<()> {
        let bytes = text.as_bytes();
        let len = if bytes.len() > width {
            warn!("truncating {:?} to a {}-byte field", text, width);
            width
        } else {
            bytes.len()
        };
        self.write_bytes(&bytes[..len])?;
        self.write_zeros(width - len)
    }

    /// Check that the cursor sits at `expected`, naming the section on failure.
    pub fn expect_position(&self, expected: u64, section: &str) -> Result<()> {
        let actual = self.position();
        if actual != expected {
            return Err(PhotonError::Layout(format!(
                "{section} expected at {expected:#X}, writer is at {actual:#X}"
            )));
        }
        Ok(())
    }

    /// Finish writing and return the buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.cursor.into_inner()
    }
}

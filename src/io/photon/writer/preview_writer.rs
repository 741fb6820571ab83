//! Preview (thumbnail) section writers for both file families.

use crate::error::Result;
use crate::io::binary_writer::BinaryWriter;
use crate::io::photon::constants::{current, legacy, tags};
use crate::preview::EncodedPreview;
use crate::types::FormatRevision;

use super::to_u32;

/// Writer for preview sections.
pub struct PreviewWriter<'a> {
    preview: &'a EncodedPreview,
}

impl<'a> PreviewWriter<'a> {
    pub fn new(preview: &'a EncodedPreview) -> Self {
        Self { preview }
    }

    /// Write the PREVIEW section of an ANYCUBIC-tagged file.
    ///
    /// `preview_size` is the planned value of the length field.
    pub fn write_current(
        &self,
        w: &mut BinaryWriter,
        revision: FormatRevision,
        preview_size: u64,
    ) -> Result<()> {
        w.write_fixed_ascii(tags::PREVIEW, tags::TAG_WIDTH)?;
        w.write_u32(to_u32(preview_size, "PREVIEW length")?)?;
        w.write_u32(self.preview.width)?;
        w.write_u32(match revision {
            FormatRevision::V1 => current::PREVIEW_MARKER_V1,
            _ => current::PREVIEW_MARKER,
        })?;
        w.write_u32(self.preview.height)?;
        w.write_u16_slice(&self.preview.pixels)?;

        if revision.has_preview_trailer() {
            for word in current::PREVIEW_TRAILER {
                w.write_u32(word)?;
            }
        }
        Ok(())
    }

    /// Write one legacy preview block starting at `block_addr`.
    ///
    /// The image header points at the pixel data right behind it.
    pub fn write_legacy(&self, w: &mut BinaryWriter, block_addr: u64) -> Result<()> {
        w.write_u32(self.preview.width)?;
        w.write_u32(self.preview.height)?;
        w.write_u32(to_u32(
            block_addr + legacy::PREVIEW_HEADER_LEN,
            "preview image offset",
        )?)?;
        w.write_u32(to_u32(self.preview.byte_len() as u64, "preview image length")?)?;
        // four unknown words
        w.write_zeros(16)?;
        w.write_u16_slice(&self.preview.pixels)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EncodedPreview {
        EncodedPreview {
            width: 2,
            height: 1,
            pixels: vec![0x07E0, 0x0000],
        }
    }

    fn read_u32(buf: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
    }

    #[test]
    fn test_v1_preview_has_no_trailer() {
        let preview = sample();
        let mut w = BinaryWriter::with_capacity(64);
        PreviewWriter::new(&preview)
            .write_current(&mut w, FormatRevision::V1, 16)
            .unwrap();
        let buf = w.into_inner();
        assert_eq!(buf.len(), 12 + 4 + 12 + 4);
        assert_eq!(&buf[..7], b"PREVIEW");
        assert_eq!(read_u32(&buf, 12), 16);
        assert_eq!(read_u32(&buf, 16), 2);
        assert_eq!(read_u32(&buf, 20), 42);
        assert_eq!(read_u32(&buf, 24), 1);
        assert_eq!(&buf[28..32], &[0xE0, 0x07, 0x00, 0x00]);
    }

    #[test]
    fn test_trailer_written_after_pixels() {
        let preview = sample();
        let mut w = BinaryWriter::with_capacity(64);
        PreviewWriter::new(&preview)
            .write_current(&mut w, FormatRevision::V515, 32)
            .unwrap();
        let buf = w.into_inner();
        assert_eq!(read_u32(&buf, 20), 120);
        let t = 32;
        assert_eq!(buf.len(), t + 28);
        assert_eq!(read_u32(&buf, t), 0);
        assert_eq!(read_u32(&buf, t + 4), 16);
        for i in 0..4 {
            assert_eq!(read_u32(&buf, t + 8 + i * 4), 0xFFFF_FFFF);
        }
        assert_eq!(read_u32(&buf, t + 24), 0);
    }

    #[test]
    fn test_legacy_block() {
        let preview = sample();
        let mut w = BinaryWriter::with_capacity(64);
        PreviewWriter::new(&preview).write_legacy(&mut w, 0x70).unwrap();
        let buf = w.into_inner();
        assert_eq!(buf.len(), 32 + 4);
        assert_eq!(read_u32(&buf, 0), 2);
        assert_eq!(read_u32(&buf, 4), 1);
        assert_eq!(read_u32(&buf, 8), 0x70 + 32);
        assert_eq!(read_u32(&buf, 12), 4);
        assert!(buf[16..32].iter().all(|&b| b == 0));
    }
}

//! File layout planning.
//!
//! Every section address is computed here, before any byte is written.
//! The writers walk the planned sections in order and verify they end up
//! exactly where the plan says.
//!
//! ANYCUBIC-tagged layout:
//! ```text
//! FILE MARK + POINTER TABLE   0x00
//! HEADER                      0x30 (0x34 for 516)
//! PREVIEW                     0x90 (0x98 for 516)
//! LAYERDEF                    one 32-byte layer record
//! EXTRA                       516 only, 72 bytes
//! MACHINE                     516 only, 156 bytes
//! LAYERDATA                   RLE / RLE4 codes
//! ```
//!
//! Legacy layout:
//! ```text
//! HEADER          0x00, 0x70 bytes
//! PREVIEW         0x70
//! PREVIEW SMALL   identical copy
//! LAYERDEF        one 36-byte record
//! LAYERDATA
//! ```

use log::debug;

use crate::error::Result;
use crate::profile::PrinterProfile;
use crate::types::{FormatRevision, Resolution};

use super::constants::{current, legacy, tags};

/// A named, contiguous byte range of the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSection {
    pub name: &'static str,
    pub start: u64,
    pub length: u64,
}

impl FileSection {
    /// First byte past the section.
    #[inline]
    pub fn end(&self) -> u64 {
        self.start + self.length
    }
}

/// Planned layout of one ANYCUBIC-tagged file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLayout {
    pub revision: FormatRevision,
    pub header_addr: u64,
    pub preview_addr: u64,
    /// Value of the PREVIEW length field.
    pub preview_size: u64,
    pub layer_def_addr: u64,
    pub layer_data_addr: u64,
    pub layer_data_len: u64,
    sections: Vec<FileSection>,
}

impl CurrentLayout {
    /// Plan a file for `profile` carrying `layer_data_len` encoded bytes.
    ///
    /// Fails for file versions outside 1 / 515 / 516.
    pub fn plan(profile: &PrinterProfile, layer_data_len: usize) -> Result<Self> {
        let revision = profile.file_version.revision()?;
        Ok(Self::for_revision(
            revision,
            profile.preview_resolution,
            layer_data_len,
        ))
    }

    /// Plan a file for an already resolved revision.
    pub fn for_revision(
        revision: FormatRevision,
        preview_resolution: Resolution,
        layer_data_len: usize,
    ) -> Self {
        let is_v1 = revision == FormatRevision::V1;
        let is_516 = revision == FormatRevision::V516;

        let header_addr = if is_516 { current::HEADER_ADDR_516 } else { current::HEADER_ADDR };
        let preview_addr = if is_516 { current::PREVIEW_ADDR_516 } else { current::PREVIEW_ADDR };

        let preview_pixels = preview_resolution.pixel_count() as u64;
        let preview_meta = if is_v1 { current::PREVIEW_META_V1 } else { current::PREVIEW_META };
        let preview_gap = if is_v1 { current::PREVIEW_GAP_V1 } else { current::PREVIEW_GAP };
        let preview_size = preview_pixels * 2 + preview_meta;

        let layer_def_addr = preview_addr + preview_size + preview_gap;
        let layer_def_len = current::LAYERDEF_HEADER_LEN + current::LAYER_RECORD_LEN;
        let extra_machine_len = if is_516 {
            current::EXTRA_LEN + current::MACHINE_LEN
        } else {
            0
        };
        let layer_data_addr = layer_def_addr + layer_def_len + extra_machine_len;
        let layer_data_len = layer_data_len as u64;

        let mut sections = vec![
            FileSection {
                name: tags::FILE_MARK,
                start: 0,
                length: header_addr,
            },
            FileSection {
                name: tags::HEADER,
                start: header_addr,
                length: preview_addr - header_addr,
            },
            FileSection {
                name: tags::PREVIEW,
                start: preview_addr,
                length: layer_def_addr - preview_addr,
            },
            FileSection {
                name: tags::LAYERDEF,
                start: layer_def_addr,
                length: layer_def_len,
            },
        ];
        if is_516 {
            let extra_addr = layer_def_addr + layer_def_len;
            sections.push(FileSection {
                name: tags::EXTRA,
                start: extra_addr,
                length: current::EXTRA_LEN,
            });
            sections.push(FileSection {
                name: tags::MACHINE,
                start: extra_addr + current::EXTRA_LEN,
                length: current::MACHINE_LEN,
            });
        }
        sections.push(FileSection {
            name: tags::LAYERDATA,
            start: layer_data_addr,
            length: layer_data_len,
        });

        let layout = Self {
            revision,
            header_addr,
            preview_addr,
            preview_size,
            layer_def_addr,
            layer_data_addr,
            layer_data_len,
            sections,
        };
        debug!(
            "planned {} layout: header {:#X}, preview {:#X}, layerdef {:#X}, layerdata {:#X}, total {}",
            revision,
            header_addr,
            preview_addr,
            layer_def_addr,
            layer_data_addr,
            layout.total_len()
        );
        layout
    }

    /// Pointer-table value for the end of the preview payload.
    pub fn preview_end_addr(&self) -> u64 {
        match self.revision {
            FormatRevision::V1 => self.layer_def_addr,
            _ => self.layer_def_addr - current::PREVIEW_TRAILER_LEN,
        }
    }

    /// Pointer-table value for the end of LAYERDEF; zero for version 1.
    pub fn layer_def_end_addr(&self) -> u64 {
        match self.revision {
            FormatRevision::V1 => 0,
            FormatRevision::V515 => self.layer_data_addr,
            FormatRevision::V516 => {
                self.layer_data_addr - (current::EXTRA_LEN + current::MACHINE_LEN)
            }
        }
    }

    /// MACHINE address, present only for 516.
    pub fn machine_addr(&self) -> Option<u64> {
        self.section(tags::MACHINE).map(|s| s.start)
    }

    /// EXTRA address, present only for 516.
    pub fn extra_addr(&self) -> Option<u64> {
        self.section(tags::EXTRA).map(|s| s.start)
    }

    pub fn sections(&self) -> &[FileSection] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&FileSection> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Total file size; equals the end of LAYERDATA.
    pub fn total_len(&self) -> u64 {
        self.layer_data_addr + self.layer_data_len
    }
}

/// Section names of the legacy layout.
pub mod legacy_sections {
    pub const HEADER: &str = "HEADER";
    pub const PREVIEW: &str = "PREVIEW";
    pub const PREVIEW_SMALL: &str = "PREVIEW_SMALL";
    pub const LAYERDEF: &str = "LAYERDEF";
    pub const LAYERDATA: &str = "LAYERDATA";
}

/// Planned layout of one legacy `.photon` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyLayout {
    pub preview_addr: u64,
    pub preview_small_addr: u64,
    /// Size of one preview block including its 32-byte image header.
    pub preview_block_len: u64,
    pub layer_def_addr: u64,
    pub layer_data_addr: u64,
    pub layer_data_len: u64,
    sections: Vec<FileSection>,
}

impl LegacyLayout {
    pub fn plan(preview_resolution: Resolution, layer_data_len: usize) -> Self {
        let preview_block_len =
            preview_resolution.pixel_count() as u64 * 2 + legacy::PREVIEW_HEADER_LEN;
        let preview_addr = legacy::HEADER_LEN;
        let preview_small_addr = preview_addr + preview_block_len;
        let layer_def_addr = preview_small_addr + preview_block_len;
        let layer_data_addr = layer_def_addr + legacy::LAYER_RECORD_LEN;
        let layer_data_len = layer_data_len as u64;

        let sections = vec![
            FileSection {
                name: legacy_sections::HEADER,
                start: 0,
                length: legacy::HEADER_LEN,
            },
            FileSection {
                name: legacy_sections::PREVIEW,
                start: preview_addr,
                length: preview_block_len,
            },
            FileSection {
                name: legacy_sections::PREVIEW_SMALL,
                start: preview_small_addr,
                length: preview_block_len,
            },
            FileSection {
                name: legacy_sections::LAYERDEF,
                start: layer_def_addr,
                length: legacy::LAYER_RECORD_LEN,
            },
            FileSection {
                name: legacy_sections::LAYERDATA,
                start: layer_data_addr,
                length: layer_data_len,
            },
        ];

        debug!(
            "planned legacy layout: previews {:#X}/{:#X}, layerdef {:#X}, layerdata {:#X}",
            preview_addr, preview_small_addr, layer_def_addr, layer_data_addr
        );

        Self {
            preview_addr,
            preview_small_addr,
            preview_block_len,
            layer_def_addr,
            layer_data_addr,
            layer_data_len,
            sections,
        }
    }

    pub fn sections(&self) -> &[FileSection] {
        &self.sections
    }

    pub fn total_len(&self) -> u64 {
        self.layer_data_addr + self.layer_data_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhotonError;
    use crate::profile::Encoding;

    const PREVIEW: Resolution = Resolution::new(224, 168);

    fn assert_contiguous(sections: &[FileSection]) {
        for pair in sections.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start, "{} -> {}", pair[0].name, pair[1].name);
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn test_v1_addresses() {
        let layout = CurrentLayout::for_revision(FormatRevision::V1, PREVIEW, 10);
        assert_eq!(layout.header_addr, 0x30);
        assert_eq!(layout.preview_addr, 0x90);
        assert_eq!(layout.preview_size, 224 * 168 * 2 + 12);
        assert_eq!(layout.layer_def_addr, 0x90 + 224 * 168 * 2 + 28);
        assert_eq!(layout.layer_data_addr, layout.layer_def_addr + 52);
        assert_eq!(layout.preview_end_addr(), layout.layer_def_addr);
        assert_eq!(layout.layer_def_end_addr(), 0);
        assert!(layout.machine_addr().is_none());
        assert_contiguous(layout.sections());
    }

    #[test]
    fn test_v1_minor_ignored() {
        for minor in [0, 4, 99] {
            let profile =
                PrinterProfile::new((1, minor), 0.05, (4, 4), (2, 2), Encoding::Rle4, "pwmx");
            let layout = CurrentLayout::plan(&profile, 2).unwrap();
            assert_eq!(layout.header_addr, 0x30);
            assert_eq!(layout.preview_addr, 0x90);
        }
    }

    #[test]
    fn test_v515_addresses() {
        let layout = CurrentLayout::for_revision(FormatRevision::V515, PREVIEW, 10);
        assert_eq!(layout.header_addr, 0x30);
        assert_eq!(layout.preview_addr, 0x90);
        assert_eq!(layout.preview_size, 224 * 168 * 2 + 28);
        assert_eq!(layout.layer_def_addr, 0x90 + 224 * 168 * 2 + 56);
        assert_eq!(layout.preview_end_addr(), layout.layer_def_addr - 0x1C);
        assert_eq!(layout.layer_def_end_addr(), layout.layer_data_addr);
        assert_contiguous(layout.sections());
    }

    #[test]
    fn test_v516_addresses() {
        let layout = CurrentLayout::for_revision(FormatRevision::V516, PREVIEW, 10);
        assert_eq!(layout.header_addr, 0x34);
        assert_eq!(layout.preview_addr, 0x98);
        assert_eq!(layout.layer_data_addr, layout.layer_def_addr + 52 + 228);
        assert_eq!(layout.extra_addr(), Some(layout.layer_def_addr + 52));
        assert_eq!(layout.machine_addr(), Some(layout.layer_data_addr - 156));
        assert_eq!(layout.layer_def_end_addr(), layout.layer_data_addr - 228);
        assert_contiguous(layout.sections());
    }

    #[test]
    fn test_total_len_is_last_section_end() {
        for rev in [FormatRevision::V1, FormatRevision::V515, FormatRevision::V516] {
            let layout = CurrentLayout::for_revision(rev, PREVIEW, 1234);
            let last = layout.sections().last().unwrap();
            assert_eq!(last.name, tags::LAYERDATA);
            assert_eq!(layout.total_len(), last.end());
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        let profile =
            PrinterProfile::new((516, 8), 0.04, (16, 16), (4, 3), Encoding::Rle4, "pm3");
        let a = CurrentLayout::plan(&profile, 77).unwrap();
        let b = CurrentLayout::plan(&profile, 77).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let profile = PrinterProfile::new((2, 0), 0.05, (4, 4), (2, 2), Encoding::Rle4, "pwmx");
        assert!(matches!(
            CurrentLayout::plan(&profile, 0),
            Err(PhotonError::UnsupportedFormatVersion(_))
        ));
    }

    #[test]
    fn test_legacy_layout() {
        let layout = LegacyLayout::plan(PREVIEW, 5);
        let block = 224 * 168 * 2 + 32;
        assert_eq!(layout.preview_addr, 0x70);
        assert_eq!(layout.preview_small_addr, 0x70 + block);
        assert_eq!(layout.layer_def_addr, 0x70 + 2 * block);
        assert_eq!(layout.layer_data_addr, layout.layer_def_addr + 36);
        assert_eq!(layout.total_len(), layout.layer_data_addr + 5);
        assert_contiguous(layout.sections());
    }
}

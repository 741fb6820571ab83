//! Pointer table and HEADER section of ANYCUBIC-tagged files.

use crate::error::Result;
use crate::io::binary_writer::BinaryWriter;
use crate::io::photon::constants::{current, defaults, tags};
use crate::io::photon::layout::CurrentLayout;
use crate::profile::PrinterProfile;
use crate::types::FormatRevision;

use super::to_u32;

/// Writer for the file mark, pointer table, and HEADER section.
pub struct HeaderWriter<'a> {
    profile: &'a PrinterProfile,
    layout: &'a CurrentLayout,
}

impl<'a> HeaderWriter<'a> {
    pub fn new(profile: &'a PrinterProfile, layout: &'a CurrentLayout) -> Self {
        Self { profile, layout }
    }

    /// Write the 12-byte file mark followed by the section pointer table.
    pub fn write_pointer_table(&self, w: &mut BinaryWriter) -> Result<()> {
        let layout = self.layout;

        w.write_fixed_ascii(tags::FILE_MARK, tags::TAG_WIDTH)?;
        w.write_u32(self.profile.file_version.major)?;
        w.write_u32(self.profile.file_version.minor)?;

        w.write_u32(to_u32(layout.header_addr, "HEADER address")?)?;
        // Undocumented word; differs between 515 and 516 files from the vendor
        // slicer but zero is accepted by firmware.
        w.write_u32(0)?;
        w.write_u32(to_u32(layout.preview_addr, "PREVIEW address")?)?;
        w.write_u32(to_u32(layout.preview_end_addr(), "PREVIEW end address")?)?;
        w.write_u32(to_u32(layout.layer_def_addr, "LAYERDEF address")?)?;
        w.write_u32(to_u32(layout.layer_def_end_addr(), "LAYERDEF end address")?)?;
        if let Some(machine_addr) = layout.machine_addr() {
            w.write_u32(to_u32(machine_addr, "MACHINE address")?)?;
        }
        w.write_u32(to_u32(layout.layer_data_addr, "LAYERDATA address")?)?;
        Ok(())
    }

    /// Write the HEADER section.
    pub fn write_header(&self, w: &mut BinaryWriter, exposure_s: f32) -> Result<()> {
        let revision = self.layout.revision;
        let is_516 = revision == FormatRevision::V516;
        let resolution = self.profile.pixel_resolution;

        w.write_fixed_ascii(tags::HEADER, tags::TAG_WIDTH)?;
        w.write_u32(if is_516 {
            current::HEADER_BODY_LEN_516
        } else {
            current::HEADER_BODY_LEN
        })?;

        w.write_f32(self.profile.pixel_pitch_um())?;
        w.write_f32(defaults::LAYER_HEIGHT_MM)?;
        // Global exposure and light-off defaults; the layer record carries the
        // real exposure.
        w.write_f32(0.0)?;
        w.write_f32(0.0)?;
        w.write_f32(exposure_s)?;
        w.write_f32(defaults::BOTTOM_LAYER_COUNT as f32)?;
        w.write_f32(defaults::LIFT_HEIGHT_MM)?;
        w.write_f32(defaults::LIFT_SPEED)?;
        w.write_f32(defaults::RETRACT_SPEED)?;
        // volume
        w.write_f32(0.0)?;
        w.write_u32(defaults::ANTIALIAS_COUNT)?;
        w.write_u32(resolution.width)?;
        w.write_u32(resolution.height)?;
        w.write_f32(defaults::WEIGHT)?;
        w.write_f32(defaults::PRICE)?;
        w.write_u32(match revision {
            FormatRevision::V1 => current::RESIN_TYPE_V1,
            _ => current::RESIN_TYPE,
        })?;
        // per-layer parameters disabled
        w.write_u32(0)?;
        w.write_u32(match revision {
            FormatRevision::V1 => 0,
            FormatRevision::V515 => current::HEADER_SENTINEL_515,
            FormatRevision::V516 => current::HEADER_SENTINEL_516,
        })?;
        // transition layer count
        w.write_u32(0)?;
        // padding
        w.write_u32(0)?;
        if is_516 {
            // two-stage motion control off
            w.write_u32(0)?;
        }
        Ok(())
    }
}

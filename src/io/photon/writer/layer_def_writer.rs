//! LAYERDEF and EXTRA sections of ANYCUBIC-tagged files.
//!
//! Files always describe exactly one printed layer.

use crate::error::Result;
use crate::io::binary_writer::BinaryWriter;
use crate::io::photon::constants::{current, defaults, tags};
use crate::io::photon::layout::CurrentLayout;

use super::to_u32;

/// Writer for the layer table and the 516 EXTRA motion block.
pub struct LayerDefWriter<'a> {
    layout: &'a CurrentLayout,
}

impl<'a> LayerDefWriter<'a> {
    pub fn new(layout: &'a CurrentLayout) -> Self {
        Self { layout }
    }

    /// Write LAYERDEF with a single layer record.
    pub fn write_layer_def(&self, w: &mut BinaryWriter, exposure_s: f32) -> Result<()> {
        let record_bytes = 4 + current::LAYER_RECORD_LEN as u32;

        w.write_fixed_ascii(tags::LAYERDEF, tags::TAG_WIDTH)?;
        w.write_u32(record_bytes)?;
        // layer count
        w.write_u32(1)?;

        w.write_u32(to_u32(self.layout.layer_data_addr, "layer data address")?)?;
        w.write_u32(to_u32(self.layout.layer_data_len, "layer data length")?)?;
        w.write_f32(defaults::LIFT_HEIGHT_MM)?;
        w.write_f32(defaults::LIFT_SPEED)?;
        w.write_f32(exposure_s)?;
        w.write_f32(defaults::LAYER_HEIGHT_MM)?;
        // reserved, zero in every observed version
        w.write_u32(0)?;
        w.write_u32(0)?;
        Ok(())
    }

    /// Write the EXTRA section: bottom and normal two-stage lift parameters.
    pub fn write_extra(&self, w: &mut BinaryWriter) -> Result<()> {
        w.write_fixed_ascii(tags::EXTRA, tags::TAG_WIDTH)?;
        w.write_u32(current::EXTRA_LENGTH_FIELD)?;

        // bottom layers, then normal layers
        for _ in 0..2 {
            w.write_u32(current::EXTRA_STAGE_COUNT)?;
            for _ in 0..current::EXTRA_STAGE_COUNT {
                w.write_f32(defaults::LIFT_HEIGHT_MM)?;
                w.write_f32(defaults::LIFT_SPEED)?;
                w.write_f32(defaults::RETRACT_SPEED)?;
            }
        }
        Ok(())
    }
}

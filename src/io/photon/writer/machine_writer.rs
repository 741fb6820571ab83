//! MACHINE section of version 516 files.

use crate::error::Result;
use crate::io::binary_writer::BinaryWriter;
use crate::io::photon::constants::{current, tags};
use crate::types::BedSize;

/// Writer for the printer identification block.
pub struct MachineWriter<'a> {
    printer_model: &'a str,
    bed: BedSize,
    major: u32,
}

impl<'a> MachineWriter<'a> {
    pub fn new(printer_model: &'a str, bed: BedSize, major: u32) -> Self {
        Self {
            printer_model,
            bed,
            major,
        }
    }

    pub fn write(&self, w: &mut BinaryWriter) -> Result<()> {
        w.write_fixed_ascii(tags::MACHINE, tags::TAG_WIDTH)?;
        w.write_u32(current::MACHINE_LEN as u32)?;
        w.write_fixed_ascii(self.printer_model, current::MACHINE_NAME_WIDTH)?;
        w.write_fixed_ascii(current::MACHINE_FORMAT_TAG, current::MACHINE_FORMAT_WIDTH)?;
        w.write_f32(self.bed.x)?;
        w.write_f32(self.bed.y)?;
        w.write_f32(self.bed.z)?;
        w.write_u32(self.major)?;
        w.write_u32(current::MACHINE_SENTINEL)?;
        Ok(())
    }
}

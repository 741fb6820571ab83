//! Legacy `.photon` file writer.
//!
//! Fixed 0x70-byte header, two identical previews, one 36-byte layer record
//! and the RLE layer data. Only the 1440x2560 panel exists in this family.

use log::{debug, info};

use crate::error::{PhotonError, Result};
use crate::io::binary_writer::BinaryWriter;
use crate::io::compression::{Rle7Encoder, RunLengthEncoder};
use crate::io::photon::constants::{defaults, legacy};
use crate::io::photon::layout::{legacy_sections, LegacyLayout};
use crate::io::photon::writer::preview_writer::PreviewWriter;
use crate::preview::{EncodedPreview, PreviewEncoding};
use crate::profile::{Encoding, PrinterProfile};
use crate::raster::{LayerRaster, PreviewRaster};
use crate::types::{BedSize, Resolution};

use super::to_u32;

/// The only panel resolution legacy files describe.
pub const LEGACY_RESOLUTION: Resolution =
    Resolution::new(legacy::RESOLUTION_X, legacy::RESOLUTION_Y);

/// Writer for legacy `.photon` files.
pub struct LegacyFormatWriter;

impl LegacyFormatWriter {
    /// Encode one layer into a complete `.photon` file image.
    pub fn write(
        layer: &[u8],
        preview: &[u8],
        exposure_s: f32,
        profile: &PrinterProfile,
    ) -> Result<Vec<u8>> {
        if profile.encoding != Encoding::Rle {
            return Err(PhotonError::UnsupportedEncoding(format!(
                "{} (legacy files only support RLE)",
                profile.encoding
            )));
        }
        if profile.pixel_resolution != LEGACY_RESOLUTION {
            return Err(PhotonError::UnsupportedResolution {
                expected: LEGACY_RESOLUTION,
                actual: profile.pixel_resolution,
            });
        }
        let layer = LayerRaster::new(layer, profile.pixel_resolution)?;
        let preview = PreviewRaster::new(preview, profile.preview_resolution)?;
        let bed = profile.physical_dimensions_mm.unwrap_or_else(|| {
            let [x, y, z] = legacy::DEFAULT_BED_MM;
            BedSize::new(x, y, z)
        });

        let blob = Rle7Encoder::with_max_run(legacy::RLE_RUN_CAP).encode(&layer.red_channel());
        let preview = EncodedPreview::encode(&preview, PreviewEncoding::Rgb565);
        debug!("legacy layer encoded to {} bytes", blob.len());

        let layout = LegacyLayout::plan(profile.preview_resolution, blob.len());
        let mut w = BinaryWriter::with_capacity(layout.total_len() as usize);

        Self::write_header(&mut w, &layout, bed, exposure_s)?;

        let previews = PreviewWriter::new(&preview);
        w.expect_position(layout.preview_addr, legacy_sections::PREVIEW)?;
        previews.write_legacy(&mut w, layout.preview_addr)?;
        w.expect_position(layout.preview_small_addr, legacy_sections::PREVIEW_SMALL)?;
        previews.write_legacy(&mut w, layout.preview_small_addr)?;

        w.expect_position(layout.layer_def_addr, legacy_sections::LAYERDEF)?;
        Self::write_layer_record(&mut w, &layout, exposure_s)?;

        w.expect_position(layout.layer_data_addr, legacy_sections::LAYERDATA)?;
        w.write_bytes(&blob)?;
        w.expect_position(layout.total_len(), "end of file")?;

        let bytes = w.into_inner();
        info!(
            "wrote photon file ({} bytes, layer data {} bytes)",
            bytes.len(),
            blob.len()
        );
        Ok(bytes)
    }

    fn write_header(
        w: &mut BinaryWriter,
        layout: &LegacyLayout,
        bed: BedSize,
        exposure_s: f32,
    ) -> Result<()> {
        w.write_u32(legacy::MAGIC)?;
        w.write_u32(legacy::VERSION)?;
        w.write_f32(bed.x)?;
        w.write_f32(bed.y)?;
        w.write_f32(bed.z)?;
        w.write_u32(0)?;
        w.write_u32(0)?;
        // total height of a one-layer print
        w.write_f32(legacy::LAYER_HEIGHT_MM)?;
        w.write_f32(legacy::LAYER_HEIGHT_MM)?;
        w.write_f32(exposure_s)?;
        // bottom exposure
        w.write_f32(exposure_s)?;
        w.write_f32(legacy::LIGHT_OFF_S)?;
        w.write_u32(defaults::BOTTOM_LAYER_COUNT)?;
        w.write_u32(legacy::RESOLUTION_X)?;
        w.write_u32(legacy::RESOLUTION_Y)?;
        w.write_u32(to_u32(layout.preview_addr, "preview address")?)?;
        w.write_u32(to_u32(layout.layer_def_addr, "layer table address")?)?;
        // layer count
        w.write_u32(1)?;
        w.write_u32(to_u32(layout.preview_small_addr, "small preview address")?)?;
        // print time in whole seconds
        w.write_u32((exposure_s + legacy::LIGHT_OFF_S) as u32)?;
        // projection is mirrored on LCD printers
        w.write_u32(1)?;
        // print parameters offset
        w.write_u32(0)?;
        w.write_u32(legacy::PRINT_PARAMETERS_SIZE)?;
        w.write_u32(defaults::ANTIALIAS_COUNT)?;
        w.write_u16(legacy::PWM_FULL)?;
        w.write_u16(legacy::PWM_FULL)?;
        // encryption key, slicer info offset, slicer info size
        w.write_u32(0)?;
        w.write_u32(0)?;
        w.write_u32(0)?;
        Ok(())
    }

    fn write_layer_record(w: &mut BinaryWriter, layout: &LegacyLayout, exposure_s: f32) -> Result<()> {
        w.write_f32(legacy::LAYER_HEIGHT_MM)?;
        w.write_f32(exposure_s)?;
        w.write_f32(legacy::LIGHT_OFF_S)?;
        w.write_u32(to_u32(layout.layer_data_addr, "layer data address")?)?;
        w.write_u32(to_u32(layout.layer_data_len, "layer data length")?)?;
        // page number
        w.write_u32(0)?;
        w.write_u32(legacy::LAYER_RECORD_LEN as u32)?;
        w.write_u32(0)?;
        w.write_u32(0)?;
        Ok(())
    }
}

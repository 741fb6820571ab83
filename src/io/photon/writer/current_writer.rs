//! ANYCUBIC-tagged file writer (versions 1 / 515 / 516).
//!
//! Validates the inputs, encodes the layer and preview, plans the layout and
//! then emits the sections in order, checking each one starts at its planned
//! offset.

use log::{debug, info};

use crate::error::Result;
use crate::io::binary_writer::BinaryWriter;
use crate::io::compression::encoder_for;
use crate::io::photon::constants::tags;
use crate::io::photon::layout::CurrentLayout;
use crate::io::photon::writer::header_writer::HeaderWriter;
use crate::io::photon::writer::layer_def_writer::LayerDefWriter;
use crate::io::photon::writer::machine_writer::MachineWriter;
use crate::io::photon::writer::preview_writer::PreviewWriter;
use crate::preview::{EncodedPreview, PreviewEncoding};
use crate::profile::PrinterProfile;
use crate::raster::{LayerRaster, PreviewRaster};

/// Writer for ANYCUBIC-tagged files.
///
/// # Usage
/// ```no_run
/// use photon_writer::models::PrinterModel;
/// use photon_writer::io::photon::writer::CurrentFormatWriter;
///
/// let profile = PrinterModel::PhotonMonoSe.profile();
/// let layer = vec![255u8; profile.pixel_resolution.rgba_len()];
/// let preview = vec![0u8; profile.preview_resolution.rgba_len()];
/// let bytes = CurrentFormatWriter::write(&layer, &preview, 8.0, &profile).unwrap();
/// std::fs::write("layer.pwms", &bytes).unwrap();
/// ```
pub struct CurrentFormatWriter;

impl CurrentFormatWriter {
    /// Encode one layer into a complete file image.
    ///
    /// `layer` and `preview` are RGBA buffers matching the profile's pixel and
    /// preview resolutions. Nothing is returned unless every section was
    /// written at its planned offset.
    pub fn write(
        layer: &[u8],
        preview: &[u8],
        exposure_s: f32,
        profile: &PrinterProfile,
    ) -> Result<Vec<u8>> {
        // Everything that can be rejected is rejected before encoding starts.
        let revision = profile.file_version.revision()?;
        let layer = LayerRaster::new(layer, profile.pixel_resolution)?;
        let preview = PreviewRaster::new(preview, profile.preview_resolution)?;
        let bed = if revision.has_machine_section() {
            Some(profile.require_physical_dimensions()?)
        } else {
            None
        };
        let encoder = encoder_for(profile.encoding);

        let blob = encoder.encode(&layer.red_channel());
        let preview = EncodedPreview::encode(&preview, PreviewEncoding::GreenOnly);
        debug!(
            "{} layer {} encoded to {} bytes",
            profile.encoding,
            layer.resolution(),
            blob.len()
        );

        let layout = CurrentLayout::for_revision(revision, profile.preview_resolution, blob.len());
        let mut w = BinaryWriter::with_capacity(layout.total_len() as usize);

        // -------------------------------------------------------------------
        // 1. File mark + pointer table, HEADER
        // -------------------------------------------------------------------
        let header = HeaderWriter::new(profile, &layout);
        header.write_pointer_table(&mut w)?;
        w.expect_position(layout.header_addr, tags::HEADER)?;
        header.write_header(&mut w, exposure_s)?;

        // -------------------------------------------------------------------
        // 2. PREVIEW
        // -------------------------------------------------------------------
        w.expect_position(layout.preview_addr, tags::PREVIEW)?;
        PreviewWriter::new(&preview).write_current(&mut w, revision, layout.preview_size)?;

        // -------------------------------------------------------------------
        // 3. LAYERDEF, then EXTRA + MACHINE for 516
        // -------------------------------------------------------------------
        w.expect_position(layout.layer_def_addr, tags::LAYERDEF)?;
        let layer_def = LayerDefWriter::new(&layout);
        layer_def.write_layer_def(&mut w, exposure_s)?;

        if let Some(bed) = bed {
            if let Some(extra_addr) = layout.extra_addr() {
                w.expect_position(extra_addr, tags::EXTRA)?;
            }
            layer_def.write_extra(&mut w)?;
            if let Some(machine_addr) = layout.machine_addr() {
                w.expect_position(machine_addr, tags::MACHINE)?;
            }
            MachineWriter::new(&profile.printer_model, bed, revision.major()).write(&mut w)?;
        }

        // -------------------------------------------------------------------
        // 4. LAYERDATA
        // -------------------------------------------------------------------
        w.expect_position(layout.layer_data_addr, tags::LAYERDATA)?;
        w.write_bytes(&blob)?;
        w.expect_position(layout.total_len(), "end of file")?;

        let bytes = w.into_inner();
        info!(
            "wrote {} file ({}, {} bytes, layer data {} bytes)",
            profile.file_format_extension,
            revision,
            bytes.len(),
            blob.len()
        );
        Ok(bytes)
    }
}

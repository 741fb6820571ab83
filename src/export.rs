//! Batch export of several layers.
//!
//! Each layer becomes its own single-layer file. Exports share nothing, so
//! they run on the rayon pool; results come back in input order.

use log::{debug, warn};
use rayon::prelude::*;

use crate::error::Result;
use crate::io::photon::PhotonWriter;
use crate::naming::OutputNamer;
use crate::profile::PrinterProfile;

/// One layer to export.
#[derive(Debug, Clone)]
pub struct LayerExport {
    /// Used to derive the output file name.
    pub name: String,
    /// RGBA layer raster at the profile's pixel resolution.
    pub layer: Vec<u8>,
    /// RGBA preview at the profile's preview resolution.
    pub preview: Vec<u8>,
    pub exposure_s: f32,
}

/// Outcome of one layer export.
#[derive(Debug)]
pub struct ExportedFile {
    pub file_name: String,
    pub result: Result<Vec<u8>>,
}

impl ExportedFile {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Export every layer with `profile`.
///
/// A failing layer only fails its own entry.
pub fn export_layers(layers: &[LayerExport], profile: &PrinterProfile) -> Vec<ExportedFile> {
    let mut namer = OutputNamer::new(&profile.file_format_extension);
    let names: Vec<String> = layers.iter().map(|l| namer.next_name(&l.name)).collect();

    debug!("exporting {} layers as .{}", layers.len(), profile.file_format_extension);

    layers
        .par_iter()
        .zip(names)
        .map(|(layer, file_name)| {
            let result = PhotonWriter::write(&layer.layer, &layer.preview, layer.exposure_s, profile);
            if let Err(e) = &result {
                warn!("{file_name}: {e}");
            }
            ExportedFile { file_name, result }
        })
        .collect()
}

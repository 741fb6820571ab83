//! Entry point for writing Photon files.

use crate::error::Result;
use crate::profile::{FormatFamily, PrinterProfile};

use super::{CurrentFormatWriter, LegacyFormatWriter};

/// Writes a single-layer print file for any supported printer.
///
/// The two file families share no layout; this only picks the right writer.
pub struct PhotonWriter;

impl PhotonWriter {
    /// Encode `layer` (RGBA, `pixel_resolution`) and `preview` (RGBA,
    /// `preview_resolution`) into the file format `profile` describes.
    pub fn write(
        layer: &[u8],
        preview: &[u8],
        exposure_s: f32,
        profile: &PrinterProfile,
    ) -> Result<Vec<u8>> {
        match profile.format_family {
            FormatFamily::Current => CurrentFormatWriter::write(layer, preview, exposure_s, profile),
            FormatFamily::Legacy => LegacyFormatWriter::write(layer, preview, exposure_s, profile),
        }
    }
}

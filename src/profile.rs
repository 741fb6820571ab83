//! Printer profiles.
//!
//! A [`PrinterProfile`] describes everything the writers need to know about
//! the target printer. It is built by the caller and passed by value into
//! each export; the encoder keeps no lookup table of its own.

use std::fmt;
use std::str::FromStr;

use crate::error::{PhotonError, Result};
use crate::types::{BedSize, FileVersion, Resolution};

/// Run-length encoding variant used for the layer image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// One byte per run: colour bit + 7-bit length.
    Rle,
    /// Two bytes per run: colour nibble + 12-bit length.
    Rle4,
}

impl Encoding {
    /// Name as used in printer tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rle => "RLE",
            Self::Rle4 => "RLE4",
        }
    }
}

impl FromStr for Encoding {
    type Err = PhotonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RLE" => Ok(Self::Rle),
            "RLE4" => Ok(Self::Rle4),
            _ => Err(PhotonError::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two structurally unrelated file families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatFamily {
    /// ANYCUBIC-tagged, section based, versions 1 / 515 / 516.
    Current,
    /// First-generation `.photon` layout with a fixed header.
    Legacy,
}

impl FormatFamily {
    /// Pick the family a file extension belongs to.
    pub fn for_extension(extension: &str) -> Self {
        if extension.trim_start_matches('.').eq_ignore_ascii_case("photon") {
            Self::Legacy
        } else {
            Self::Current
        }
    }
}

/// Immutable description of a target printer.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterProfile {
    /// Display name, written into the MACHINE section of 516 files.
    pub printer_model: String,
    pub file_version: FileVersion,
    /// Pixel pitch in millimetres.
    pub xy_resolution_mm: f64,
    pub pixel_resolution: Resolution,
    pub preview_resolution: Resolution,
    pub physical_dimensions_mm: Option<BedSize>,
    /// The rasteriser must rotate layer images by 180° for this printer.
    pub rotate_180: bool,
    pub encoding: Encoding,
    /// Extension without the leading dot (`pwms`, `pm3`, `photon`, ...).
    pub file_format_extension: String,
    pub format_family: FormatFamily,
}

impl PrinterProfile {
    /// Create a profile; the format family follows from the extension.
    pub fn new(
        file_version: impl Into<FileVersion>,
        xy_resolution_mm: f64,
        pixel_resolution: impl Into<Resolution>,
        preview_resolution: impl Into<Resolution>,
        encoding: Encoding,
        file_format_extension: &str,
    ) -> Self {
        let extension = file_format_extension.trim_start_matches('.').to_string();
        Self {
            printer_model: String::new(),
            file_version: file_version.into(),
            xy_resolution_mm,
            pixel_resolution: pixel_resolution.into(),
            preview_resolution: preview_resolution.into(),
            physical_dimensions_mm: None,
            rotate_180: false,
            encoding,
            format_family: FormatFamily::for_extension(&extension),
            file_format_extension: extension,
        }
    }

    pub fn with_printer_model(mut self, name: impl Into<String>) -> Self {
        self.printer_model = name.into();
        self
    }

    pub fn with_physical_dimensions(mut self, bed: BedSize) -> Self {
        self.physical_dimensions_mm = Some(bed);
        self
    }

    pub fn with_rotate_180(mut self, rotate: bool) -> Self {
        self.rotate_180 = rotate;
        self
    }

    /// Force a format family regardless of the extension.
    pub fn with_format_family(mut self, family: FormatFamily) -> Self {
        self.format_family = family;
        self
    }

    /// Pixel pitch in micrometres, as stored in the HEADER section.
    pub fn pixel_pitch_um(&self) -> f32 {
        (self.xy_resolution_mm * 1000.0) as f32
    }

    /// Physical bed size, failing if the profile does not define one.
    pub fn require_physical_dimensions(&self) -> Result<BedSize> {
        self.physical_dimensions_mm
            .ok_or_else(|| PhotonError::MissingPhysicalDimensions(self.printer_model.clone()))
    }
}

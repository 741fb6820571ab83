//! Known printer models.
//!
//! Each variant produces a fresh [`PrinterProfile`] on demand. Nothing in the
//! encoder consults this list; it exists so callers do not have to retype the
//! vendor parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::PhotonError;
use crate::profile::{Encoding, PrinterProfile};
use crate::types::BedSize;

/// Preview size shared by every supported model.
pub const DEFAULT_PREVIEW_RESOLUTION: (u32, u32) = (224, 168);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrinterModel {
    PhotonUltra,
    PhotonM3,
    PhotonM3Max,
    PhotonMonoSq,
    PhotonZero,
    PhotonMono4K,
    PhotonMonoX6K,
    PhotonMono,
    PhotonMonoSe,
    PhotonMonoX,
    PhotonS,
    Photon,
    PhotonX,
}

impl PrinterModel {
    pub const ALL: [PrinterModel; 13] = [
        Self::PhotonUltra,
        Self::PhotonM3,
        Self::PhotonM3Max,
        Self::PhotonMonoSq,
        Self::PhotonZero,
        Self::PhotonMono4K,
        Self::PhotonMonoX6K,
        Self::PhotonMono,
        Self::PhotonMonoSe,
        Self::PhotonMonoX,
        Self::PhotonS,
        Self::Photon,
        Self::PhotonX,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PhotonUltra => "AnyCubic Photon Ultra (.dlp)",
            Self::PhotonM3 => "AnyCubic Photon M3 (.pm3)",
            Self::PhotonM3Max => "AnyCubic Photon M3 Max (.pm3m)",
            Self::PhotonMonoSq => "AnyCubic Photon Mono SQ (.pwsq)",
            Self::PhotonZero => "AnyCubic Photon Zero (.pw0)",
            Self::PhotonMono4K => "AnyCubic Photon Mono 4K (.pwma)",
            Self::PhotonMonoX6K => "AnyCubic Photon Mono X 6K & Photon M3 Plus (.pwmb)",
            Self::PhotonMono => "AnyCubic Photon Mono (.pwmo)",
            Self::PhotonMonoSe => "AnyCubic Photon Mono SE (.pwms)",
            Self::PhotonMonoX => "AnyCubic Photon Mono X (.pwmx)",
            Self::PhotonS => "AnyCubic Photon & Photon S (.pws)",
            Self::Photon => "AnyCubic Photon (.photon)",
            Self::PhotonX => "AnyCubic Photon X (.pwx)",
        }
    }

    /// File extension written by this model, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::PhotonUltra => "dlp",
            Self::PhotonM3 => "pm3",
            Self::PhotonM3Max => "pm3m",
            // The vendor extension really is `pmsq`, not the `pwsq` in the name.
            Self::PhotonMonoSq => "pmsq",
            Self::PhotonZero => "pw0",
            Self::PhotonMono4K => "pwma",
            Self::PhotonMonoX6K => "pwmb",
            Self::PhotonMono => "pwmo",
            Self::PhotonMonoSe => "pwms",
            Self::PhotonMonoX => "pwmx",
            Self::PhotonS => "pws",
            Self::Photon => "photon",
            Self::PhotonX => "pwx",
        }
    }

    /// Build the profile for this model.
    pub fn profile(&self) -> PrinterProfile {
        let preview = DEFAULT_PREVIEW_RESOLUTION;
        let ext = self.extension();
        let profile = match self {
            Self::PhotonUltra => {
                PrinterProfile::new((515, 5), 0.080, (1280, 720), preview, Encoding::Rle4, ext)
                    .with_rotate_180(true)
            }
            Self::PhotonM3 => {
                PrinterProfile::new((516, 8), 0.040, (4096, 2560), preview, Encoding::Rle4, ext)
                    .with_physical_dimensions(BedSize::new(163.92, 102.4, 180.0))
                    .with_rotate_180(true)
            }
            Self::PhotonM3Max => {
                PrinterProfile::new((516, 8), 0.046, (6480, 3600), preview, Encoding::Rle4, ext)
                    .with_physical_dimensions(BedSize::new(298.08, 165.6, 300.0))
                    .with_rotate_180(true)
            }
            Self::PhotonMonoSq => {
                PrinterProfile::new((515, 5), 0.050, (2400, 2560), preview, Encoding::Rle4, ext)
            }
            Self::PhotonZero => {
                PrinterProfile::new((1, 4), 0.1155, (480, 854), preview, Encoding::Rle4, ext)
            }
            Self::PhotonMono4K => {
                PrinterProfile::new((516, 8), 0.035, (3840, 2400), preview, Encoding::Rle4, ext)
                    .with_physical_dimensions(BedSize::new(134.4, 84.0, 165.0))
                    .with_rotate_180(true)
            }
            Self::PhotonMonoX6K => {
                PrinterProfile::new((516, 8), 0.0344, (5760, 3600), preview, Encoding::Rle4, ext)
                    .with_physical_dimensions(BedSize::new(197.0, 122.8, 245.0))
                    .with_rotate_180(true)
            }
            Self::PhotonMono | Self::PhotonMonoSe => {
                PrinterProfile::new((1, 4), 0.051, (1620, 2560), preview, Encoding::Rle4, ext)
            }
            Self::PhotonMonoX => {
                PrinterProfile::new((1, 4), 0.050, (3840, 2400), preview, Encoding::Rle4, ext)
            }
            Self::PhotonS | Self::Photon => {
                PrinterProfile::new((1, 4), 0.047, (1440, 2560), preview, Encoding::Rle, ext)
                    .with_rotate_180(true)
            }
            Self::PhotonX => {
                PrinterProfile::new((1, 4), 0.075, (2560, 1600), preview, Encoding::Rle4, ext)
                    .with_rotate_180(true)
            }
        };
        profile.with_printer_model(self.display_name())
    }
}

impl fmt::Display for PrinterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PrinterModel {
    type Err = PhotonError;

    /// Look a model up by its file extension (`pwms`, `.pm3`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.trim_start_matches('.');
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.extension().eq_ignore_ascii_case(ext))
            .ok_or_else(|| PhotonError::Custom(format!("Unknown printer model: {s}")))
    }
}

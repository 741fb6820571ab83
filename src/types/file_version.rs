//! File version of the ANYCUBIC-tagged format
//!
//! The major number selects one of three incompatible binary layouts; the
//! minor number is recorded verbatim but never changes the layout.

use std::fmt;

use crate::error::{PhotonError, Result};

/// A `(major, minor)` file version pair as written into the pointer table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileVersion {
    pub major: u32,
    pub minor: u32,
}

impl FileVersion {
    /// Create a new file version
    #[inline]
    pub const fn new(major: u32, minor: u32) -> Self {
        FileVersion { major, minor }
    }

    /// Resolve the layout revision selected by the major number.
    pub fn revision(&self) -> Result<FormatRevision> {
        FormatRevision::from_version(*self)
    }
}

impl From<(u32, u32)> for FileVersion {
    fn from((major, minor): (u32, u32)) -> Self {
        FileVersion { major, minor }
    }
}

impl fmt::Display for FileVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Layout revision of the ANYCUBIC-tagged format.
///
/// Each revision fixes section addresses, the preview trailer, and whether
/// the EXTRA and MACHINE sections are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatRevision {
    /// Major version 1 (pwms, pwmx, pw0, ...)
    V1,
    /// Major version 515 (Photon Ultra, Mono SQ)
    V515,
    /// Major version 516 (M3 family, Mono 4K, Mono X 6K)
    V516,
}

impl FormatRevision {
    /// Map a file version onto its revision, rejecting unknown majors.
    pub fn from_version(version: FileVersion) -> Result<Self> {
        match version.major {
            1 => Ok(Self::V1),
            515 => Ok(Self::V515),
            516 => Ok(Self::V516),
            _ => Err(PhotonError::UnsupportedFormatVersion(version)),
        }
    }

    /// The major number written into the file.
    pub fn major(&self) -> u32 {
        match self {
            Self::V1 => 1,
            Self::V515 => 515,
            Self::V516 => 516,
        }
    }

    /// Whether EXTRA and MACHINE sections follow the layer definition.
    #[inline]
    pub fn has_machine_section(&self) -> bool {
        *self == Self::V516
    }

    /// Whether the preview is followed by the 28-byte trailer.
    #[inline]
    pub fn has_preview_trailer(&self) -> bool {
        *self != Self::V1
    }
}

impl fmt::Display for FormatRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.major())
    }
}

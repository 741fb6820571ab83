//! Photon file writers.
//!
//! - [`photon_writer`]: entry point, dispatches on the profile's format family
//! - [`current_writer`]: ANYCUBIC-tagged files (versions 1 / 515 / 516)
//! - [`legacy_writer`]: fixed-layout `.photon` files
//! - [`header_writer`]: pointer table and HEADER section
//! - [`preview_writer`]: preview sections of both families
//! - [`layer_def_writer`]: LAYERDEF and EXTRA sections
//! - [`machine_writer`]: MACHINE section (516 only)

pub mod current_writer;
pub mod header_writer;
pub mod layer_def_writer;
pub mod legacy_writer;
pub mod machine_writer;
pub mod photon_writer;
pub mod preview_writer;

pub use current_writer::CurrentFormatWriter;
pub use legacy_writer::LegacyFormatWriter;
pub use photon_writer::PhotonWriter;

use crate::error::{PhotonError, Result};

/// Narrow a planned address or length to the 32-bit on-disk field.
pub(crate) fn to_u32(value: u64, field: &str) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| PhotonError::Layout(format!("{field} {value:#X} does not fit in 32 bits")))
}

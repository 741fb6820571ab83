//! Photon / ANYCUBIC mask-projection file support.
//!
//! Write-only: [`writer::PhotonWriter`] turns one RGBA layer raster and one
//! RGBA preview into a complete file image for the profile's format family.

pub mod constants;
pub mod layout;
pub mod writer;

pub use layout::{CurrentLayout, FileSection, LegacyLayout};
pub use writer::{CurrentFormatWriter, LegacyFormatWriter, PhotonWriter};

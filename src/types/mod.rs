//! Core value types shared by the profile, planner, and writers

mod dimensions;
mod file_version;

pub use dimensions::{BedSize, Resolution};
pub use file_version::{FileVersion, FormatRevision};

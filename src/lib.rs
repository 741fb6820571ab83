//! # photon-writer
//!
//! A pure Rust library for writing ANYCUBIC Photon mask-projection files, the
//! single-layer exposure files consumed by resin (MSLA) printers.
//!
//! ## Features
//!
//! - ANYCUBIC-tagged files, versions 1, 515 and 516 (`.pwms`, `.pm3`, `.dlp`, ...)
//! - Legacy `.photon` files
//! - RLE and RLE4 layer compression
//! - Catalogue of known printer models
//! - Parallel batch export of several layers
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use photon_writer::{models::PrinterModel, PhotonWriter};
//!
//! let profile = PrinterModel::PhotonMonoX.profile();
//! let layer = vec![255u8; profile.pixel_resolution.rgba_len()];
//! let preview = vec![0u8; profile.preview_resolution.rgba_len()];
//!
//! let bytes = PhotonWriter::write(&layer, &preview, 8.0, &profile)?;
//! std::fs::write("layer.pwmx", &bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - `PrinterProfile` - Immutable description of the target printer
//! - `io::compression` - RLE / RLE4 run-length encoders
//! - `io::photon::layout` - Section offsets, planned before writing
//! - `io::photon::writer` - One writer per file family, plus section writers
//!
//! Writers are pure functions over in-memory buffers: they either return a
//! complete file image or an error, never a partial file.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod export;
pub mod io;
pub mod models;
pub mod naming;
pub mod preview;
pub mod profile;
pub mod raster;
pub mod types;

// Re-export commonly used types
pub use error::{PhotonError, Result};
pub use types::{BedSize, FileVersion, FormatRevision, Resolution};

pub use profile::{Encoding, FormatFamily, PrinterProfile};
pub use models::PrinterModel;
pub use export::{export_layers, ExportedFile, LayerExport};
pub use naming::OutputNamer;

// Re-export I/O types
pub use io::photon::{CurrentFormatWriter, LegacyFormatWriter, PhotonWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

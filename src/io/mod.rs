//! I/O module for writing resin printer files.

pub mod binary_writer;
pub mod compression;
pub mod photon;

pub use photon::PhotonWriter;

//! Error types for photon-writer

use std::io;
use thiserror::Error;

use crate::types::{FileVersion, Resolution};

/// Main error type for photon-writer operations
#[derive(Debug, Error)]
pub enum PhotonError {
    /// IO error occurred while writing into the output buffer
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A raster buffer does not match the size declared by the profile
    #[error("Input contract violation: {what} has {actual} bytes, expected {expected}")]
    InputContractViolation {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Encoding variant not implemented by the selected format writer
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// File version not among the supported layouts
    #[error("Unsupported format version: {0}")]
    UnsupportedFormatVersion(FileVersion),

    /// Pixel resolution not accepted by a fixed-resolution format
    #[error("Unsupported resolution: expected {expected}, got {actual}")]
    UnsupportedResolution {
        expected: Resolution,
        actual: Resolution,
    },

    /// Profile lacks the physical bed size required by its format version
    #[error("Missing physical dimensions for printer: {0}")]
    MissingPhysicalDimensions(String),

    /// A section did not end at its planned offset
    #[error("Layout error: {0}")]
    Layout(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for photon-writer operations
pub type Result<T> = std::result::Result<T, PhotonError>;

impl From<String> for PhotonError {
    fn from(s: String) -> Self {
        PhotonError::Custom(s)
    }
}

impl From<&str> for PhotonError {
    fn from(s: &str) -> Self {
        PhotonError::Custom(s.to_string())
    }
}

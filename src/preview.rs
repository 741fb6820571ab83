//! Preview/thumbnail pixel encoding.
//!
//! Both file families store the preview as one 16-bit word per pixel in
//! source scan order; they differ in which channels survive.

use crate::raster::PreviewRaster;

/// Packing used for 16-bit preview pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewEncoding {
    /// `R5 G5 B5` at bits 11, 6 and 0 (legacy `.photon` files).
    Rgb565,
    /// Green only, six bits at bit 5 (ANYCUBIC-tagged files).
    ///
    /// Firmware renders garbage when red or blue are populated, so both are
    /// always written as zero.
    GreenOnly,
}

impl PreviewEncoding {
    /// Pack a single pixel.
    #[inline]
    pub fn encode_pixel(&self, r: u8, g: u8, b: u8) -> u16 {
        match self {
            Self::Rgb565 => {
                ((r as u16 >> 3) << 11) | ((g as u16 >> 3) << 6) | (b as u16 >> 3)
            }
            Self::GreenOnly => (g as u16 >> 2) << 5,
        }
    }
}

/// An encoded preview ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPreview {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u16>,
}

impl EncodedPreview {
    /// Encode every pixel of `raster`.
    pub fn encode(raster: &PreviewRaster<'_>, encoding: PreviewEncoding) -> Self {
        let resolution = raster.resolution();
        let pixels = raster
            .pixels()
            .map(|(r, g, b)| encoding.encode_pixel(r, g, b))
            .collect();
        Self {
            width: resolution.width,
            height: resolution.height,
            pixels,
        }
    }

    /// Size of the pixel data in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * 2
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

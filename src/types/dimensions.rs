//! Pixel resolutions and physical bed sizes

use std::fmt;

/// Width and height of a raster, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Create a new resolution
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Resolution { width, height }
    }

    /// Number of pixels covered.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length of an RGBA buffer at this resolution.
    #[inline]
    pub fn rgba_len(&self) -> usize {
        self.pixel_count() * 4
    }
}

impl From<(u32, u32)> for Resolution {
    fn from((width, height): (u32, u32)) -> Self {
        Resolution { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Physical build volume in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BedSize {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl BedSize {
    /// Create a new bed size
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        BedSize { x, y, z }
    }
}

//! Borrowed RGBA raster views.
//!
//! Both views check their byte length against the declared resolution on
//! construction, so every writer can assume a well-formed buffer.

use crate::error::{PhotonError, Result};
use crate::types::Resolution;

const RGBA: usize = 4;

fn check_len(what: &'static str, data: &[u8], resolution: Resolution) -> Result<()> {
    let expected = resolution.rgba_len();
    if data.len() != expected {
        return Err(PhotonError::InputContractViolation {
            what,
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Full-resolution exposure mask for one printed layer.
#[derive(Debug, Clone, Copy)]
pub struct LayerRaster<'a> {
    data: &'a [u8],
    resolution: Resolution,
}

impl<'a> LayerRaster<'a> {
    pub fn new(data: &'a [u8], resolution: Resolution) -> Result<Self> {
        check_len("layer raster", data, resolution)?;
        Ok(Self { data, resolution })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Red channel of every pixel in scan order.
    ///
    /// This single channel is what gets binarised by the run-length encoders.
    pub fn red_channel(&self) -> Vec<u8> {
        self.data.chunks_exact(RGBA).map(|px| px[0]).collect()
    }
}

/// Thumbnail raster shown on the printer display.
#[derive(Debug, Clone, Copy)]
pub struct PreviewRaster<'a> {
    data: &'a [u8],
    resolution: Resolution,
}

impl<'a> PreviewRaster<'a> {
    pub fn new(data: &'a [u8], resolution: Resolution) -> Result<Self> {
        check_len("preview raster", data, resolution)?;
        Ok(Self { data, resolution })
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// `(r, g, b)` triples in scan order; alpha is ignored.
    pub fn pixels(&self) -> impl Iterator<Item = (u8, u8, u8)> + 'a {
        self.data.chunks_exact(RGBA).map(|px| (px[0], px[1], px[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_length_checked() {
        let data = vec![0u8; 60];
        let err = LayerRaster::new(&data, Resolution::new(4, 4)).unwrap_err();
        assert!(matches!(
            err,
            PhotonError::InputContractViolation { expected: 64, actual: 60, .. }
        ));
    }

    #[test]
    fn test_red_channel_extraction() {
        let data = [255, 0, 0, 255, 10, 255, 255, 255, 0, 1, 2, 3];
        let raster = LayerRaster::new(&data, Resolution::new(3, 1)).unwrap();
        assert_eq!(raster.red_channel(), vec![255, 10, 0]);
    }

    #[test]
    fn test_preview_pixels() {
        let data = [1, 2, 3, 4, 5, 6, 7, 8];
        let raster = PreviewRaster::new(&data, Resolution::new(2, 1)).unwrap();
        let px: Vec<_> = raster.pixels().collect();
        assert_eq!(px, vec![(1, 2, 3), (5, 6, 7)]);
    }

    #[test]
    fn test_empty_raster() {
        let raster = LayerRaster::new(&[], Resolution::new(0, 0)).unwrap();
        assert!(raster.red_channel().is_empty());
    }
}

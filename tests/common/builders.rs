//! RGBA raster builders.

#![allow(dead_code)]

use photon_writer::Resolution;

/// Every pixel set to `(r, g, b, 255)`.
pub fn solid(resolution: Resolution, r: u8, g: u8, b: u8) -> Vec<u8> {
    [r, g, b, 255].repeat(resolution.pixel_count())
}

pub fn white(resolution: Resolution) -> Vec<u8> {
    solid(resolution, 255, 255, 255)
}

pub fn black(resolution: Resolution) -> Vec<u8> {
    solid(resolution, 0, 0, 0)
}

/// RGBA raster whose red channel is `samples`; green and blue hold noise
/// that must not influence the layer encoding.
pub fn from_red(samples: &[u8]) -> Vec<u8> {
    samples
        .iter()
        .enumerate()
        .flat_map(|(i, &r)| [r, (i * 7) as u8, 255 - r, 255])
        .collect()
}

/// Left half white, right half black, per row.
pub fn half_split(resolution: Resolution) -> Vec<u8> {
    let mut data = Vec::with_capacity(resolution.rgba_len());
    for _ in 0..resolution.height {
        for x in 0..resolution.width {
            let v = if x < resolution.width / 2 { 255 } else { 0 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    data
}

//! An owned RGBA bitmap of the wheel.

use std::time::Instant;

use rayon::prelude::*;

use crate::{
    color::Component,
    models::Srgb,
    wheel::{Point, WheelGeometry},
};

/// Bytes per pixel.
const CHANNELS: usize = 4;

/// A square RGBA8 raster in row-major order. Alpha is always 255.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    size: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Evaluate the wheel profile at every pixel center. Rows are computed in
    /// parallel; the result does not depend on scheduling.
    pub fn synthesize(geometry: &WheelGeometry) -> Self {
        let start = Instant::now();

        let size = geometry.size();
        let stride = size as usize * CHANNELS;
        let mut pixels = vec![0; stride * size as usize];

        if stride > 0 {
            pixels
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
                        let center = Point::new(x as Component + 0.5, y as Component + 0.5);
                        let [red, green, blue] = geometry.color_at_point(center).to_bytes();
                        pixel.copy_from_slice(&[red, green, blue, u8::MAX]);
                    }
                });
        }

        tracing::debug!(size, elapsed = ?start.elapsed(), "synthesized wheel");

        Self { size, pixels }
    }

    /// The side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The RGBA value of a pixel, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }

        let offset = (y as usize * self.size as usize + x as usize) * CHANNELS;
        let p = &self.pixels[offset..offset + CHANNELS];
        Some([p[0], p[1], p[2], p[3]])
    }

    /// The color of a pixel without its alpha, or `None` outside the raster.
    pub fn color(&self, x: u32, y: u32) -> Option<Srgb> {
        self.pixel(x, y)
            .map(|[red, green, blue, _]| Srgb::from_bytes([red, green, blue]))
    }

    /// The raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the raster, returning the raw RGBA bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_and_alpha() {
        let geometry = WheelGeometry::new(64);
        let raster = Raster::synthesize(&geometry);
        assert_eq!(raster.size(), 64);
        assert_eq!(raster.as_bytes().len(), 64 * 64 * 4);
        assert!(raster.as_bytes().chunks_exact(4).all(|p| p[3] == 255));
        assert_eq!(raster.pixel(64, 0), None);
        assert_eq!(raster.pixel(0, 64), None);
    }

    #[test]
    fn corners_and_hole_are_white() {
        let raster = Raster::synthesize(&WheelGeometry::new(64));
        assert_eq!(raster.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(63, 63), Some([255, 255, 255, 255]));
        assert_eq!(raster.pixel(32, 32), Some([255, 255, 255, 255]));
    }

    #[test]
    fn pixels_agree_with_analytic_color() {
        let geometry = WheelGeometry::new(48);
        let raster = Raster::synthesize(&geometry);
        for y in 0..48 {
            for x in 0..48 {
                let center = Point::new(x as Component + 0.5, y as Component + 0.5);
                assert_eq!(
                    raster.color(x, y),
                    Some(geometry.color_at_point(center)),
                    "({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn empty_geometry_yields_empty_raster() {
        let raster = Raster::synthesize(&WheelGeometry::new(0));
        assert_eq!(raster.size(), 0);
        assert!(raster.into_bytes().is_empty());
    }
}

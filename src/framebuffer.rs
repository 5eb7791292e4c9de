//! In-memory RGBA framebuffer, one pixel per grid cell.
//!
//! The framebuffer is the default [`PixelSink`]: writes outside the buffer
//! are silently dropped, which is the only clipping the rasterizers rely on.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::render::PixelSink;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// RGBA framebuffer addressed by grid cell.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes each.
    pixels: Vec<u8>,
    /// Stride in bytes (may include padding for alignment).
    stride: usize,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(96, 54).unwrap();
    /// assert_eq!(fb.width(), 96);
    /// assert_eq!(fb.height(), 54);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * 4;
        let stride = (row_bytes + ROW_ALIGNMENT - 1) & !(ROW_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = (self.width as usize) * 4;

        for row in self.pixels.chunks_exact_mut(self.stride) {
            for chunk in row[..row_bytes].chunks_exact_mut(4) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a pixel. `None` when out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.pixel_index(x, y)?;
        let mut rgba = [0u8; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Set the color at a pixel. Does nothing when out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Count the pixels that hold exactly `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let target = color.to_array();
        let row_bytes = (self.width as usize) * 4;

        self.pixels
            .chunks_exact(self.stride)
            .flat_map(|row| row[..row_bytes].chunks_exact(4))
            .filter(|px| **px == target)
            .count()
    }

    /// Byte index of a pixel, or `None` outside the buffer.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((y as usize) * self.stride + (x as usize) * 4)
    }

    /// Pixel data without stride padding, as PNG expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for row in self.pixels.chunks_exact(self.stride) {
            compact.extend_from_slice(&row[..row_bytes]);
        }
        compact
    }

    /// Compact pixel data with every pixel blown up to a `scale x scale`
    /// block, so one grid cell becomes one visible square.
    #[must_use]
    pub fn to_scaled_pixels(&self, scale: u32) -> Vec<u8> {
        let scale = scale.max(1) as usize;
        let row_bytes = (self.width as usize) * 4;
        let mut out = Vec::with_capacity(row_bytes * scale * scale * (self.height as usize));

        for row in self.pixels.chunks_exact(self.stride) {
            let mut scaled_row = Vec::with_capacity(row_bytes * scale);
            for px in row[..row_bytes].chunks_exact(4) {
                for _ in 0..scale {
                    scaled_row.extend_from_slice(px);
                }
            }
            for _ in 0..scale {
                out.extend_from_slice(&scaled_row);
            }
        }
        out
    }
}

impl PixelSink for Framebuffer {
    fn set(&mut self, x: i32, y: i32, color: Rgba) {
        self.set_pixel(x, y, color);
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_framebuffer() {
        let fb = Framebuffer::new(100, 50).unwrap();
        assert_eq!(fb.width(), 100);
        assert_eq!(fb.height(), 50);
        assert_eq!(fb.pixel_count(), 5000);
        assert!(fb.stride() >= 400);
        assert_eq!(fb.stride() % ROW_ALIGNMENT, 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Framebuffer::new(0, 100).is_err());
        assert!(Framebuffer::new(100, 0).is_err());
        assert!(Framebuffer::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 100);
        assert_eq!(fb.get_pixel(9, 9), Some(Rgba::RED));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(100, 100), None);
        assert_eq!(fb.get_pixel(-1, 0), None);
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set(-1, 0, Rgba::RED);
        fb.set(0, -1, Rgba::RED);
        fb.set(4, 0, Rgba::RED);
        fb.set(0, 4, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_compact_pixels_strip_padding() {
        let mut fb = Framebuffer::new(3, 2).unwrap();
        fb.clear(Rgba::WHITE);
        let compact = fb.to_compact_pixels();
        assert_eq!(compact.len(), 3 * 2 * 4);
        assert!(compact.iter().all(|&b| b == 255));
    }

    #[test]
    fn test_scaled_pixels() {
        let mut fb = Framebuffer::new(2, 1).unwrap();
        fb.clear(Rgba::BLACK);
        fb.set_pixel(1, 0, Rgba::RED);

        let scaled = fb.to_scaled_pixels(3);
        // 6 x 3 pixels
        assert_eq!(scaled.len(), 6 * 3 * 4);
        let px = |x: usize, y: usize| &scaled[(y * 6 + x) * 4..(y * 6 + x) * 4 + 4];
        assert_eq!(px(2, 2), &Rgba::BLACK.to_array());
        assert_eq!(px(3, 0), &Rgba::RED.to_array());
        assert_eq!(px(5, 2), &Rgba::RED.to_array());
    }
}

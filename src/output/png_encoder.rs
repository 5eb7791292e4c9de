//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::CellMapping;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for framebuffer output.
///
/// Each framebuffer pixel is one grid cell; the encoder blows every cell up
/// to a `cell_size x cell_size` block of image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngEncoder {
    mapping: CellMapping,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PngEncoder {
    /// Encoder that writes one image pixel per cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mapping: CellMapping::new(1),
        }
    }

    /// Set the side of one cell in image pixels. Zero is treated as one.
    #[must_use]
    pub fn cell_size(mut self, cell_size: u32) -> Self {
        self.mapping = CellMapping::new(cell_size);
        self
    }

    /// Image dimensions for a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the scaled image would not fit
    /// in `u32` dimensions.
    pub fn image_size(&self, fb: &Framebuffer) -> Result<(u32, u32)> {
        let scale = self.mapping.cell_size();
        match (fb.width().checked_mul(scale), fb.height().checked_mul(scale)) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(Error::InvalidDimensions {
                width: fb.width(),
                height: fb.height(),
            }),
        }
    }

    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.encode(fb, BufWriter::new(file))?;
        log::info!("wrote {}", path.display());
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(&self, fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(&self, fb: &Framebuffer, out: W) -> Result<()> {
        let (width, height) = self.image_size(fb)?;

        let mut encoder = png::Encoder::new(out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let data = match self.mapping.cell_size() {
            1 => fb.to_compact_pixels(),
            scale => fb.to_scaled_pixels(scale),
        };
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    const PNG_MAGIC: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

    fn header_size(bytes: &[u8]) -> (u32, u32) {
        // IHDR follows the signature, chunk length and type
        let w = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let h = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (w, h)
    }

    #[test]
    fn test_png_to_bytes() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        fb.clear(Rgba::RED);

        let bytes = PngEncoder::new().to_bytes(&fb).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
        assert_eq!(header_size(&bytes), (10, 10));
    }

    #[test]
    fn test_png_scaled_cells() {
        let fb = Framebuffer::new(7, 3).unwrap();
        let bytes = PngEncoder::new().cell_size(20).to_bytes(&fb).unwrap();
        assert_eq!(header_size(&bytes), (140, 60));
    }

    #[test]
    fn test_png_zero_cell_size_is_one() {
        let fb = Framebuffer::new(4, 4).unwrap();
        assert_eq!(PngEncoder::new().cell_size(0).image_size(&fb).unwrap(), (4, 4));
    }

    #[test]
    fn test_png_oversized_scale_is_rejected() {
        let fb = Framebuffer::new(100, 1).unwrap();
        let err = PngEncoder::new().cell_size(u32::MAX).image_size(&fb).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }
}

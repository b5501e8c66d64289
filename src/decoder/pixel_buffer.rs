//! Owned RGBA8 pixel grid
//!
//! Both the decoded atlas and every cropped sprite are stored as a
//! `PixelBuffer`: row-major, four bytes per pixel in R, G, B, A order,
//! with (0,0) at the top-left corner.

use image::RgbaImage;

use crate::pvr::errors::{AtlasError, AtlasResult};

/// Number of bytes per canonical RGBA8 pixel
pub const CHANNELS: usize = 4;

/// Row-major grid of RGBA8 pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw RGBA8 bytes
    ///
    /// # Arguments
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `data` - Exactly `width * height * 4` bytes, row-major
    ///
    /// # Returns
    /// The buffer, or an error if the byte count does not match the dimensions
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> AtlasResult<Self> {
        let expected = width as u64 * height as u64 * CHANNELS as u64;
        if data.len() as u64 != expected {
            return Err(AtlasError::GenericError(format!(
                "Pixel buffer {}x{} needs {} bytes, got {}",
                width, height, expected, data.len()
            )));
        }

        Ok(PixelBuffer { width, height, data })
    }

    /// Builds a buffer from a list of row-major pixels
    pub fn from_pixels(width: u32, height: u32, pixels: &[[u8; 4]]) -> AtlasResult<Self> {
        Self::from_raw(width, height, pixels.concat())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels in the buffer
    pub fn len(&self) -> usize {
        self.data.len() / CHANNELS
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA8 bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at (x, y), or None outside the grid
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let mut pixel = [0u8; 4];
        pixel.copy_from_slice(&self.data[start..start + CHANNELS]);
        Some(pixel)
    }

    /// Bytes of row `y`
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }

    /// Iterator over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Number of bytes in one row
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Converts to an `image` buffer for encoding
    pub fn to_rgba_image(&self) -> AtlasResult<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            AtlasError::ImageError(format!(
                "Cannot build {}x{} image from {} bytes",
                self.width, self.height, self.data.len()
            ))
        })
    }
}

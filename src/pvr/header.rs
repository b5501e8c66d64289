//! Texture header data structures

use std::fmt;

use crate::pvr::constants::{formats, header};

/// Raw pixel encodings supported by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// 8 bits per channel, 4 bytes per pixel
    Rgba8888,
    /// 4 bits per channel, 2 bytes per pixel
    Rgba4444,
}

impl PixelFormat {
    /// Resolve a combined channel/bitness string such as "rgba8888"
    pub fn from_format_string(format: &str) -> Option<Self> {
        match format {
            formats::RGBA8888 => Some(PixelFormat::Rgba8888),
            formats::RGBA4444 => Some(PixelFormat::Rgba4444),
            _ => None,
        }
    }

    /// Returns the format string for this encoding
    pub fn name(&self) -> &'static str {
        match self {
            PixelFormat::Rgba8888 => formats::RGBA8888,
            PixelFormat::Rgba4444 => formats::RGBA4444,
        }
    }

    /// Number of bytes one pixel occupies in the stream
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgba8888 => 4,
            PixelFormat::Rgba4444 => 2,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated structural metadata of a decompressed texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHeader {
    /// Pixel encoding of the data region
    pub pixel_format: PixelFormat,
    /// Atlas width in pixels
    pub width: u32,
    /// Atlas height in pixels
    pub height: u32,
    /// Vendor metadata bytes between the header and the pixel data
    pub metadata_size: u32,
}

impl TextureHeader {
    /// Number of pixels in the atlas
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Number of bytes the pixel region must contain
    ///
    /// Computed in u64 so it cannot overflow for any pair of u32 dimensions.
    pub fn pixel_data_len(&self) -> u64 {
        self.pixel_count() * self.pixel_format.bytes_per_pixel() as u64
    }

    /// Offset of the first pixel byte within the decompressed buffer
    pub fn pixel_data_offset(&self) -> u64 {
        header::SIZE + self.metadata_size as u64
    }
}

impl fmt::Display for TextureHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Texture Header:")?;
        writeln!(f, "  Pixel format: {}", self.pixel_format)?;
        writeln!(f, "  Dimensions: {}x{}", self.width, self.height)?;
        writeln!(f, "  Metadata size: {} bytes", self.metadata_size)?;
        write!(f, "  Pixel data: {} bytes at offset {}", self.pixel_data_len(), self.pixel_data_offset())
    }
}

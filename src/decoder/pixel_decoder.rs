//! Pixel decoding strategies
//!
//! Each supported raw encoding has a strategy that turns one packed pixel
//! into canonical RGBA8.

/// Strategy trait for decoding one raw pixel encoding
pub trait PixelDecoder: Send + Sync {
    /// Decode one packed pixel
    ///
    /// `raw` holds exactly `bytes_per_pixel()` bytes in stream order.
    fn decode_pixel(&self, raw: &[u8]) -> [u8; 4];

    /// Number of stream bytes per pixel
    fn bytes_per_pixel(&self) -> usize;

    /// Get the name of this encoding
    fn name(&self) -> &'static str;
}

/// 8 bits per channel; bytes are already in R, G, B, A order
pub struct Rgba8888Decoder;

impl PixelDecoder for Rgba8888Decoder {
    fn decode_pixel(&self, raw: &[u8]) -> [u8; 4] {
        [raw[0], raw[1], raw[2], raw[3]]
    }

    fn bytes_per_pixel(&self) -> usize {
        4
    }

    fn name(&self) -> &'static str {
        "RGBA8888"
    }
}

/// Which half of a byte a 4-bit channel is stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nibble {
    High,
    Low,
}

/// Source of each output channel (R, G, B, A) for the 4-bit encoding,
/// as (index of the stream byte, nibble within it)
///
/// This is the container's packed order, not a natural RGBA layout:
/// the second byte carries red and green, the first blue and alpha.
pub const RGBA4444_LAYOUT: [(usize, Nibble); 4] = [
    (1, Nibble::High), // R
    (1, Nibble::Low),  // G
    (0, Nibble::High), // B
    (0, Nibble::Low),  // A
];

/// Scale factor from a 4-bit value to 8 bits (15 * 17 = 255)
pub const NIBBLE_SCALE: u8 = 17;

/// Expand a 4-bit channel to 8 bits
pub fn expand_nibble(byte: u8, nibble: Nibble) -> u8 {
    let value = match nibble {
        Nibble::High => byte >> 4,
        Nibble::Low => byte & 0x0F,
    };
    value * NIBBLE_SCALE
}

/// 4 bits per channel, two bytes per pixel
pub struct Rgba4444Decoder;

impl PixelDecoder for Rgba4444Decoder {
    fn decode_pixel(&self, raw: &[u8]) -> [u8; 4] {
        RGBA4444_LAYOUT.map(|(index, nibble)| expand_nibble(raw[index], nibble))
    }

    fn bytes_per_pixel(&self) -> usize {
        2
    }

    fn name(&self) -> &'static str {
        "RGBA4444"
    }
}

//! Raw pixel decoding
//!
//! This module turns the packed pixel region of a texture into canonical
//! RGBA8 using one strategy per supported encoding.

mod pixel_buffer;
mod pixel_decoder;
mod factory;

pub use pixel_buffer::{PixelBuffer, CHANNELS};
pub use pixel_decoder::{
    expand_nibble, Nibble, PixelDecoder, Rgba4444Decoder, Rgba8888Decoder, NIBBLE_SCALE,
    RGBA4444_LAYOUT,
};
pub use factory::{decode_pixels, PixelDecoderFactory};

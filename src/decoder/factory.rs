//! Factory for creating pixel decoders and the region decoding loop

use log::debug;

use crate::io::seekable::SeekableReader;
use crate::pvr::errors::AtlasResult;
use crate::pvr::header::{PixelFormat, TextureHeader};
use crate::pvr::validation;
use super::pixel_buffer::{PixelBuffer, CHANNELS};
use super::pixel_decoder::{PixelDecoder, Rgba4444Decoder, Rgba8888Decoder};

/// Factory for creating pixel decoders
pub struct PixelDecoderFactory;

impl PixelDecoderFactory {
    /// Create a decoder for the given pixel format
    pub fn create_decoder(format: PixelFormat) -> Box<dyn PixelDecoder> {
        match format {
            PixelFormat::Rgba8888 => Box::new(Rgba8888Decoder),
            PixelFormat::Rgba4444 => Box::new(Rgba4444Decoder),
        }
    }
}

/// Decodes the pixel region that follows a parsed header
///
/// Consumes exactly `width * height * bytes_per_pixel` bytes; any bytes
/// after the region are left unread.
///
/// # Arguments
/// * `reader` - Reader positioned at the first pixel byte
/// * `header` - The validated texture header
///
/// # Returns
/// The atlas as a row-major RGBA8 buffer, or a truncated data error
pub fn decode_pixels(reader: &mut dyn SeekableReader, header: &TextureHeader) -> AtlasResult<PixelBuffer> {
    let decoder = PixelDecoderFactory::create_decoder(header.pixel_format);
    let needed = header.pixel_data_len();
    validation::ensure_remaining(reader, needed)?;

    debug!("Decoding {}x{} {} atlas ({} bytes)",
           header.width, header.height, decoder.name(), needed);

    let mut raw = vec![0u8; needed as usize];
    reader.read_exact(&mut raw)?;

    let mut data = Vec::with_capacity(header.pixel_count() as usize * CHANNELS);
    for packed in raw.chunks_exact(decoder.bytes_per_pixel()) {
        data.extend_from_slice(&decoder.decode_pixel(packed));
    }

    PixelBuffer::from_raw(header.width, header.height, data)
}

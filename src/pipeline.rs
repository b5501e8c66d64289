//! Atlas decoding pipeline
//!
//! Decompressor -> HeaderParser -> PixelDecoder -> RegionExtractor. Every
//! stage owns the buffer it produces and hands it to the next one; no
//! state survives between calls, so independent sprites can be decoded
//! on separate threads.

use log::debug;

use crate::compression::Decompressor;
use crate::decoder::{self, PixelBuffer};
use crate::extractor::{self, Rect};
use crate::pvr::errors::AtlasResult;
use crate::pvr::header::TextureHeader;
use crate::pvr::reader::HeaderParser;

/// Decodes a ZPVR container into a full atlas
///
/// # Arguments
/// * `compressed` - Raw container bytes, starting with "ZPVR"
///
/// # Returns
/// The atlas as a row-major RGBA8 buffer
pub fn decode_atlas(compressed: &[u8]) -> AtlasResult<PixelBuffer> {
    let mut cursor = Decompressor::new().open(compressed)?;
    let header = HeaderParser::parse(&mut cursor)?;
    let atlas = decoder::decode_pixels(&mut cursor, &header)?;
    debug!("Decoded {}x{} atlas", atlas.width(), atlas.height());
    Ok(atlas)
}

/// Crops one sprite frame out of a decoded atlas
pub fn extract_sprite(atlas: &PixelBuffer, frame: Rect) -> AtlasResult<PixelBuffer> {
    extractor::extract_region(atlas, frame)
}

/// Decompresses a container and parses its header without decoding pixels
pub fn inspect_container(compressed: &[u8]) -> AtlasResult<TextureHeader> {
    let mut cursor = Decompressor::new().open(compressed)?;
    HeaderParser::parse(&mut cursor)
}

//! Fixture builders for ZPVR containers

use byteorder::{LittleEndian, WriteBytesExt};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use std::io::Write;

use crate::pvr::constants::{container, header};

/// Channel word for "rgba"
pub const RGBA_CHANNELS: u32 = u32::from_le_bytes(*b"rgba");

/// Bitness word for [8, 8, 8, 8]
pub const BITS_8888: u32 = u32::from_le_bytes([8, 8, 8, 8]);

/// Bitness word for [4, 4, 4, 4]
pub const BITS_4444: u32 = u32::from_le_bytes([4, 4, 4, 4]);

/// Header fields in stream order; defaults describe a valid 1x1 RGBA8888 texture
#[derive(Debug, Clone)]
pub struct HeaderFields {
    pub version: u32,
    pub flags: u32,
    pub format_channels: u32,
    pub format_bitness: u32,
    pub color_space: u32,
    pub channel_type: u32,
    pub height: u32,
    pub width: u32,
    pub depth: u32,
    pub num_surfaces: u32,
    pub num_faces: u32,
    pub mip_map_count: u32,
    pub metadata_size: u32,
}

impl Default for HeaderFields {
    fn default() -> Self {
        HeaderFields {
            version: header::VERSION,
            flags: header::FLAGS_PREMULTIPLIED,
            format_channels: RGBA_CHANNELS,
            format_bitness: BITS_8888,
            color_space: 0,
            channel_type: 0,
            height: 1,
            width: 1,
            depth: 1,
            num_surfaces: 1,
            num_faces: 1,
            mip_map_count: 1,
            metadata_size: 0,
        }
    }
}

impl HeaderFields {
    pub fn rgba8888(width: u32, height: u32) -> Self {
        HeaderFields { width, height, ..Default::default() }
    }

    pub fn rgba4444(width: u32, height: u32) -> Self {
        HeaderFields { width, height, format_bitness: BITS_4444, ..Default::default() }
    }

    /// Serializes the 13 header fields
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        for value in [
            self.version,
            self.flags,
            self.format_channels,
            self.format_bitness,
            self.color_space,
            self.channel_type,
            self.height,
            self.width,
            self.depth,
            self.num_surfaces,
            self.num_faces,
            self.mip_map_count,
            self.metadata_size,
        ] {
            buffer.write_u32::<LittleEndian>(value).unwrap();
        }
        buffer
    }
}

/// Decompressed texture: header, `metadata_size` filler bytes, then pixels
pub fn raw_texture(fields: &HeaderFields, pixels: &[u8]) -> Vec<u8> {
    let mut buffer = fields.to_bytes();
    buffer.extend(std::iter::repeat(0xAB).take(fields.metadata_size as usize));
    buffer.extend_from_slice(pixels);
    buffer
}

/// zlib-compresses a payload
pub fn deflate(payload: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).unwrap();
    encoder.finish().unwrap()
}

/// Wraps a decompressed payload in a ZPVR container
pub fn zpvr(payload: &[u8]) -> Vec<u8> {
    let mut buffer = container::MAGIC.to_vec();
    buffer.extend_from_slice(&deflate(payload));
    buffer
}

/// Complete container for the given header and pixel bytes
pub fn zpvr_texture(fields: &HeaderFields, pixels: &[u8]) -> Vec<u8> {
    zpvr(&raw_texture(fields, pixels))
}

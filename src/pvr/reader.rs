//! Texture header parser
//!
//! Reads the fixed sequence of little-endian header fields from a
//! decompressed texture, validates each against the supported profile,
//! and leaves the reader positioned at the first pixel byte.

use log::{debug, error};
use std::io::SeekFrom;

use crate::io::byte_order::read_u32_le;
use crate::io::seekable::SeekableReader;
use crate::pvr::constants::{fields, header};
use crate::pvr::errors::{AtlasError, AtlasResult};
use crate::pvr::header::{PixelFormat, TextureHeader};
use crate::pvr::validation;

/// Parser for the fixed texture header
pub struct HeaderParser;

impl HeaderParser {
    /// Parses and validates the texture header
    ///
    /// Fields are consumed in stream order. Note that height precedes
    /// width. On success the reader has skipped the vendor metadata block
    /// and points at pixel data.
    ///
    /// # Arguments
    /// * `reader` - Reader positioned at the start of the decompressed buffer
    ///
    /// # Returns
    /// The validated header, or the first field that violates the profile
    pub fn parse(reader: &mut dyn SeekableReader) -> AtlasResult<TextureHeader> {
        debug!("HeaderParser::parse starting");
        validation::ensure_remaining(reader, header::SIZE)?;

        let version = read_u32_le(reader)?;
        validation::validate_version(version)?;

        let flags = read_u32_le(reader)?;
        validation::expect_value(fields::FLAGS, flags, header::FLAGS_PREMULTIPLIED)?;

        let format_channels = read_u32_le(reader)?;
        let format_bitness = read_u32_le(reader)?;
        validation::expect_nonzero(fields::FORMAT_CHANNELS, format_channels)?;

        let format = format_string(format_channels, format_bitness);
        debug!("Pixel format string: {}", format);
        let pixel_format = PixelFormat::from_format_string(&format).ok_or_else(|| {
            error!("Unsupported pixel format {}", format);
            AtlasError::FormatError {
                field: fields::PIXEL_FORMAT,
                expected: format!("{} or {}", PixelFormat::Rgba8888, PixelFormat::Rgba4444),
                actual: format.clone(),
            }
        })?;

        let color_space = read_u32_le(reader)?;
        validation::expect_value(fields::COLOR_SPACE, color_space, header::COLOR_SPACE_LINEAR)?;

        let channel_type = read_u32_le(reader)?;
        validation::expect_value(fields::CHANNEL_TYPE, channel_type, header::CHANNEL_TYPE_UBYTE_NORM)?;

        let height = read_u32_le(reader)?;
        let width = read_u32_le(reader)?;

        let depth = read_u32_le(reader)?;
        validation::expect_value(fields::DEPTH, depth, header::DEPTH)?;

        let num_surfaces = read_u32_le(reader)?;
        validation::expect_value(fields::NUM_SURFACES, num_surfaces, header::NUM_SURFACES)?;

        let num_faces = read_u32_le(reader)?;
        validation::expect_value(fields::NUM_FACES, num_faces, header::NUM_FACES)?;

        let mip_map_count = read_u32_le(reader)?;
        validation::expect_value(fields::MIP_MAP_COUNT, mip_map_count, header::MIP_MAP_COUNT)?;

        let metadata_size = read_u32_le(reader)?;
        validation::ensure_remaining(reader, metadata_size as u64)?;
        reader.seek(SeekFrom::Current(metadata_size as i64))?;

        let texture_header = TextureHeader {
            pixel_format,
            width,
            height,
            metadata_size,
        };
        debug!("Parsed header: {}x{} {}, {} metadata bytes",
               width, height, pixel_format, metadata_size);

        Ok(texture_header)
    }
}

/// Builds the combined format string from the two format words
///
/// The channel word holds four ASCII letters in stream order; each byte
/// of the bitness word is a bit count printed in decimal, so
/// `[8, 8, 8, 8]` becomes "8888".
pub fn format_string(format_channels: u32, format_bitness: u32) -> String {
    let channels: String = format_channels
        .to_le_bytes()
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect();
    let bitness: String = format_bitness
        .to_le_bytes()
        .iter()
        .map(|b| b.to_string())
        .collect();

    format!("{}{}", channels, bitness)
}

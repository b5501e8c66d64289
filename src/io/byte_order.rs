//! Byte order handling for texture headers
//!
//! Texture headers are always stored little-endian. The version word is
//! the only hint about the writer's byte order, so it is used to tell a
//! byte-swapped container apart from an unrelated one in error reports.

use byteorder::{LittleEndian, ReadBytesExt};
use std::io::ErrorKind;

use crate::io::seekable::{self, SeekableReader};
use crate::pvr::errors::{AtlasError, AtlasResult};

/// Byte order implied by a header version word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (the only one decoded)
    LittleEndian,
    /// Big-endian byte order
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from a version word read as little-endian
    ///
    /// # Arguments
    /// * `version` - The raw version word
    /// * `expected` - The version constant of the container
    ///
    /// # Returns
    /// The matching byte order, or None if the word matches neither
    pub fn detect(version: u32, expected: u32) -> Option<Self> {
        if version == expected {
            Some(ByteOrder::LittleEndian)
        } else if version == expected.swap_bytes() {
            Some(ByteOrder::BigEndian)
        } else {
            None
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "little-endian",
            ByteOrder::BigEndian => "big-endian",
        }
    }
}

/// Read one little-endian u32 header field
///
/// Running out of bytes is reported as truncated data rather than as a
/// bare I/O error.
pub fn read_u32_le(reader: &mut dyn SeekableReader) -> AtlasResult<u32> {
    let position = reader.stream_position()?;
    match reader.read_u32::<LittleEndian>() {
        Ok(value) => Ok(value),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            let available = seekable::stream_len(reader)?;
            Err(AtlasError::TruncatedData {
                needed: position + 4,
                available,
            })
        }
        Err(e) => Err(AtlasError::IoError(e)),
    }
}

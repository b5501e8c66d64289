//! Texture header validation utilities
//!
//! Each check compares one header field against the single supported
//! texture profile and returns early with a structured format error.

use log::{debug, error};

use crate::io::byte_order::ByteOrder;
use crate::io::seekable::{self, SeekableReader};
use crate::pvr::constants::{fields, header};
use crate::pvr::errors::{AtlasError, AtlasResult};

/// Validates that a field holds exactly the expected value
///
/// # Arguments
/// * `field` - Name of the field for error messages
/// * `actual` - The value read from the stream
/// * `expected` - The only value the profile accepts
pub fn expect_value(field: &'static str, actual: u32, expected: u32) -> AtlasResult<()> {
    if actual != expected {
        error!("Header field {} is {}, expected {}", field, actual, expected);
        return Err(AtlasError::FormatError {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    Ok(())
}

/// Validates that a field is non-zero
pub fn expect_nonzero(field: &'static str, actual: u32) -> AtlasResult<()> {
    if actual == 0 {
        error!("Header field {} is zero", field);
        return Err(AtlasError::FormatError {
            field,
            expected: "non-zero".to_string(),
            actual: "0".to_string(),
        });
    }

    Ok(())
}

/// Validates the version word
///
/// A byte-swapped version word is reported as such so a big-endian
/// container is not mistaken for random data.
pub fn validate_version(version: u32) -> AtlasResult<()> {
    match ByteOrder::detect(version, header::VERSION) {
        Some(ByteOrder::LittleEndian) => {
            debug!("Header version {:#010x} ({})", version, ByteOrder::LittleEndian.name());
            Ok(())
        },
        Some(order) => {
            error!("Header version {:#010x} indicates a {} stream", version, order.name());
            Err(AtlasError::FormatError {
                field: fields::VERSION,
                expected: format!("{:#010x}", header::VERSION),
                actual: format!("{:#010x} ({} stream)", version, order.name()),
            })
        },
        None => {
            error!("Unknown header version {:#010x}", version);
            Err(AtlasError::FormatError {
                field: fields::VERSION,
                expected: format!("{:#010x}", header::VERSION),
                actual: format!("{:#010x}", version),
            })
        }
    }
}

/// Validates that the stream holds at least `needed` more bytes
///
/// # Arguments
/// * `reader` - The seekable reader positioned at the data in question
/// * `needed` - Number of bytes that must follow the read position
///
/// # Returns
/// Ok if enough bytes remain, a truncated data error otherwise
pub fn ensure_remaining(reader: &mut dyn SeekableReader, needed: u64) -> AtlasResult<()> {
    let position = reader.stream_position()?;
    let remaining = seekable::remaining_len(reader)?;

    if remaining < needed {
        error!("Need {} bytes at offset {}, only {} remain", needed, position, remaining);
        return Err(AtlasError::TruncatedData {
            needed: position.saturating_add(needed),
            available: position + remaining,
        });
    }

    Ok(())
}

//! Seekable reader trait and stream size helpers
//!
//! This module provides a unified trait for readers that support both
//! reading and seeking operations.

use std::io::{Read, Seek, SeekFrom};

/// Trait for readers that can both read and seek
///
/// This trait combines the Read and Seek traits for use with
/// the in-memory cursors handed between pipeline stages.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}

/// Total length of the stream, leaving the read position untouched
pub fn stream_len(reader: &mut dyn SeekableReader) -> std::io::Result<u64> {
    let current_position = reader.stream_position()?;
    let len = reader.seek(SeekFrom::End(0))?;
    reader.seek(SeekFrom::Start(current_position))?;
    Ok(len)
}

/// Number of bytes between the read position and the end of the stream
pub fn remaining_len(reader: &mut dyn SeekableReader) -> std::io::Result<u64> {
    let current_position = reader.stream_position()?;
    let len = stream_len(reader)?;
    Ok(len.saturating_sub(current_position))
}

//! ZPVR container unwrapping
//!
//! A ZPVR file is the four byte tag "ZPVR" followed by a compressed
//! texture. This module strips the tag and inflates the remainder.

use log::{debug, error};
use std::io::Cursor;

use crate::pvr::constants::container;
use crate::pvr::errors::{AtlasError, AtlasResult};
use super::deflate::DeflateHandler;
use super::handler::CompressionHandler;

/// Decompressor for ZPVR containers
pub struct Decompressor {
    handler: Box<dyn CompressionHandler>,
}

impl Decompressor {
    /// Create a decompressor using the Deflate handler
    pub fn new() -> Self {
        Decompressor {
            handler: Box::new(DeflateHandler),
        }
    }

    /// Checks the magic tag and inflates the payload
    ///
    /// The tag is checked before anything is allocated.
    ///
    /// # Arguments
    /// * `data` - Raw container bytes, starting with the magic tag
    ///
    /// # Returns
    /// The decompressed texture bytes
    pub fn decompress(&self, data: &[u8]) -> AtlasResult<Vec<u8>> {
        let payload = strip_magic(data)?;
        debug!("Decompressing {} byte payload with {}", payload.len(), self.handler.name());
        self.handler.decompress(payload)
    }

    /// Decompresses the container into a cursor positioned at offset 0
    pub fn open(&self, data: &[u8]) -> AtlasResult<Cursor<Vec<u8>>> {
        Ok(Cursor::new(self.decompress(data)?))
    }
}

impl Default for Decompressor {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the payload following the magic tag
pub fn strip_magic(data: &[u8]) -> AtlasResult<&[u8]> {
    match data.strip_prefix(&container::MAGIC[..]) {
        Some(payload) => Ok(payload),
        None => {
            let found = &data[..data.len().min(container::MAGIC_LEN)];
            error!("Missing ZPVR magic, found {:02X?}", found);
            Err(AtlasError::CorruptContainer(format!(
                "expected magic {:?}, found {:02X?}",
                String::from_utf8_lossy(&container::MAGIC),
                found
            )))
        }
    }
}

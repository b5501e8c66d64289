//! Compression handler trait definition

use crate::pvr::errors::AtlasResult;

/// Strategy trait for handling compressed texture payloads
pub trait CompressionHandler: Send + Sync {
    /// Decompress the data
    fn decompress(&self, data: &[u8]) -> AtlasResult<Vec<u8>>;

    /// Get the name of this compression method
    fn name(&self) -> &'static str;
}

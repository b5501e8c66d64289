//! Handler for zlib-wrapped Deflate payloads

use flate2::{Decompress, FlushDecompress, Status};
use log::debug;

use crate::pvr::errors::{AtlasError, AtlasResult};
use super::handler::CompressionHandler;

/// Growth step for the output buffer while inflating
const INFLATE_CHUNK: usize = 64 * 1024;

/// Deflate (zlib) decompression handler
///
/// The stream must reach its end marker and consume every input byte.
pub struct DeflateHandler;

impl CompressionHandler for DeflateHandler {
    fn decompress(&self, data: &[u8]) -> AtlasResult<Vec<u8>> {
        let mut inflater = Decompress::new(true);
        let mut output = Vec::with_capacity(data.len().saturating_mul(4).max(INFLATE_CHUNK));

        loop {
            if output.len() == output.capacity() {
                output.reserve(INFLATE_CHUNK);
            }

            let consumed = inflater.total_in() as usize;
            let produced = inflater.total_out();
            let status = inflater
                .decompress_vec(&data[consumed..], &mut output, FlushDecompress::None)
                .map_err(|e| AtlasError::CorruptContainer(format!("Invalid deflate stream: {}", e)))?;

            match status {
                Status::StreamEnd => break,
                Status::Ok | Status::BufError => {
                    let stalled = inflater.total_in() as usize == consumed
                        && inflater.total_out() == produced;
                    if stalled {
                        return Err(AtlasError::CorruptContainer(format!(
                            "Deflate stream ended early after {} of {} bytes",
                            consumed,
                            data.len()
                        )));
                    }
                }
            }
        }

        let consumed = inflater.total_in() as usize;
        if consumed != data.len() {
            return Err(AtlasError::CorruptContainer(format!(
                "{} trailing bytes after end of deflate stream",
                data.len() - consumed
            )));
        }

        debug!("Inflated {} bytes into {} bytes", consumed, output.len());
        Ok(output)
    }

    fn name(&self) -> &'static str {
        "Deflate"
    }
}

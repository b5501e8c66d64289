//! Sprite extraction from a decoded atlas

use log::{debug, error};

use crate::decoder::{PixelBuffer, CHANNELS};
use crate::pvr::errors::{AtlasError, AtlasResult};
use super::region::Rect;

/// Copies one rectangle out of a decoded atlas
///
/// Output pixel (x, y) is atlas pixel (rect.x + x, rect.y + y). The
/// result is a fresh buffer; nothing is shared with the atlas.
///
/// # Arguments
/// * `atlas` - The decoded atlas
/// * `rect` - Rectangle to copy
///
/// # Returns
/// A `rect.w` x `rect.h` buffer, or an out-of-bounds error if the
/// rectangle does not fit inside the atlas in either axis
pub fn extract_region(atlas: &PixelBuffer, rect: Rect) -> AtlasResult<PixelBuffer> {
    if !rect.fits_within(atlas.width(), atlas.height()) {
        error!("Frame {:?} exceeds atlas bounds {}x{}", rect, atlas.width(), atlas.height());
        return Err(AtlasError::OutOfBounds {
            rect,
            atlas_width: atlas.width(),
            atlas_height: atlas.height(),
        });
    }

    debug!("Extracting region: x={}, y={}, width={}, height={}",
           rect.x, rect.y, rect.w, rect.h);

    let row_start = rect.x as usize * CHANNELS;
    let row_len = rect.w as usize * CHANNELS;
    let mut data = Vec::with_capacity(rect.area() as usize * CHANNELS);

    for y in rect.y..rect.y + rect.h {
        let row = atlas.row(y).ok_or_else(|| {
            AtlasError::GenericError(format!("Atlas row {} missing", y))
        })?;
        data.extend_from_slice(&row[row_start..row_start + row_len]);
    }

    PixelBuffer::from_raw(rect.w, rect.h, data)
}

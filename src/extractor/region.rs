//! Rectangle structure for defining a sprite's area in an atlas
//!
//! Coordinates are in pixels and follow the usual image coordinate system
//! where (0,0) is the top-left corner of the atlas.

use serde::Deserialize;

/// Sub-region of an atlas (in pixel coordinates)
///
/// Bounds are not checked on construction; the extractor checks them
/// against the atlas it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct Rect {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width in pixels
    pub w: u32,

    /// Height in pixels
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Rect { x, y, w, h }
    }

    /// Rectangle covering a whole `width` x `height` image
    pub fn full(width: u32, height: u32) -> Self {
        Rect::new(0, 0, width, height)
    }

    /// Get the rightmost X coordinate (exclusive)
    ///
    /// Widened to u64 so `x + w` never wraps.
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.w as u64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.h as u64
    }

    /// Whether the rectangle lies inside a `width` x `height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.end_x() <= width as u64 && self.end_y() <= height as u64
    }

    /// Number of pixels covered
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
}

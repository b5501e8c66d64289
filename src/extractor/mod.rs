//! Sprite extraction from decoded atlases
//!
//! This module defines the frame rectangle and the copy that turns one
//! rectangle of an atlas into a standalone pixel buffer.

mod region;
mod region_extractor;

// Public exports
pub use region::Rect;
pub use region_extractor::extract_region;

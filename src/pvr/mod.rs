//! Texture container parsing module
//!
//! This module provides the header structures, constants, validation
//! and error types for ZPVR compressed textures.

pub mod errors;
pub mod header;
pub mod reader;
pub(crate) mod constants;
pub(crate) mod validation;
#[cfg(test)]
pub(crate) mod tests;

pub use errors::{AtlasError, AtlasResult};
pub use header::{PixelFormat, TextureHeader};
pub use reader::HeaderParser;

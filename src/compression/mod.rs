//! Compression handling for texture containers
//!
//! This module implements the container unwrapping and the decompression
//! strategy used for the texture payload.

mod handler;
mod deflate;
mod container;

pub use handler::CompressionHandler;
pub use deflate::DeflateHandler;
pub use container::{Decompressor, strip_magic};

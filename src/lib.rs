pub mod io;
pub mod pvr;
pub mod utils;
pub mod compression;
pub mod decoder;
pub mod extractor;
pub mod descriptor;
pub mod pipeline;
pub mod config;
pub mod batch;
pub mod commands;
pub mod api;

pub use crate::api::SpriteKit;

pub use pipeline::{decode_atlas, extract_sprite, inspect_container};
pub use pvr::{AtlasError, AtlasResult, PixelFormat, TextureHeader};
pub use decoder::PixelBuffer;
pub use extractor::Rect;
pub use descriptor::{SpriteDescriptor, SpriteFrame};
pub use config::UnpackConfig;

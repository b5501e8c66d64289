//! Sprite descriptor handling

mod sprite_descriptor;

pub use sprite_descriptor::{SpriteDescriptor, SpriteFrame};

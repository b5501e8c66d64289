//! Sprite descriptor (`.spr`) loading
//!
//! Descriptors are JSON documents of the form
//!
//! ```json
//! { "resource": { "meta": { "image": "atlas.zpvr" },
//!                 "frames": [ { "frame": { "x": 0, "y": 0, "w": 16, "h": 16 } } ] } }
//! ```

use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::extractor::Rect;
use crate::pvr::errors::{AtlasError, AtlasResult};

#[derive(Debug, Deserialize)]
struct SpriteResourceFile {
    resource: SpriteResource,
}

#[derive(Debug, Deserialize)]
struct SpriteResource {
    meta: SpriteMeta,
    frames: Vec<FrameEntry>,
}

#[derive(Debug, Deserialize)]
struct SpriteMeta {
    image: String,
}

#[derive(Debug, Deserialize)]
struct FrameEntry {
    frame: Rect,
}

/// One sprite's rectangle inside its atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub rect: Rect,
}

/// Decoded sprite descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteDescriptor {
    /// Atlas file name, relative to the descriptor's directory
    pub image_file_name: String,
    /// Frames in descriptor order
    pub frames: Vec<SpriteFrame>,
}

impl SpriteDescriptor {
    /// Parses a descriptor from JSON text
    ///
    /// # Arguments
    /// * `json` - Descriptor text
    ///
    /// # Returns
    /// The descriptor, or a descriptor error if the JSON is malformed, a
    /// rectangle has negative or missing fields, or no frames are listed
    pub fn from_json(json: &str) -> AtlasResult<Self> {
        let file: SpriteResourceFile = serde_json::from_str(json)
            .map_err(|e| AtlasError::DescriptorError(format!("Invalid descriptor JSON: {}", e)))?;

        let resource = file.resource;
        if resource.meta.image.trim().is_empty() {
            return Err(AtlasError::DescriptorError("Descriptor has no image file name".to_string()));
        }
        if resource.frames.is_empty() {
            return Err(AtlasError::DescriptorError("Descriptor lists no frames".to_string()));
        }

        let frames: Vec<SpriteFrame> = resource
            .frames
            .into_iter()
            .map(|entry| SpriteFrame { rect: entry.frame })
            .collect();
        debug!("Descriptor for {} with {} frames", resource.meta.image, frames.len());

        Ok(SpriteDescriptor {
            image_file_name: resource.meta.image,
            frames,
        })
    }

    /// Loads a descriptor file from disk
    pub fn load(path: &Path) -> AtlasResult<Self> {
        info!("Loading sprite descriptor: {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            AtlasError::DescriptorError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    /// Returns the frame at `index`
    pub fn frame(&self, index: usize) -> AtlasResult<&SpriteFrame> {
        self.frames.get(index).ok_or_else(|| {
            AtlasError::DescriptorError(format!(
                "Frame index {} out of range ({} frames)",
                index,
                self.frames.len()
            ))
        })
    }

    /// Resolves the atlas file against the descriptor's directory
    pub fn image_path(&self, descriptor_dir: &Path) -> PathBuf {
        descriptor_dir.join(&self.image_file_name)
    }
}

//! Single sprite unpacking job

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::descriptor::SpriteDescriptor;
use crate::pipeline;
use crate::pvr::errors::{AtlasError, AtlasResult};
use crate::utils::logger::Logger;

/// Extension appended to the descriptor file name for the output image
pub const OUTPUT_EXTENSION: &str = "png";

/// One descriptor to unpack
///
/// Carries every path the job touches so jobs can run side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteJob {
    /// Path of the `.spr` descriptor
    pub descriptor_path: PathBuf,
    /// Directory the PNG is written to
    pub output_dir: PathBuf,
    /// Frame of the descriptor to extract
    pub frame_index: usize,
}

impl SpriteJob {
    /// Create a new job
    pub fn new(descriptor_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>, frame_index: usize) -> Self {
        SpriteJob {
            descriptor_path: descriptor_path.into(),
            output_dir: output_dir.into(),
            frame_index,
        }
    }

    /// Path of the PNG this job writes, e.g. `out/ui/button.spr.png`
    pub fn output_path(&self) -> AtlasResult<PathBuf> {
        let file_name = self
            .descriptor_path
            .file_name()
            .ok_or_else(|| {
                AtlasError::DescriptorError(format!(
                    "Descriptor path {} has no file name",
                    self.descriptor_path.display()
                ))
            })?
            .to_string_lossy();

        Ok(self.output_dir.join(format!("{}.{}", file_name, OUTPUT_EXTENSION)))
    }

    /// Runs the job: descriptor, atlas decode, crop, PNG
    ///
    /// # Arguments
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// The path of the written PNG
    pub fn run(&self, logger: &Logger) -> AtlasResult<PathBuf> {
        info!("Processing: {}", self.descriptor_path.display());

        let descriptor = SpriteDescriptor::load(&self.descriptor_path)?;
        let frame = *descriptor.frame(self.frame_index)?;

        let descriptor_dir = self.descriptor_path.parent().unwrap_or_else(|| Path::new(""));
        let image_path = descriptor.image_path(descriptor_dir);
        debug!("Reading atlas {}", image_path.display());
        let compressed = fs::read(&image_path).map_err(|e| {
            AtlasError::DescriptorError(format!("Cannot read atlas {}: {}", image_path.display(), e))
        })?;

        let atlas = pipeline::decode_atlas(&compressed)?;
        let sprite = pipeline::extract_sprite(&atlas, frame.rect)?;

        let output_path = self.output_path()?;
        fs::create_dir_all(&self.output_dir)?;
        sprite.to_rgba_image()?.save(&output_path)?;

        info!("Wrote {}x{} sprite to {}", sprite.width(), sprite.height(), output_path.display());
        logger.log(&format!("Unpacked {} -> {}",
                            self.descriptor_path.display(), output_path.display()))?;

        Ok(output_path)
    }
}

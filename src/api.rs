use std::fs;
use std::path::{Path, PathBuf};
use log::info;

use crate::batch::{self, BatchReport, BatchRunner, SpriteJob};
use crate::config::UnpackConfig;
use crate::decoder::PixelBuffer;
use crate::pipeline;
use crate::pvr::errors::AtlasResult;
use crate::pvr::header::TextureHeader;
use crate::utils::logger::Logger;

/// Main interface to the SpriteKit library
pub struct SpriteKit {
    logger: Logger,
}

impl SpriteKit {
    /// Create a new SpriteKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a job log file; None keeps no log file
    ///
    /// # Returns
    /// A SpriteKit instance or an error if the log file cannot be created
    pub fn new(log_file: Option<&str>) -> AtlasResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(SpriteKit { logger })
    }

    /// Logger used for job records
    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Describe the texture header of a ZPVR file
    ///
    /// # Arguments
    /// * `input_path` - Path to the ZPVR file
    ///
    /// # Returns
    /// Human readable header summary or an error
    pub fn inspect(&self, input_path: &str) -> AtlasResult<String> {
        let compressed = fs::read(input_path)?;
        let header = pipeline::inspect_container(&compressed)?;

        Ok(format_inspection(input_path, compressed.len(), &header))
    }

    /// Decode a ZPVR file into its full atlas
    pub fn decode_atlas_file(&self, input_path: &Path) -> AtlasResult<PixelBuffer> {
        info!("Decoding atlas {}", input_path.display());
        let compressed = fs::read(input_path)?;
        pipeline::decode_atlas(&compressed)
    }

    /// Unpack one frame of one descriptor
    ///
    /// # Arguments
    /// * `descriptor_path` - Path to the `.spr` descriptor
    /// * `output_dir` - Directory the PNG is written to
    /// * `frame_index` - Frame to extract
    ///
    /// # Returns
    /// Path of the written PNG
    pub fn unpack_sprite(&self, descriptor_path: &Path, output_dir: &Path, frame_index: usize) -> AtlasResult<PathBuf> {
        SpriteJob::new(descriptor_path, output_dir, frame_index).run(&self.logger)
    }

    /// Unpack every descriptor under the configured source root
    ///
    /// Individual failures are collected in the report rather than
    /// aborting the run.
    pub fn unpack_all(&self, config: &UnpackConfig, show_progress: bool) -> AtlasResult<BatchReport> {
        config.validate()?;
        let jobs = batch::discover_jobs(config)?;
        info!("Discovered {} descriptors under {}", jobs.len(), config.source_root.display());

        BatchRunner::new(&self.logger, config)
            .with_progress(show_progress)
            .run(&jobs)
    }
}

/// Formats the inspection summary printed for a ZPVR file
pub fn format_inspection(input_path: &str, compressed_len: usize, header: &TextureHeader) -> String {
    let mut result = String::from("ZPVR Analysis Results:\n");
    result.push_str(&format!("  File: {}\n", input_path));
    result.push_str(&format!("  Compressed size: {} bytes\n", compressed_len));
    result.push_str(&header.to_string());
    result.push('\n');
    result
}

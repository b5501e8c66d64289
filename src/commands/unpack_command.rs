//! Single sprite unpacking command

use clap::ArgMatches;
use log::info;
use std::path::PathBuf;

use crate::batch::SpriteJob;
use crate::commands::command_traits::Command;
use crate::config::UnpackConfig;
use crate::pvr::errors::{AtlasError, AtlasResult};
use crate::utils::logger::Logger;

/// Command for unpacking one descriptor
pub struct UnpackCommand<'a> {
    /// The job built from the arguments
    job: SpriteJob,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> UnpackCommand<'a> {
    /// Create a new unpack command
    ///
    /// The PNG goes to `--output` if given, otherwise next to the descriptor.
    pub fn new(args: &ArgMatches, config: &UnpackConfig, logger: &'a Logger) -> AtlasResult<Self> {
        let descriptor_path = args.get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| AtlasError::GenericError("Missing descriptor file".to_string()))?;

        let output_dir = match args.get_one::<String>("output") {
            Some(output) => PathBuf::from(output),
            None => descriptor_path.parent().map(PathBuf::from).unwrap_or_default(),
        };

        info!("Descriptor: {}, output directory: {}, frame: {}",
              descriptor_path.display(), output_dir.display(), config.frame_index);

        Ok(UnpackCommand {
            job: SpriteJob::new(descriptor_path, output_dir, config.frame_index),
            logger,
        })
    }
}

impl<'a> Command for UnpackCommand<'a> {
    fn execute(&self) -> AtlasResult<()> {
        let output = self.job.run(self.logger)?;
        println!("Wrote {}", output.display());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "unpack"
    }
}

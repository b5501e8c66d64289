//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod inspect_command;
pub mod unpack_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use inspect_command::InspectCommand;
pub use unpack_command::UnpackCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use log::info;
use std::path::{Path, PathBuf};

use crate::config::UnpackConfig;
use crate::utils::logger::Logger;
use crate::pvr::errors::{AtlasError, AtlasResult};

/// Factory for creating command instances based on CLI arguments
pub struct SpritekitCommandFactory;

impl SpritekitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SpritekitCommandFactory
    }
}

impl Default for SpritekitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for SpritekitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> AtlasResult<Box<dyn Command + 'a>> {
        if args.get_flag("inspect") {
            return Ok(Box::new(InspectCommand::new(args, logger)?));
        }

        let config = config_from_args(args)?;
        let single_descriptor = args.get_one::<String>("input")
            .map(|input| Path::new(input).is_file())
            .unwrap_or(false);

        if single_descriptor {
            Ok(Box::new(UnpackCommand::new(args, &config, logger)?))
        } else {
            let show_progress = !args.get_flag("no-progress");
            Ok(Box::new(BatchCommand::new(config, show_progress, logger)))
        }
    }
}

/// Builds the run configuration: defaults, then `--config`, then flags
pub fn config_from_args(args: &ArgMatches) -> AtlasResult<UnpackConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => UnpackConfig::load(Path::new(path))?,
        None => UnpackConfig::default(),
    };

    if let Some(input) = args.get_one::<String>("input") {
        config.source_root = PathBuf::from(input);
    }
    if let Some(output) = args.get_one::<String>("output") {
        config.output_root = PathBuf::from(output);
    }
    if let Some(ext) = args.get_one::<String>("ext") {
        config.descriptor_extension = ext.trim_start_matches('.').to_string();
    }
    if let Some(frame) = args.get_one::<String>("frame") {
        config.frame_index = frame.parse::<usize>()
            .map_err(|_| AtlasError::ConfigError(format!("Invalid frame index: {}", frame)))?;
    }
    if let Some(threads) = args.get_one::<String>("threads") {
        let threads = threads.parse::<usize>()
            .map_err(|_| AtlasError::ConfigError(format!("Invalid thread count: {}", threads)))?;
        config.threads = Some(threads);
    }
    if args.get_flag("fail-fast") {
        config.fail_fast = true;
    }

    config.validate()?;
    info!("Configuration: {:?}", config);
    Ok(config)
}

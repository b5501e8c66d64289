//! Texture inspection command
//!
//! Prints the decoded header of a ZPVR file without decoding its pixels.

use clap::ArgMatches;
use log::info;
use std::fs;

use crate::api;
use crate::commands::command_traits::Command;
use crate::pipeline;
use crate::pvr::errors::{AtlasError, AtlasResult};
use crate::utils::logger::Logger;

/// Command for printing a texture header
pub struct InspectCommand<'a> {
    /// Path to the ZPVR file
    input_file: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InspectCommand<'a> {
    /// Create a new inspect command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> AtlasResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| AtlasError::GenericError("Missing input file to inspect".to_string()))?
            .clone();

        Ok(InspectCommand { input_file, logger })
    }
}

impl<'a> Command for InspectCommand<'a> {
    fn execute(&self) -> AtlasResult<()> {
        info!("Inspecting {}", self.input_file);

        let compressed = fs::read(&self.input_file)?;
        let header = pipeline::inspect_container(&compressed)?;

        print!("{}", api::format_inspection(&self.input_file, compressed.len(), &header));

        self.logger.log(&format!("Inspected {}: {}x{} {}",
                                 self.input_file, header.width, header.height, header.pixel_format))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "inspect"
    }
}

//! Batch unpacking command
//!
//! Unpacks every descriptor under a source directory into a mirrored
//! output tree.

use log::{error, info};

use crate::batch::{self, BatchRunner};
use crate::commands::command_traits::Command;
use crate::config::UnpackConfig;
use crate::pvr::errors::{AtlasError, AtlasResult};
use crate::utils::logger::Logger;

/// Command for unpacking a directory of descriptors
pub struct BatchCommand<'a> {
    /// Run settings
    config: UnpackConfig,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    pub fn new(config: UnpackConfig, show_progress: bool, logger: &'a Logger) -> Self {
        BatchCommand { config, show_progress, logger }
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn execute(&self) -> AtlasResult<()> {
        info!("Unpacking {} into {}",
              self.config.source_root.display(), self.config.output_root.display());

        let jobs = batch::discover_jobs(&self.config)?;
        let report = BatchRunner::new(self.logger, &self.config)
            .with_progress(self.show_progress)
            .run(&jobs)?;

        for failure in &report.failed {
            error!("{} ({} fault): {}",
                   failure.descriptor_path.display(), failure.error.fault_label(), failure.error);
            eprintln!("Failed: {}: {}", failure.descriptor_path.display(), failure.error);
        }

        println!("Unpacked {} of {} sprites ({} failed, {} skipped)",
                 report.succeeded.len(), report.total(), report.failed.len(), report.skipped);
        self.logger.log(&format!("Batch complete: {} ok, {} failed, {} skipped",
                                 report.succeeded.len(), report.failed.len(), report.skipped))?;

        if report.is_success() {
            Ok(())
        } else {
            Err(AtlasError::GenericError(format!(
                "{} of {} sprites could not be unpacked",
                report.failed.len() + report.skipped,
                report.total()
            )))
        }
    }

    fn name(&self) -> &'static str {
        "batch"
    }
}

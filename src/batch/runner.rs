//! Parallel batch runner
//!
//! Jobs share nothing but the logger and the progress bar, so they run on
//! a rayon pool. A failed job is recorded and its siblings carry on,
//! unless the configuration asks to stop at the first failure.

use log::{error, info, warn};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::config::UnpackConfig;
use crate::pvr::errors::{AtlasError, AtlasResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use super::job::SpriteJob;

/// A job that did not produce output
#[derive(Debug)]
pub struct JobFailure {
    pub descriptor_path: PathBuf,
    pub error: AtlasError,
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Written PNG paths
    pub succeeded: Vec<PathBuf>,
    /// Jobs that failed, with their errors
    pub failed: Vec<JobFailure>,
    /// Jobs not started because of fail-fast
    pub skipped: usize,
}

impl BatchReport {
    /// Whether every job succeeded
    pub fn is_success(&self) -> bool {
        self.failed.is_empty() && self.skipped == 0
    }

    /// Total number of jobs accounted for
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len() + self.skipped
    }
}

enum JobOutcome {
    Done(PathBuf),
    Failed(JobFailure),
    Skipped,
}

/// Runs sprite jobs in parallel
pub struct BatchRunner<'a> {
    logger: &'a Logger,
    config: &'a UnpackConfig,
    show_progress: bool,
}

impl<'a> BatchRunner<'a> {
    /// Create a new batch runner
    ///
    /// # Arguments
    /// * `logger` - Logger shared by all jobs
    /// * `config` - Run settings (thread count, fail-fast)
    pub fn new(logger: &'a Logger, config: &'a UnpackConfig) -> Self {
        BatchRunner {
            logger,
            config,
            show_progress: true,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Runs all jobs and collects their outcomes
    ///
    /// Only pool creation can fail; job errors end up in the report.
    pub fn run(&self, jobs: &[SpriteJob]) -> AtlasResult<BatchReport> {
        info!("Running {} sprite jobs", jobs.len());

        let progress = if self.show_progress {
            ProgressTracker::new(jobs.len() as u64, "Unpacking sprites")
        } else {
            ProgressTracker::hidden()
        };
        let stop = AtomicBool::new(false);

        let outcomes: Vec<JobOutcome> = match self.config.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| AtlasError::ConfigError(format!("Cannot start worker pool: {}", e)))?;
                pool.install(|| self.run_all(jobs, &progress, &stop))
            },
            None => self.run_all(jobs, &progress, &stop),
        };
        progress.finish();

        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                JobOutcome::Done(path) => report.succeeded.push(path),
                JobOutcome::Failed(failure) => report.failed.push(failure),
                JobOutcome::Skipped => report.skipped += 1,
            }
        }

        info!("Batch finished: {} succeeded, {} failed, {} skipped",
              report.succeeded.len(), report.failed.len(), report.skipped);
        Ok(report)
    }

    fn run_all(&self, jobs: &[SpriteJob], progress: &ProgressTracker, stop: &AtomicBool) -> Vec<JobOutcome> {
        jobs.par_iter()
            .map(|job| {
                let outcome = self.run_one(job, stop);
                progress.job_finished(!matches!(outcome, JobOutcome::Failed(_)));
                outcome
            })
            .collect()
    }

    fn run_one(&self, job: &SpriteJob, stop: &AtomicBool) -> JobOutcome {
        if stop.load(Ordering::Relaxed) {
            warn!("Skipping {} after earlier failure", job.descriptor_path.display());
            return JobOutcome::Skipped;
        }

        match job.run(self.logger) {
            Ok(path) => JobOutcome::Done(path),
            Err(e) => {
                error!("Failed to unpack {}: {}", job.descriptor_path.display(), e);
                if self.config.fail_fast {
                    stop.store(true, Ordering::Relaxed);
                }
                JobOutcome::Failed(JobFailure {
                    descriptor_path: job.descriptor_path.clone(),
                    error: e,
                })
            }
        }
    }
}

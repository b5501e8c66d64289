//! Batch unpacking of sprite descriptors
//!
//! Discovery turns a source tree into independent jobs; the runner
//! executes them in parallel and reports per-job outcomes.

mod job;
mod discovery;
mod runner;

pub use job::{SpriteJob, OUTPUT_EXTENSION};
pub use discovery::{discover_jobs, has_extension, output_dir_for};
pub use runner::{BatchReport, BatchRunner, JobFailure};

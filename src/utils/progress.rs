//! Progress bar for batch unpacking

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts finished sprite jobs; safe to update from worker threads
pub struct ProgressTracker {
    bar: ProgressBar,
    failures: AtomicUsize,
}

impl ProgressTracker {
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} sprites ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message(description.to_string());

        ProgressTracker {
            bar,
            failures: AtomicUsize::new(0),
        }
    }

    /// Tracker that draws nothing
    pub fn hidden() -> Self {
        ProgressTracker {
            bar: ProgressBar::hidden(),
            failures: AtomicUsize::new(0),
        }
    }

    /// Marks one job as finished
    pub fn job_finished(&self, succeeded: bool) {
        if !succeeded {
            let failed = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
            self.bar.set_message(format!("{} failed", failed));
        }
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        match self.failures.load(Ordering::Relaxed) {
            0 => self.bar.finish_with_message("Completed"),
            failed => self.bar.finish_with_message(format!("Completed, {} failed", failed)),
        }
    }
}

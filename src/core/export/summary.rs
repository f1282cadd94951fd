//! Export run summary and report

use crate::config::ForgeConfig;
use crate::core::export::batch::IconOutcome;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Aggregate statistics for one export run
///
/// `processed + errors` always equals the number of variant attempts the
/// run committed to; failures are counted, never dropped.
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    /// Variants exported successfully
    pub processed: usize,
    /// Variant attempts that failed
    pub errors: usize,
    /// Icons skipped before any variant was attempted
    pub skipped: usize,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl ExportSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one icon's outcome into the run totals
    pub fn merge(&mut self, outcome: &IconOutcome) {
        self.processed += outcome.processed;
        self.errors += outcome.errors;
        self.skipped += outcome.skipped;
    }

    /// Charges `count` failed variant attempts against the run
    pub fn add_errors(&mut self, count: usize) {
        self.errors += count;
    }

    /// Total variant attempts accounted for
    pub fn total_attempts(&self) -> usize {
        self.processed + self.errors
    }

    /// `true` when every attempted variant succeeded
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Emits the end-of-run summary log line
    pub fn log_summary(&self) {
        info!(
            processed = self.processed,
            errors = self.errors,
            skipped = self.skipped,
            duration_secs = self.duration.as_secs_f64(),
            "Export run complete"
        );
    }
}

/// Serializable end-of-run report, written as `export-summary.json`
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// When the report was produced
    pub timestamp: DateTime<Utc>,
    /// The effective configuration the run used
    pub config: ForgeConfig,
    /// Run statistics
    pub stats: RunStats,
}

/// Statistics section of [`RunReport`]
#[derive(Debug, Serialize)]
pub struct RunStats {
    pub processed: usize,
    pub errors: usize,
    pub skipped: usize,
    pub duration_secs: f64,
}

impl RunReport {
    pub fn new(config: ForgeConfig, summary: &ExportSummary) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            stats: RunStats {
                processed: summary.processed,
                errors: summary.errors,
                skipped: summary.skipped,
                duration_secs: summary.duration.as_secs_f64(),
            },
        }
    }
}

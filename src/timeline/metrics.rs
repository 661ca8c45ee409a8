//! Rankings and summary statistics over a reconstructed timeline.
//!
//! The slowest tests are usually the first thing to look at when a parallel
//! run takes longer than expected: one long test pins a worker while the rest
//! sit idle at the tail of the histogram.

use super::builder::{TestInterval, Timeline};
use log::debug;

/// Select the longest-running tests
///
/// **Public** - main entry point for duration ranking
///
/// # Arguments
/// * `intervals` - Completed tests in end-event order
/// * `top_n` - Number of tests to return
///
/// # Returns
/// Up to `top_n` intervals, longest first. Equal durations keep their
/// end-event order.
pub fn longest_tests(intervals: &[TestInterval], top_n: usize) -> Vec<&TestInterval> {
    debug!("Ranking top {} of {} tests", top_n, intervals.len());

    let mut ranked: Vec<&TestInterval> = intervals.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.duration.total_cmp(&a.duration));
    ranked.truncate(top_n);
    ranked
}

/// Calculate summary statistics for a timeline
///
/// **Public** - provides summary statistics
pub fn calculate_timeline_stats(timeline: &Timeline) -> TimelineStats {
    let completed = timeline.intervals.len();

    let peak_concurrency = timeline
        .samples
        .iter()
        .map(|s| s.active_count)
        .max()
        .unwrap_or(0);

    let wall_span = match (timeline.samples.first(), timeline.samples.last()) {
        (Some(first), Some(last)) => last.time - first.time,
        _ => 0.0,
    };

    let total_duration: f64 = timeline.intervals.iter().map(|i| i.duration).sum();
    let mean_duration = if completed > 0 {
        total_duration / completed as f64
    } else {
        0.0
    };

    TimelineStats {
        completed,
        unterminated: timeline.unterminated.len(),
        orphan_ends: timeline.orphan_ends,
        peak_concurrency,
        wall_span,
        total_duration,
        mean_duration,
    }
}

/// Timeline summary statistics
///
/// **Public** - returned from calculate_timeline_stats
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineStats {
    /// Tests with both a start and an end
    pub completed: usize,

    /// Tests still running when the log ends
    pub unterminated: usize,

    /// End markers that closed nothing
    pub orphan_ends: usize,

    /// Highest number of simultaneously running tests
    pub peak_concurrency: usize,

    /// Seconds from the first to the last transition
    pub wall_span: f64,

    /// Sum of all test durations
    pub total_duration: f64,

    pub mean_duration: f64,
}

impl TimelineStats {
    /// Average number of busy workers over the run
    ///
    /// **Public** - ratio of summed test time to wall time
    pub fn mean_concurrency(&self) -> f64 {
        if self.wall_span > 0.0 {
            self.total_duration / self.wall_span
        } else {
            0.0
        }
    }

    /// Get human-readable summary
    ///
    /// **Public** - for logging and the `--summary` flag
    pub fn summary(&self) -> String {
        format!(
            "Tests: {} completed, {} unfinished | Peak workers: {} | Mean workers: {:.2} | Wall: {:.2}s | Mean test: {:.2}s",
            self.completed,
            self.unterminated,
            self.peak_concurrency,
            self.mean_concurrency(),
            self.wall_span,
            self.mean_duration
        )
    }
}

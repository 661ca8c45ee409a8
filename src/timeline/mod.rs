//! Timeline reconstruction from parsed log events.
//!
//! This module transforms the event stream into:
//! - Completed test intervals (for duration ranking)
//! - A concurrency series (for the histogram)
//! - Summary statistics

pub mod builder;
pub mod metrics;

// Re-export main types and functions
pub use builder::{build_timeline, ConcurrencySample, TestInterval, Timeline};
pub use metrics::{calculate_timeline_stats, longest_tests, TimelineStats};

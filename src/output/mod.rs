//! Text renderers for the console report.
//!
//! This module renders:
//! - The concurrency histogram
//! - The longest-tests table
//! - Both combined, as printed by the CLI

pub mod histogram;
pub mod ranking;
pub mod report;

// Re-export main functions
pub use histogram::{bucketize, render_columns, render_histogram, scale_heights, HistogramConfig};
pub use ranking::{render_ranking_table, RankingConfig};
pub use report::render_report;

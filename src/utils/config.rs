//! Defaults for parsing and rendering.
//!
//! The renderers never read these directly; they are only used to build the
//! `Default` impls of the config structs and the CLI defaults.

/// Width of one histogram column, in seconds of run time
pub const DEFAULT_BUCKET_SECONDS: f64 = 1.0;

/// Maximum number of histogram columns before buckets are widened
pub const DEFAULT_HISTOGRAM_WIDTH: usize = 80;

/// Upper bound accepted for `--width`
pub const MAX_HISTOGRAM_WIDTH: usize = 1_000;

/// Character used to fill histogram bars
pub const DEFAULT_BLOCK: char = '▓';

/// Number of rows in the longest-tests table
pub const DEFAULT_TOP_N: usize = 10;

// Table layout, matching pabot's own report width
pub const DEFAULT_NAME_WIDTH: usize = 35;
pub const DEFAULT_DURATION_WIDTH: usize = 12;
pub const DEFAULT_RULE_WIDTH: usize = 50;

/// Upper bound accepted for `--top`
pub const MAX_TOP_N: usize = 10_000;

/// Timestamp layout pabot prints at the start of each console line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

//! pabot console log parsing.
//!
//! This module handles:
//! - Classifying individual lines as start/end markers or noise
//! - Anchoring wall-clock timestamps to the run start
//! - Reading log files from disk

pub mod line;
pub mod pabot_log;
pub mod reader;

// Re-export main types
pub use line::{classify_line, parse_timestamp, LineMatch, TestOutcome};
pub use pabot_log::{parse_log, EventKind, LogEvent, LogParser};
pub use reader::{parse_log_file, read_log};

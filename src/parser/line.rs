//! Classification of single pabot console lines.
//!
//! pabot interleaves its own progress lines with arbitrary output from the
//! test processes. Only two shapes matter here:
//!
//! ```text
//! 2024-05-02 10:15:01.250310 [PID:4242] [3] [ID:17] EXECUTING Suite.Login
//! 2024-05-02 10:15:07.511002 [PID:4242] [3] [ID:17] PASSED Suite.Login in 6.2 seconds
//! ```
//!
//! Everything else is noise and classifies as [`LineMatch::NoMatch`].

use crate::utils::config::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static EXECUTING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+).*?EXECUTING (?P<test>.+)")
        .expect("executing pattern is valid")
});

static FINISHED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d+).*?(?P<outcome>PASSED|FAILED) (?P<test>.+?) in (?P<duration>[\d.]+) seconds",
    )
    .expect("finished pattern is valid")
});

/// How a finished test ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    fn from_marker(marker: &str) -> Self {
        match marker {
            "FAILED" => TestOutcome::Failed,
            _ => TestOutcome::Passed,
        }
    }
}

/// Result of classifying one console line
#[derive(Debug, Clone, PartialEq)]
pub enum LineMatch {
    /// Noise, or a marker whose timestamp/duration could not be read
    NoMatch,

    /// `EXECUTING <test>`
    Start {
        test_id: String,
        timestamp: NaiveDateTime,
    },

    /// `PASSED|FAILED <test> in <duration> seconds`
    End {
        test_id: String,
        timestamp: NaiveDateTime,
        /// Duration pabot reported, in seconds
        duration: f64,
        outcome: TestOutcome,
    },
}

/// Classify a single line of pabot output
///
/// **Public** - stateless, safe to call on any text
///
/// A start marker takes precedence when a line happens to contain both
/// shapes. Identifiers are returned exactly as printed.
pub fn classify_line(line: &str) -> LineMatch {
    if let Some(caps) = EXECUTING_RE.captures(line) {
        return match parse_timestamp(&caps["timestamp"]) {
            Some(timestamp) => LineMatch::Start {
                test_id: caps["test"].to_string(),
                timestamp,
            },
            None => LineMatch::NoMatch,
        };
    }

    if let Some(caps) = FINISHED_RE.captures(line) {
        let Some(timestamp) = parse_timestamp(&caps["timestamp"]) else {
            return LineMatch::NoMatch;
        };

        let duration = match caps["duration"].parse::<f64>() {
            Ok(d) => d,
            Err(e) => {
                debug!("Skipping end marker with bad duration '{}': {}", &caps["duration"], e);
                return LineMatch::NoMatch;
            }
        };

        return LineMatch::End {
            test_id: caps["test"].to_string(),
            timestamp,
            duration,
            outcome: TestOutcome::from_marker(&caps["outcome"]),
        };
    }

    LineMatch::NoMatch
}

/// Parse a pabot timestamp such as `2024-05-02 10:15:01.250310`
///
/// **Public** - also used to set an explicit run-start anchor
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            debug!("Skipping marker with bad timestamp '{}': {}", raw, e);
            None
        }
    }
}

//! Conversion of classified lines into timeline events.
//!
//! Timestamps in the log are wall-clock; the timeline works in seconds since
//! the run started. The run-start anchor is held by [`LogParser`] and is
//! either fixed up front or taken from the first recognized event.

use super::line::{classify_line, LineMatch, TestOutcome};
use chrono::NaiveDateTime;
use log::{debug, warn};

/// Kind of timeline transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
}

/// A single start or end of a test, relative to the run start
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub test_id: String,
    pub kind: EventKind,
    /// Seconds since the anchor
    pub time: f64,
    /// Duration printed by pabot on end lines
    pub reported_duration: Option<f64>,
    pub outcome: Option<TestOutcome>,
}

impl LogEvent {
    pub fn start(test_id: impl Into<String>, time: f64) -> Self {
        Self {
            test_id: test_id.into(),
            kind: EventKind::Start,
            time,
            reported_duration: None,
            outcome: None,
        }
    }

    pub fn end(test_id: impl Into<String>, time: f64) -> Self {
        Self {
            test_id: test_id.into(),
            kind: EventKind::End,
            time,
            reported_duration: None,
            outcome: None,
        }
    }
}

/// Line-by-line event extractor
///
/// **Public** - holds the run-start anchor between lines
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    anchor: Option<NaiveDateTime>,
    lines_seen: usize,
    events_seen: usize,
}

impl LogParser {
    /// Parser that anchors time 0 at the first recognized event
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with an explicit time 0
    pub fn with_anchor(anchor: NaiveDateTime) -> Self {
        Self {
            anchor: Some(anchor),
            ..Self::default()
        }
    }

    pub fn anchor(&self) -> Option<NaiveDateTime> {
        self.anchor
    }

    /// Number of lines fed so far
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Number of lines that produced an event
    pub fn events_seen(&self) -> usize {
        self.events_seen
    }

    /// Feed one line, returning its event if it is a start or end marker
    pub fn parse_line(&mut self, line: &str) -> Option<LogEvent> {
        self.lines_seen += 1;

        let event = match classify_line(line) {
            LineMatch::NoMatch => return None,
            LineMatch::Start { test_id, timestamp } => {
                let time = self.offset_of(timestamp)?;
                LogEvent::start(test_id, time)
            }
            LineMatch::End {
                test_id,
                timestamp,
                duration,
                outcome,
            } => {
                let time = self.offset_of(timestamp)?;
                LogEvent {
                    reported_duration: Some(duration),
                    outcome: Some(outcome),
                    ..LogEvent::end(test_id, time)
                }
            }
        };

        self.events_seen += 1;
        Some(event)
    }

    /// Seconds between the anchor and `timestamp`, setting the anchor if unset
    fn offset_of(&mut self, timestamp: NaiveDateTime) -> Option<f64> {
        let anchor = *self.anchor.get_or_insert_with(|| {
            debug!("Anchoring run start at {}", timestamp);
            timestamp
        });

        match (timestamp - anchor).num_microseconds() {
            Some(us) => Some(us as f64 / 1_000_000.0),
            None => {
                warn!("Timestamp {} is too far from run start {}, skipping", timestamp, anchor);
                None
            }
        }
    }
}

/// Extract every start/end event from a full log, in file order
///
/// **Public** - main entry point for parsing
pub fn parse_log(text: &str) -> Vec<LogEvent> {
    let mut parser = LogParser::new();
    let events: Vec<LogEvent> = text.lines().filter_map(|line| parser.parse_line(line)).collect();

    debug!(
        "Recognized {} events in {} lines",
        parser.events_seen(),
        parser.lines_seen()
    );

    events
}

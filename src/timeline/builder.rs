//! Pair start/end events into test intervals and a concurrency series.
//!
//! Events are consumed in file order. A start opens an entry in the running
//! set; the matching end closes it and emits an interval. Every opened and
//! closed test is also recorded as a +1/-1 transition, from which the
//! concurrency samples are derived.

use crate::parser::{EventKind, LogEvent};
use log::{debug, warn};
use std::collections::HashMap;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// One completed test execution
///
/// **Public** - consumed by the ranking reporter
#[derive(Debug, Clone, PartialEq)]
pub struct TestInterval {
    pub test_id: String,

    /// Seconds since run start
    pub start: f64,
    pub end: f64,

    /// `end - start` rounded to the microsecond, never negative
    pub duration: f64,
}

impl TestInterval {
    /// Create an interval, clamping `end` so it never precedes `start`
    ///
    /// Log timestamps have microsecond resolution, so the difference is
    /// rounded to that; equal wall-clock durations then compare equal.
    pub fn new(test_id: impl Into<String>, start: f64, end: f64) -> Self {
        let end = end.max(start);
        Self {
            test_id: test_id.into(),
            start,
            end,
            duration: ((end - start) * MICROS_PER_SECOND).round() / MICROS_PER_SECOND,
        }
    }
}

/// Number of tests running at a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConcurrencySample {
    pub time: f64,
    pub active_count: usize,
}

impl ConcurrencySample {
    pub fn new(time: f64, active_count: usize) -> Self {
        Self { time, active_count }
    }
}

/// Reconstructed run
///
/// **Public** - returned from build_timeline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    /// Completed tests, in end-event order
    pub intervals: Vec<TestInterval>,

    /// Concurrency after each transition, ordered by time
    pub samples: Vec<ConcurrencySample>,

    /// Tests that started but never finished, sorted by id
    pub unterminated: Vec<String>,

    /// End markers with no open start
    pub orphan_ends: usize,
}

impl Timeline {
    /// True when the log held no usable start or end markers
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty() && self.samples.is_empty()
    }
}

/// Build a timeline from events in file order
///
/// **Public** - main entry point for timeline construction
///
/// # Algorithm
/// 1. Track open tests in a running set keyed by test id
/// 2. A repeated start overwrites the earlier start time
/// 3. An end with no open start is dropped
/// 4. Transitions are stably sorted by time and summed into samples
pub fn build_timeline(events: &[LogEvent]) -> Timeline {
    debug!("Building timeline from {} events", events.len());

    let mut running: HashMap<&str, f64> = HashMap::new();
    let mut intervals = Vec::new();
    let mut transitions: Vec<(f64, bool)> = Vec::with_capacity(events.len());
    let mut orphan_ends = 0;

    for event in events {
        match event.kind {
            EventKind::Start => {
                if let Some(previous) = running.insert(event.test_id.as_str(), event.time) {
                    warn!(
                        "Test '{}' started again at {:.3}s before finishing (previous start {:.3}s)",
                        event.test_id, event.time, previous
                    );
                }
                transitions.push((event.time, true));
            }
            EventKind::End => {
                let Some(start) = running.remove(event.test_id.as_str()) else {
                    debug!("Ignoring end of '{}' with no recorded start", event.test_id);
                    orphan_ends += 1;
                    continue;
                };

                if event.time < start {
                    warn!(
                        "Test '{}' ends at {:.3}s before it started at {:.3}s, clamping",
                        event.test_id, event.time, start
                    );
                }

                let interval = TestInterval::new(event.test_id.as_str(), start, event.time);
                transitions.push((interval.end, false));
                intervals.push(interval);
            }
        }
    }

    // Stable: equal times keep file order
    transitions.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut active: usize = 0;
    let samples = transitions
        .into_iter()
        .map(|(time, opens)| {
            if opens {
                active += 1;
            } else {
                active = active.saturating_sub(1);
            }
            ConcurrencySample::new(time, active)
        })
        .collect();

    let mut unterminated: Vec<String> = running.into_keys().map(str::to_string).collect();
    unterminated.sort();

    if !unterminated.is_empty() {
        debug!("{} tests never finished", unterminated.len());
    }

    Timeline {
        intervals,
        samples,
        unterminated,
        orphan_ends,
    }
}

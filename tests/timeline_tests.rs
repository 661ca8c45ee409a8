use pabotscope::parser::{parse_log, LogEvent};
use pabotscope::timeline::{
    build_timeline, calculate_timeline_stats, longest_tests, ConcurrencySample, TestInterval,
};

#[test]
fn test_round_trip_scenario() {
    let events = vec![
        LogEvent::start("A", 0.0),
        LogEvent::start("B", 1.0),
        LogEvent::end("A", 5.0),
        LogEvent::end("B", 2.0),
    ];

    let timeline = build_timeline(&events);

    assert_eq!(
        timeline.intervals,
        vec![
            TestInterval::new("A", 0.0, 5.0),
            TestInterval::new("B", 1.0, 2.0),
        ]
    );
    assert_eq!(timeline.intervals[0].duration, 5.0);
    assert_eq!(timeline.intervals[1].duration, 1.0);

    assert_eq!(
        timeline.samples,
        vec![
            ConcurrencySample::new(0.0, 1),
            ConcurrencySample::new(1.0, 2),
            ConcurrencySample::new(2.0, 1),
            ConcurrencySample::new(5.0, 0),
        ]
    );
}

#[test]
fn test_interval_durations_are_consistent() {
    let events = vec![
        LogEvent::start("A", 0.0),
        LogEvent::start("B", 0.5),
        LogEvent::end("B", 0.25),
        LogEvent::end("A", 3.75),
        LogEvent::start("C", 4.0),
        LogEvent::end("C", 4.0),
    ];

    let timeline = build_timeline(&events);

    assert_eq!(timeline.intervals.len(), 3);
    for interval in &timeline.intervals {
        assert!((interval.duration - (interval.end - interval.start)).abs() < 1e-6);
        assert!(interval.duration >= 0.0);
    }
}

#[test]
fn test_unterminated_tests_are_not_ranked() {
    let events = vec![
        LogEvent::start("done", 0.0),
        LogEvent::start("hung", 0.0),
        LogEvent::end("done", 1.0),
    ];

    let timeline = build_timeline(&events);

    assert_eq!(timeline.unterminated, vec!["hung".to_string()]);
    let ranked = longest_tests(&timeline.intervals, 10);
    assert!(ranked.iter().all(|i| i.test_id != "hung"));
    assert_eq!(ranked.len(), 1);

    // Never forced back to zero
    assert_eq!(timeline.samples.last().unwrap().active_count, 1);
}

#[test]
fn test_concurrency_never_negative() {
    let events = vec![
        LogEvent::end("X", 0.0),
        LogEvent::start("A", 1.0),
        LogEvent::end("A", 2.0),
        LogEvent::end("A", 3.0),
        LogEvent::end("Y", 4.0),
    ];

    let timeline = build_timeline(&events);

    assert_eq!(timeline.orphan_ends, 3);
    let counts: Vec<usize> = timeline.samples.iter().map(|s| s.active_count).collect();
    assert_eq!(counts, vec![1, 0]);
}

#[test]
fn test_top_three_of_ten() {
    let events: Vec<LogEvent> = (0..10)
        .flat_map(|i| {
            let id = format!("T{}", i);
            let duration = ((i * 7) % 10) as f64 + 0.5;
            vec![LogEvent::start(id.clone(), 0.0), LogEvent::end(id, duration)]
        })
        .collect();

    let timeline = build_timeline(&events);
    let ranked = longest_tests(&timeline.intervals, 3);

    let durations: Vec<f64> = ranked.iter().map(|i| i.duration).collect();
    assert_eq!(durations, vec![9.5, 8.5, 7.5]);
}

#[test]
fn test_equal_durations_keep_end_order() {
    let events = vec![
        LogEvent::start("later_start", 1.0),
        LogEvent::start("earlier_start", 0.0),
        LogEvent::end("earlier_start", 1.25),
        LogEvent::end("later_start", 2.25),
    ];

    let timeline = build_timeline(&events);
    let ranked = longest_tests(&timeline.intervals, 10);

    assert_eq!(ranked[0].test_id, "earlier_start");
    assert_eq!(ranked[1].test_id, "later_start");
    assert_eq!(ranked[0].duration, ranked[1].duration);
}

#[test]
fn test_ranking_is_descending() {
    let events = parse_log(
        "\
2024-05-02 10:00:00.0 EXECUTING A
2024-05-02 10:00:00.0 EXECUTING B
2024-05-02 10:00:00.0 EXECUTING C
2024-05-02 10:00:03.0 PASSED B in 3.0 seconds
2024-05-02 10:00:04.0 PASSED A in 4.0 seconds
2024-05-02 10:00:07.0 PASSED C in 7.0 seconds
",
    );

    let timeline = build_timeline(&events);
    let ranked = longest_tests(&timeline.intervals, 10);

    for pair in ranked.windows(2) {
        assert!(pair[0].duration >= pair[1].duration);
    }

    let stats = calculate_timeline_stats(&timeline);
    assert_eq!(stats.peak_concurrency, 3);
    assert_eq!(stats.completed, 3);
    assert_eq!(stats.wall_span, 7.0);
}

#[test]
fn test_equal_wall_clock_durations_keep_end_order() {
    let events = parse_log(
        "\
2024-05-02 10:00:00.000000 [PID:1] [0] [ID:0] EXECUTING Anchor
2024-05-02 10:00:00.100000 [PID:2] [1] [ID:1] EXECUTING X
2024-05-02 10:00:00.200000 [PID:3] [2] [ID:2] EXECUTING Y
2024-05-02 10:00:01.400000 [PID:2] [1] [ID:1] PASSED X in 1.3 seconds
2024-05-02 10:00:01.500000 [PID:3] [2] [ID:2] PASSED Y in 1.3 seconds
",
    );

    let timeline = build_timeline(&events);
    let ranked = longest_tests(&timeline.intervals, 10);

    let names: Vec<&str> = ranked.iter().map(|i| i.test_id.as_str()).collect();
    assert_eq!(names, vec!["X", "Y"]);
    assert_eq!(ranked[0].duration, ranked[1].duration);
}

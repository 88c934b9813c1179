//! Library-level tests over whole exports.

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

use timeline_days::{
    format_iso8601, parse_iso8601, split_by_day, DayIndex, ErrorKind, PartitionOptions,
    SliceOrder, TimelineDocument,
};

use crate::helpers::load_fixture;

fn build(doc: Value, options: PartitionOptions) -> DayIndex {
    let doc = TimelineDocument::from_value(doc).unwrap();
    DayIndex::build("test.json", &doc, &options).unwrap()
}

#[test]
fn sample_fixture_day_and_segment_counts() {
    let doc = TimelineDocument::from_json(&load_fixture("sample_timeline.json")).unwrap();
    let index = DayIndex::build("sample_timeline.json", &doc, &PartitionOptions::default()).unwrap();
    assert_eq!(index.segment_count, 3);
    assert_eq!(index.day_count, 3);
    assert_eq!(index.days.slice_count(), 5);
}

#[test]
fn visit_plus_midnight_activity_touches_three_days() {
    let index = build(
        json!({"semanticSegments": [
            {
                "startTime": "2024-05-10T09:00:00.000+02:00",
                "endTime": "2024-05-10T12:00:00.000+02:00",
                "visit": {"topCandidate": {"semanticType": "WORK"}}
            },
            {
                "startTime": "2024-05-11T23:10:00.000+02:00",
                "endTime": "2024-05-12T00:20:00.000+02:00",
                "activity": {"topCandidate": {"type": "WALKING", "probability": 0.7}}
            }
        ]}),
        PartitionOptions::default(),
    );
    assert_eq!(index.day_count, 3);
    assert_eq!(index.segment_count, 2);

    let days: Vec<NaiveDate> = index.days.iter().map(|(day, _)| day).collect();
    assert!(days.windows(2).all(|w| w[0] < w[1]));

    let last = index.days.get("2024-05-12".parse().unwrap()).unwrap();
    assert_eq!(last[0].duration_minutes, 20.0);
    assert_eq!(format_iso8601(&last[0].start_time), "2024-05-12T00:00:00+02:00");
}

#[test]
fn split_covers_span_for_many_offsets_and_lengths() {
    let starts = [
        "2024-02-28T00:00:00+00:00",
        "2024-02-28T23:59:59.999+00:00",
        "2023-12-31T21:07:30-08:00",
        "2024-07-01T05:45:00+05:45",
        "2024-10-27T01:30:00+01:00",
    ];
    let lengths_minutes = [0, 1, 59, 60 * 24, 60 * 24 + 1, 60 * 71 + 13, 60 * 24 * 9];

    for start_text in starts {
        let start = parse_iso8601(start_text).unwrap();
        for minutes in lengths_minutes {
            let end = start + Duration::minutes(minutes);
            let parts: Vec<_> = split_by_day(start, end).unwrap().collect();

            assert_eq!(parts[0].start, start, "{} +{}m", start_text, minutes);
            assert_eq!(parts.last().unwrap().end, end, "{} +{}m", start_text, minutes);
            for pair in parts.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            for part in &parts {
                let day = part.start.date_naive();
                let end_day = part.end.date_naive();
                assert!(
                    end_day == day || (end_day == day.succ_opt().unwrap() && part.end.time() == chrono::NaiveTime::MIN),
                    "interval {:?} leaves its day",
                    part
                );
            }
        }
    }
}

#[test]
fn rounded_durations_sum_within_tolerance() {
    let index = build(
        json!({"semanticSegments": [{
            "startTime": "2024-01-01T10:00:00.100Z",
            "endTime": "2024-01-06T02:59:33.333Z",
            "timelinePath": []
        }]}),
        PartitionOptions::default(),
    );
    let start = parse_iso8601("2024-01-01T10:00:00.100Z").unwrap();
    let end = parse_iso8601("2024-01-06T02:59:33.333Z").unwrap();
    let exact = (end - start).num_microseconds().unwrap() as f64 / 60_000_000.0;

    let slices: Vec<f64> = index
        .days
        .iter()
        .flat_map(|(_, slices)| slices.iter().map(|s| s.duration_minutes))
        .collect();
    assert_eq!(slices.len(), 6);
    let total: f64 = slices.iter().sum();
    assert!((total - exact).abs() <= 0.01 * slices.len() as f64);
}

#[test]
fn chronological_order_sorts_mixed_offsets() {
    let doc = json!({"semanticSegments": [
        {"startTime": "2024-03-31T09:00:00+02:00", "endTime": "2024-03-31T09:30:00+02:00", "visit": {}},
        {"startTime": "2024-03-31T08:30:00+01:00", "endTime": "2024-03-31T09:00:00+01:00", "visit": {}}
    ]});

    let lexical = build(doc.clone(), PartitionOptions::default());
    let chronological = build(
        doc,
        PartitionOptions {
            slice_order: SliceOrder::Chronological,
            ..Default::default()
        },
    );

    let day: NaiveDate = "2024-03-31".parse().unwrap();
    let order = |index: &DayIndex| -> Vec<usize> {
        index.days.get(day).unwrap().iter().map(|s| s.segment_index).collect()
    };
    assert_eq!(order(&lexical), [1, 0]);
    assert_eq!(order(&chronological), [0, 1]);
}

#[test]
fn bad_timestamp_reports_segment() {
    let doc = TimelineDocument::from_value(json!({"semanticSegments": [
        {"startTime": "2024-01-01T08:00:00Z", "endTime": "2024-01-01T09:00:00Z"},
        {"startTime": "2024-01-01 08:00", "endTime": "2024-01-01T09:00:00Z"}
    ]}))
    .unwrap();
    let err = DayIndex::build("x.json", &doc, &PartitionOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(err.segment_index(), Some(1));
    assert!(err.to_string().starts_with("Segment 1: Invalid timestamp"));
}

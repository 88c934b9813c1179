//! Day-bounded pieces of a segment.

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::Serialize;

use super::split::Interval;
use crate::segment::SegmentSummary;
use crate::timestamp;

/// One segment's share of a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slice {
    pub segment_index: usize,
    #[serde(serialize_with = "timestamp::serialize")]
    pub start_time: DateTime<FixedOffset>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub end_time: DateTime<FixedOffset>,
    pub duration_minutes: f64,
    pub original_start_time: String,
    pub original_end_time: String,
    #[serde(flatten)]
    pub summary: SegmentSummary,
}

impl Slice {
    pub fn new(
        segment_index: usize,
        interval: Interval,
        original_start_time: &str,
        original_end_time: &str,
        summary: SegmentSummary,
    ) -> Self {
        Self {
            segment_index,
            start_time: interval.start,
            end_time: interval.end,
            duration_minutes: duration_minutes(interval.duration()),
            original_start_time: original_start_time.to_string(),
            original_end_time: original_end_time.to_string(),
            summary,
        }
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.start_time, self.end_time)
    }
}

/// Duration in minutes, rounded to two decimals.
///
/// The minutes are computed as `seconds / 60.0` in `f64` and rounded on the
/// exact binary value of that float, ties to even. `0.3 s / 60.0` lands
/// slightly above 0.005 and rounds to 0.01.
pub fn duration_minutes(delta: TimeDelta) -> f64 {
    let micros = delta
        .num_microseconds()
        .unwrap_or_else(|| delta.num_seconds().saturating_mul(1_000_000));
    let minutes = micros as f64 / 1_000_000.0 / 60.0;
    round_to_hundredths(minutes)
}

/// Round on the exact decimal expansion of `value`. Formatting with a fixed
/// precision does exactly that, unlike scaling by 100 first.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

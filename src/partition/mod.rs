//! Day partitioning of semantic segments.
//!
//! Each segment is summarized once, split at every local midnight it
//! crosses, and its slices are filed under the calendar day they start on.
//!
//! # Module Structure
//!
//! - [`split`] - the per-segment midnight splitter
//! - [`slice`] - slices and their rounded durations
//! - [`buckets`] - the date-keyed result

mod buckets;
mod slice;
mod split;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::TimelineError;
use crate::segment::{Segment, SegmentSummary};
use crate::timestamp::parse_iso8601;

pub use buckets::DayBuckets;
pub use slice::{duration_minutes, Slice};
pub use split::{split_by_day, DaySplit, Interval};

/// How slices are ordered within a day.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SliceOrder {
    /// By rendered start-time text (matches the historical output)
    #[default]
    Lexical,
    /// By start instant, regardless of offset
    Chronological,
}

/// Parameters of a partition run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Embed full point arrays in path summaries
    pub include_timeline_points: bool,
    /// Ordering within each day bucket
    pub slice_order: SliceOrder,
}

/// Split every segment by day and group the slices by date.
///
/// Segments are processed in parallel; the result does not depend on
/// processing order. On failure the error of the lowest-indexed bad segment
/// is returned.
pub fn partition(
    segments: &[Value],
    options: &PartitionOptions,
) -> Result<DayBuckets, TimelineError> {
    let per_segment: Vec<Result<Vec<Slice>, TimelineError>> = segments
        .par_iter()
        .enumerate()
        .map(|(index, value)| {
            slice_segment(index, value, options).map_err(|err| err.in_segment(index))
        })
        .collect();

    let mut buckets = DayBuckets::new();
    for slices in per_segment {
        for slice in slices? {
            buckets.push(slice);
        }
    }
    buckets.sort(options.slice_order);

    tracing::info!(
        segments = segments.len(),
        days = buckets.len(),
        slices = buckets.slice_count(),
        "Partitioned timeline by day"
    );
    Ok(buckets)
}

/// Summarize one segment and cut it into day slices.
pub fn slice_segment(
    index: usize,
    value: &Value,
    options: &PartitionOptions,
) -> Result<Vec<Slice>, TimelineError> {
    let segment = Segment::from_value(index, value)?;
    let original_start = segment.start_time()?;
    let original_end = segment.end_time()?;
    let start = parse_iso8601(original_start)?;
    let end = parse_iso8601(original_end)?;

    let payload = segment.payload();
    if segment.is_ambiguous() {
        tracing::debug!(
            segment = index,
            resolved = payload.type_name(),
            "Segment carries several payloads"
        );
    }
    let summary = SegmentSummary::from_payload(payload, options.include_timeline_points);

    let slices = split_by_day(start, end)?
        .map(|interval| {
            Slice::new(
                index,
                interval,
                original_start,
                original_end,
                summary.clone(),
            )
        })
        .collect();
    Ok(slices)
}

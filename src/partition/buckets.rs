//! Calendar-day buckets of slices.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::slice::Slice;
use super::SliceOrder;
use crate::timestamp::format_iso8601;

/// Slices grouped by the local date of their start, dates ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayBuckets {
    days: BTreeMap<NaiveDate, Vec<Slice>>,
}

impl DayBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slice to the bucket of its start date.
    pub fn push(&mut self, slice: Slice) {
        let day = slice.start_time.date_naive();
        self.days.entry(day).or_default().push(slice);
    }

    /// Sort every bucket by slice start. Both orders are stable.
    pub fn sort(&mut self, order: SliceOrder) {
        for slices in self.days.values_mut() {
            match order {
                SliceOrder::Lexical => slices.sort_by_cached_key(|s| format_iso8601(&s.start_time)),
                SliceOrder::Chronological => slices.sort_by_key(|s| s.start_time),
            }
        }
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, day: NaiveDate) -> Option<&[Slice]> {
        self.days.get(&day).map(Vec::as_slice)
    }

    /// Days in ascending order with their slices.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &[Slice])> {
        self.days.iter().map(|(day, slices)| (*day, slices.as_slice()))
    }

    /// Total number of slices over all days.
    pub fn slice_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl Serialize for DayBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, slices) in &self.days {
            map.serialize_entry(&day.format("%Y-%m-%d").to_string(), slices)?;
        }
        map.end()
    }
}

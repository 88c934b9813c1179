//! Splitting an interval at local midnights.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta};

use crate::error::TimelineError;
use crate::timestamp::format_iso8601;

/// A `[start, end)` span. Both ends carry an offset; `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl Interval {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Calendar date of the start, in the start's own offset.
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Lazy sequence of day-aligned intervals covering one segment.
///
/// The cursor starts at the segment start. While its local date is before
/// the end's local date, the iterator yields `(cursor, next midnight)` and
/// moves the cursor to that midnight. The midnight is stamped with the
/// cursor's offset. A final `(cursor, end)` interval closes the sequence;
/// it is zero-length when the end sits exactly on a midnight.
///
/// Clone the iterator to restart from its current position.
#[derive(Debug, Clone)]
pub struct DaySplit {
    cursor: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
    finished: bool,
}

/// Split `[start, end]` into per-day intervals.
pub fn split_by_day(
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
) -> Result<DaySplit, TimelineError> {
    if end < start {
        return Err(TimelineError::EndBeforeStart {
            start: format_iso8601(&start),
            end: format_iso8601(&end),
        });
    }
    Ok(DaySplit {
        cursor: start,
        end,
        finished: false,
    })
}

impl Iterator for DaySplit {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        if self.finished {
            return None;
        }
        if self.cursor.date_naive() < self.end.date_naive() {
            if let Some(midnight) = next_midnight(&self.cursor) {
                let interval = Interval::new(self.cursor, midnight);
                self.cursor = midnight;
                return Some(interval);
            }
        }
        self.finished = true;
        Some(Interval::new(self.cursor, self.end))
    }
}

impl std::iter::FusedIterator for DaySplit {}

/// Midnight at the start of the day after `instant`'s local date, in
/// `instant`'s offset.
fn next_midnight(instant: &DateTime<FixedOffset>) -> Option<DateTime<FixedOffset>> {
    instant
        .date_naive()
        .succ_opt()?
        .and_hms_opt(0, 0, 0)?
        .and_local_timezone(*instant.offset())
        .single()
}

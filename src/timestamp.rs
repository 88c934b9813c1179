//! ISO-8601 timestamp parsing and rendering.
//!
//! Instants keep the offset they were recorded with. Nothing here converts
//! between offsets; day boundaries are computed in the local calendar of
//! whatever offset a timestamp carries.

use chrono::{DateTime, FixedOffset, Timelike};

use crate::error::TimelineError;

/// Format used when the input omits seconds (`2024-01-01T08:15+01:00`).
const MINUTE_PRECISION_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";

/// Parse an ISO-8601 timestamp with an explicit offset.
///
/// A trailing `Z` is rewritten to `+00:00` first. Date and time must be
/// separated by `T`, and leap seconds are rejected. Precision is truncated
/// to microseconds.
pub fn parse_iso8601(value: &str) -> Result<DateTime<FixedOffset>, TimelineError> {
    if value.as_bytes().get(10).is_some_and(|&b| b != b'T') {
        return Err(TimelineError::MalformedTimestamp {
            value: value.to_string(),
            reason: "date and time must be separated by 'T'",
        });
    }
    let normalized = match value.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => value.to_string(),
    };

    let parsed = DateTime::parse_from_rfc3339(&normalized)
        .or_else(|err| {
            DateTime::parse_from_str(&normalized, MINUTE_PRECISION_FORMAT).map_err(|_| err)
        })
        .map_err(|source| TimelineError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })?;

    if parsed.nanosecond() >= 1_000_000_000 {
        return Err(TimelineError::MalformedTimestamp {
            value: value.to_string(),
            reason: "leap seconds are not supported",
        });
    }

    Ok(truncate_to_micros(parsed))
}

/// Render an instant as ISO-8601 text.
///
/// Fractional seconds appear only when the microsecond field is non-zero,
/// always with six digits. The offset is always numeric, never `Z`.
pub fn format_iso8601(instant: &DateTime<FixedOffset>) -> String {
    if instant.nanosecond() / 1_000 == 0 {
        instant.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        instant.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    }
}

fn truncate_to_micros(instant: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let nanos = instant.nanosecond();
    instant
        .with_nanosecond(nanos - nanos % 1_000)
        .unwrap_or(instant)
}

/// Serde helper so slices serialize their instants as ISO text.
pub(crate) fn serialize<S>(instant: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_iso8601(instant))
}

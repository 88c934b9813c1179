//! Semantic segment records from a location-history export.
//!
//! A segment is a JSON object carrying `startTime`, `endTime` and one of
//! three payloads:
//!
//! - [`payload`] - dispatch on which payload key is present
//! - [`summary`] - the flat, normalized summary emitted with every slice

mod payload;
mod summary;

use serde_json::{Map, Value};

use crate::error::TimelineError;

pub use payload::SegmentPayload;
pub use summary::SegmentSummary;

/// Read-only view over one segment object of the input document.
#[derive(Debug, Clone, Copy)]
pub struct Segment<'a> {
    index: usize,
    fields: &'a Map<String, Value>,
}

impl<'a> Segment<'a> {
    /// Wrap the segment found at `index` of `semanticSegments`.
    pub fn from_value(index: usize, value: &'a Value) -> Result<Self, TimelineError> {
        let fields = value.as_object().ok_or_else(|| {
            TimelineError::InvalidFormat(format!("segment {} is not a JSON object", index))
        })?;
        Ok(Self { index, fields })
    }

    /// Zero-based position in the input list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Verbatim `startTime` text.
    pub fn start_time(&self) -> Result<&'a str, TimelineError> {
        self.time_field("startTime")
    }

    /// Verbatim `endTime` text.
    pub fn end_time(&self) -> Result<&'a str, TimelineError> {
        self.time_field("endTime")
    }

    /// The semantic payload, resolved by key precedence.
    pub fn payload(&self) -> SegmentPayload<'a> {
        SegmentPayload::resolve(self.fields)
    }

    /// Whether more than one payload key is present.
    pub fn is_ambiguous(&self) -> bool {
        ["activity", "visit", "timelinePath"]
            .iter()
            .filter(|key| self.fields.contains_key(**key))
            .count()
            > 1
    }

    fn time_field(&self, field: &'static str) -> Result<&'a str, TimelineError> {
        match self.fields.get(field) {
            None => Err(TimelineError::MissingField { field }),
            Some(Value::String(text)) => Ok(text.as_str()),
            Some(other) => Err(TimelineError::InvalidFormat(format!(
                "'{}' must be a string, got {}",
                field, other
            ))),
        }
    }
}

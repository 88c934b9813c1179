//! Input and output documents.

use serde::Serialize;
use serde_json::Value;

use crate::error::TimelineError;
use crate::partition::{partition, DayBuckets, PartitionOptions};

/// A parsed location-history export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineDocument {
    pub segments: Vec<Value>,
}

impl TimelineDocument {
    /// Take `semanticSegments` out of a parsed export.
    ///
    /// A missing key means no segments.
    pub fn from_value(value: Value) -> Result<Self, TimelineError> {
        let Value::Object(mut root) = value else {
            return Err(TimelineError::InvalidFormat(
                "top-level value must be a JSON object.".to_string(),
            ));
        };
        match root.remove("semanticSegments") {
            None => Ok(Self::default()),
            Some(Value::Array(segments)) => Ok(Self { segments }),
            Some(_) => Err(TimelineError::InvalidFormat(
                "'semanticSegments' must be a list.".to_string(),
            )),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, TimelineError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| TimelineError::InvalidFormat(format!("not valid JSON ({})", e)))?;
        Self::from_value(value)
    }
}

/// The day-indexed output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayIndex {
    pub source_file: String,
    pub day_count: usize,
    pub segment_count: usize,
    pub days: DayBuckets,
}

impl DayIndex {
    /// Partition a document's segments and wrap the result.
    pub fn build(
        source_file: impl Into<String>,
        document: &TimelineDocument,
        options: &PartitionOptions,
    ) -> Result<Self, TimelineError> {
        let days = partition(&document.segments, options)?;
        Ok(Self {
            source_file: source_file.into(),
            day_count: days.len(),
            segment_count: document.segments.len(),
            days,
        })
    }

    /// Render as JSON, two-space indented when `pretty`.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

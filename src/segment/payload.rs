//! Payload dispatch for semantic segments.

use serde_json::{Map, Value};

/// The semantic content of a segment.
///
/// Resolved from key presence with a fixed precedence: `activity` wins over
/// `visit`, and anything carrying neither is treated as a path trace. A key
/// holding `null` or an unexpected shape still selects its variant; the
/// nested lookups then default to absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentPayload<'a> {
    /// Movement between places
    Activity(Option<&'a Map<String, Value>>),
    /// Stay at a place
    Visit(Option<&'a Map<String, Value>>),
    /// Raw trace points (empty when the key is absent)
    TimelinePath(&'a [Value]),
}

impl<'a> SegmentPayload<'a> {
    pub fn resolve(segment: &'a Map<String, Value>) -> Self {
        if let Some(activity) = segment.get("activity") {
            return Self::Activity(activity.as_object());
        }
        if let Some(visit) = segment.get("visit") {
            return Self::Visit(visit.as_object());
        }
        let points = segment
            .get("timelinePath")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        Self::TimelinePath(points)
    }

    /// The `segmentType` discriminator for this payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Activity(_) => "activity",
            Self::Visit(_) => "visit",
            Self::TimelinePath(_) => "timelinePath",
        }
    }
}

/// Follow a chain of object keys, yielding `None` as soon as a step is
/// missing or not an object.
pub(super) fn lookup<'a>(root: Option<&'a Map<String, Value>>, path: &[&str]) -> Option<&'a Value> {
    let (last, parents) = path.split_last()?;
    let mut current = root?;
    for key in parents {
        current = current.get(*key)?.as_object()?;
    }
    current.get(*last)
}

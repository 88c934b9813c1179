//! Flat, per-variant summaries of a segment's semantic content.

use serde::Serialize;
use serde_json::Value;

use super::payload::{lookup, SegmentPayload};

/// Normalized summary attached to every slice of a segment.
///
/// Serialized inline with the slice, tagged by `segmentType`. Activity and
/// visit fields are always emitted (as `null` when absent); the path fields
/// are emitted only when they apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "segmentType", rename_all = "camelCase")]
pub enum SegmentSummary {
    #[serde(rename_all = "camelCase")]
    Activity {
        activity_type: Option<Value>,
        activity_probability: Option<Value>,
        segment_probability: Option<Value>,
        distance_meters: Option<Value>,
        start_point: Option<Value>,
        end_point: Option<Value>,
    },
    #[serde(rename_all = "camelCase")]
    Visit {
        visit_probability: Option<Value>,
        place_id: Option<Value>,
        semantic_type: Option<Value>,
        place_location: Option<Value>,
    },
    #[serde(rename_all = "camelCase")]
    TimelinePath {
        point_count: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        first_point: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        last_point: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        timeline_path: Option<Vec<Value>>,
    },
}

impl SegmentSummary {
    /// Summarize a payload. Never fails: every missing field becomes `None`.
    pub fn from_payload(payload: SegmentPayload<'_>, include_timeline_points: bool) -> Self {
        match payload {
            SegmentPayload::Activity(activity) => Self::Activity {
                activity_type: field(activity, &["topCandidate", "type"]),
                activity_probability: field(activity, &["topCandidate", "probability"]),
                segment_probability: field(activity, &["probability"]),
                distance_meters: field(activity, &["distanceMeters"]),
                start_point: field(activity, &["start", "latLng"]),
                end_point: field(activity, &["end", "latLng"]),
            },
            SegmentPayload::Visit(visit) => Self::Visit {
                visit_probability: field(visit, &["probability"]),
                place_id: field(visit, &["topCandidate", "placeId"]),
                semantic_type: field(visit, &["topCandidate", "semanticType"]),
                place_location: field(visit, &["topCandidate", "placeLocation", "latLng"]),
            },
            SegmentPayload::TimelinePath(points) => Self::TimelinePath {
                point_count: points.len(),
                first_point: points.first().map(point_of),
                last_point: points.last().map(point_of),
                timeline_path: include_timeline_points.then(|| points.to_vec()),
            },
        }
    }

    /// The `segmentType` discriminator.
    pub fn segment_type(&self) -> &'static str {
        match self {
            Self::Activity { .. } => "activity",
            Self::Visit { .. } => "visit",
            Self::TimelinePath { .. } => "timelinePath",
        }
    }
}

fn field(root: Option<&serde_json::Map<String, Value>>, path: &[&str]) -> Option<Value> {
    lookup(root, path).cloned()
}

/// The `point` of a path entry; `null` when the entry has none.
fn point_of(entry: &Value) -> Value {
    entry.get("point").cloned().unwrap_or(Value::Null)
}

//! Day-by-day partitioning of location-history exports.
//!
//! A Google Timeline export lists "semantic segments" (activities, visits
//! and raw path traces), each spanning an arbitrary time range. This crate
//! re-files them per calendar day: segments crossing midnight are split
//! into slices, each slice gets a recomputed duration and a flat summary of
//! its segment.
//!
//! ```
//! use timeline_days::{DayIndex, PartitionOptions, TimelineDocument};
//!
//! let doc = TimelineDocument::from_json(r#"{"semanticSegments": [{
//!     "startTime": "2024-01-01T23:30:00Z",
//!     "endTime": "2024-01-02T00:30:00Z",
//!     "activity": {"topCandidate": {"type": "WALKING"}}
//! }]}"#).unwrap();
//! let index = DayIndex::build("timeline.json", &doc, &PartitionOptions::default()).unwrap();
//! assert_eq!(index.day_count, 2);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod partition;
pub mod segment;
pub mod timestamp;

pub use config::Config;
pub use document::{DayIndex, TimelineDocument};
pub use error::{ErrorKind, TimelineError};
pub use partition::{partition, split_by_day, DayBuckets, Interval, PartitionOptions, Slice, SliceOrder};
pub use segment::{SegmentPayload, SegmentSummary};
pub use timestamp::{format_iso8601, parse_iso8601};

//! Errors raised while partitioning a timeline export.

/// Coarse classification of a [`TimelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed timestamp text or document shape
    Format,
    /// Segment end precedes its start
    Order,
    /// Segment lacks a required time field
    MissingField,
}

/// Errors that can occur while reading segments and splitting them by day.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Invalid timestamp {value:?}: {reason}")]
    MalformedTimestamp { value: String, reason: &'static str },

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Segment end is before start: {start} -> {end}")]
    EndBeforeStart { start: String, end: String },

    #[error("Segment is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Segment {index}: {source}")]
    Segment {
        index: usize,
        source: Box<TimelineError>,
    },
}

impl TimelineError {
    /// Which part of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTimestamp { .. }
            | Self::MalformedTimestamp { .. }
            | Self::InvalidFormat(_) => ErrorKind::Format,
            Self::EndBeforeStart { .. } => ErrorKind::Order,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::Segment { source, .. } => source.kind(),
        }
    }

    /// Index of the segment that caused the error, if known.
    pub fn segment_index(&self) -> Option<usize> {
        match self {
            Self::Segment { index, .. } => Some(*index),
            _ => None,
        }
    }

    pub(crate) fn in_segment(self, index: usize) -> Self {
        Self::Segment {
            index,
            source: Box::new(self),
        }
    }
}

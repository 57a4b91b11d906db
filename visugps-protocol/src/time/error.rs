use std::fmt;

use thiserror::Error;

/// Component of a time of day named by a [`TimeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Hour,
    Minute,
    Second,
    /// The whole value expressed as seconds since midnight.
    Timestamp,
}

impl TimeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Second => "second",
            TimeField::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failures of the opt-in checked paths on [`TimeValue`](super::TimeValue).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("{field} out of range: {value} (max {max})")]
    OutOfRange {
        field: TimeField,
        value: u32,
        max: u32,
    },

    #[error("invalid time of day: {0}")]
    Parse(String),
}

impl TimeError {
    /// Field responsible for the failure, if the error is range related.
    pub fn field(&self) -> Option<TimeField> {
        match self {
            TimeError::OutOfRange { field, .. } => Some(*field),
            TimeError::Parse(_) => None,
        }
    }
}

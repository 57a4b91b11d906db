use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::error::{TimeError, TimeField};

pub const SECONDS_PER_MINUTE: u32 = 60;
pub const SECONDS_PER_HOUR: u32 = 3_600;
pub const SECONDS_PER_DAY: u32 = 86_400;

pub const MAX_HOUR: u8 = 23;
pub const MAX_MINUTE: u8 = 59;
pub const MAX_SECOND: u8 = 59;

/// Time of day attached to a GPS fix.
///
/// The fields are public and unchecked: any `u8` may be stored and
/// [`TimeValue::timestamp`] applies its formula regardless. Callers that
/// need the 24h/60m/60s domain go through [`TimeValue::try_new`],
/// [`TimeValue::validate`] or the `try_set_*` setters.
///
/// The type is `Copy`, so duplicating a value yields an independent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeValue {
    pub hour: u8,
    #[serde(rename = "min")]
    pub minute: u8,
    #[serde(rename = "sec")]
    pub second: u8,
}

impl TimeValue {
    /// Build a value from a raw triple without any range check.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Build a value, rejecting fields outside 0-23 / 0-59 / 0-59.
    pub fn try_new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        let value = Self::new(hour, minute, second);
        value.validate()?;
        Ok(value)
    }

    /// Inverse of [`TimeValue::timestamp`] for seconds within a single day.
    pub fn from_seconds_of_day(seconds: u32) -> Result<Self, TimeError> {
        if seconds >= SECONDS_PER_DAY {
            return Err(TimeError::OutOfRange {
                field: TimeField::Timestamp,
                value: seconds,
                max: SECONDS_PER_DAY - 1,
            });
        }

        // Each component is below 60 (or 24) here, so the narrowing is lossless.
        Ok(Self::new(
            (seconds / SECONDS_PER_HOUR) as u8,
            (seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE) as u8,
            (seconds % SECONDS_PER_MINUTE) as u8,
        ))
    }

    /// Seconds elapsed since midnight: `hour*3600 + minute*60 + second`.
    ///
    /// Out-of-domain fields are not normalised, `00:90:00` yields 5400.
    pub fn timestamp(&self) -> u32 {
        u32::from(self.hour) * SECONDS_PER_HOUR
            + u32::from(self.minute) * SECONDS_PER_MINUTE
            + u32::from(self.second)
    }

    /// Signed number of seconds from `self` to `later`.
    pub fn seconds_until(&self, later: &TimeValue) -> i64 {
        i64::from(later.timestamp()) - i64::from(self.timestamp())
    }

    /// Check every field against its domain, hour first.
    pub fn validate(&self) -> Result<(), TimeError> {
        check(TimeField::Hour, self.hour, MAX_HOUR)?;
        check(TimeField::Minute, self.minute, MAX_MINUTE)?;
        check(TimeField::Second, self.second, MAX_SECOND)
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Set the hour if it lies in 0-23; leaves `self` untouched otherwise.
    pub fn try_set_hour(&mut self, hour: u8) -> Result<(), TimeError> {
        check(TimeField::Hour, hour, MAX_HOUR)?;
        self.hour = hour;
        Ok(())
    }

    /// Set the minute if it lies in 0-59; leaves `self` untouched otherwise.
    pub fn try_set_minute(&mut self, minute: u8) -> Result<(), TimeError> {
        check(TimeField::Minute, minute, MAX_MINUTE)?;
        self.minute = minute;
        Ok(())
    }

    /// Set the second if it lies in 0-59; leaves `self` untouched otherwise.
    pub fn try_set_second(&mut self, second: u8) -> Result<(), TimeError> {
        check(TimeField::Second, second, MAX_SECOND)?;
        self.second = second;
        Ok(())
    }

    /// Convert to a chrono wall-clock time. Fails on out-of-domain fields.
    pub fn to_naive_time(&self) -> Result<NaiveTime, TimeError> {
        self.validate()?;
        NaiveTime::from_hms_opt(
            u32::from(self.hour),
            u32::from(self.minute),
            u32::from(self.second),
        )
        .ok_or_else(|| TimeError::OutOfRange {
            field: TimeField::Timestamp,
            value: self.timestamp(),
            max: SECONDS_PER_DAY - 1,
        })
    }
}

fn check(field: TimeField, value: u8, max: u8) -> Result<(), TimeError> {
    if value > max {
        return Err(TimeError::OutOfRange {
            field,
            value: u32::from(value),
            max: u32::from(max),
        });
    }
    Ok(())
}

impl From<NaiveTime> for TimeValue {
    /// Sub-second precision is dropped.
    fn from(time: NaiveTime) -> Self {
        Self::new(time.hour() as u8, time.minute() as u8, time.second() as u8)
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeValue {
    type Err = TimeError;

    /// Parses `H:M:S` with decimal components. Ranges are not checked.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parts = input.trim().split(':');
        let mut component = |field: TimeField| -> Result<u8, TimeError> {
            let raw = parts
                .next()
                .ok_or_else(|| TimeError::Parse(format!("missing {field} in {input:?}")))?;
            raw.parse::<u8>()
                .map_err(|err| TimeError::Parse(format!("bad {field} {raw:?}: {err}")))
        };

        let hour = component(TimeField::Hour)?;
        let minute = component(TimeField::Minute)?;
        let second = component(TimeField::Second)?;

        if parts.next().is_some() {
            return Err(TimeError::Parse(format!(
                "trailing component in {input:?}"
            )));
        }

        Ok(Self::new(hour, minute, second))
    }
}

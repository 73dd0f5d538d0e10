//! Date and timestamp scalars with the API's fixed wire layouts.

use std::{fmt, str::FromStr};

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::DecodeError;

/// Layout of every date-only value on the wire, e.g. `2013-08-14`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout of every timestamp on the wire, e.g. `2013-07-31 09:26:16-05`.
///
/// The offset is whole hours only; `%#z` accepts it without minutes.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%#z";

const DATE_LEN: usize = "2013-08-14".len();
const TIME_LEN: usize = "2013-07-31 09:26:16-05".len();

/// A calendar date without time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its parts, `None` if it does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

/// The zero value, 0001-01-01. Used for observations that carry no data.
impl Default for CalendarDate {
    fn default() -> Self {
        Self(NaiveDate::from_ymd_opt(1, 1, 1).unwrap_or(NaiveDate::MIN))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DATE_LEN {
            return Err(DecodeError::bad_format(format!(
                "date '{}' does not match YYYY-MM-DD",
                s
            )));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|e| DecodeError::bad_format(format!("invalid date '{}': {}", s, e)))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A point in time with the UTC offset the server reported it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    pub fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Fails for offsets that are not whole hours, which the wire layout cannot carry.
impl TryFrom<DateTime<FixedOffset>> for Timestamp {
    type Error = DecodeError;

    fn try_from(dt: DateTime<FixedOffset>) -> Result<Self, Self::Error> {
        if dt.offset().local_minus_utc() % 3600 != 0 {
            return Err(DecodeError::bad_value(format!(
                "timestamp offset {} is not a whole number of hours",
                dt.offset()
            )));
        }
        Ok(Self(dt))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let offset = self.0.offset().local_minus_utc();
        let sign = if offset < 0 { '-' } else { '+' };
        write!(
            f,
            "{}{}{:02}",
            self.0.format("%Y-%m-%d %H:%M:%S"),
            sign,
            offset.abs() / 3600
        )
    }
}

impl FromStr for Timestamp {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sign_ok = matches!(s.as_bytes().get(TIME_LEN - 3), Some(b'+' | b'-'));
        if s.len() != TIME_LEN || !sign_ok {
            return Err(DecodeError::bad_format(format!(
                "timestamp '{}' does not match YYYY-MM-DD HH:MM:SS+HH",
                s
            )));
        }
        DateTime::parse_from_str(s, TIME_FORMAT)
            .map(Self)
            .map_err(|e| DecodeError::bad_format(format!("invalid timestamp '{}': {}", s, e)))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

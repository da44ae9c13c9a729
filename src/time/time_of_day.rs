//! Wall-clock instants with minute resolution.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use qtty::{Quantity, Second};

use super::error::TimeError;

/// Number of seconds in one calendar day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Catalog time format, e.g. `9:00am` or `12:30PM`.
const CATALOG_FORMAT: &str = "%I:%M%p";

/// Display format used by exports (`HH:MM`, 24 hour clock).
const DISPLAY_FORMAT: &str = "%H:%M";

/// A time of day truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Builds a time from a 24 hour clock reading.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(TimeError::OutOfRange { hour, minute })
    }

    /// Parses a catalog time such as `"9:00am"` or `"01:15PM"`.
    ///
    /// The meridiem is matched case-insensitively and surrounding whitespace
    /// is ignored.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let normalized = s.trim().to_ascii_uppercase();
        NaiveTime::parse_from_str(&normalized, CATALOG_FORMAT)
            .map(Self)
            .map_err(|_| TimeError::InvalidTime(s.to_string()))
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(&self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight())
    }

    /// Signed difference `self - other` in seconds, without any day wrap.
    pub fn seconds_since(&self, other: TimeOfDay) -> i64 {
        self.seconds_from_midnight() - other.seconds_from_midnight()
    }

    /// Position on the day axis.
    pub fn on_axis(&self) -> Quantity<Second> {
        Quantity::new(self.seconds_from_midnight() as f64)
    }

    /// `HH:MM` on a 24 hour clock.
    pub fn format_24h(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_24h())
    }
}

impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

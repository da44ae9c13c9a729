use thiserror::Error;

/// Errors raised while parsing wall-clock times and day codes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("Cannot parse time of day: {0:?} (expected hh:mmAM/PM)")]
    InvalidTime(String),

    #[error("Time of day out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u32, minute: u32 },

    #[error("No teaching day in day code {code:?} (unrecognized {token:?})")]
    InvalidDayCode { code: String, token: String },

    #[error("Unknown weekday: {0:?}")]
    InvalidWeekday(String),
}

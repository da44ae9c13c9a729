//! Expansion of catalog meetings into per-day blocks.

use thiserror::Error;
use tracing::warn;

use super::block::{Location, TimeBlock};
use crate::catalog::MeetingRecord;
use crate::interval::IntervalError;
use crate::time::{TimeError, TimeOfDay, Weekday};

/// Why a meeting could not be turned into blocks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeetingError {
    #[error(transparent)]
    Time(#[from] TimeError),

    #[error(transparent)]
    Interval(#[from] IntervalError),
}

fn location_of(meeting: &MeetingRecord) -> Location {
    let non_empty = |s: &str| (!s.trim().is_empty()).then(|| s.trim().to_string());
    Location {
        building: non_empty(&meeting.building),
        room: non_empty(&meeting.room),
    }
}

/// Expands one meeting into one block per weekday in its day code.
///
/// A meeting with an empty day code has no weekly slot and yields no blocks;
/// its times are not inspected.
pub fn expand_meeting(owner: &str, meeting: &MeetingRecord) -> Result<Vec<TimeBlock>, MeetingError> {
    let days = Weekday::parse_day_code(&meeting.days)?;
    if days.is_empty() {
        return Ok(Vec::new());
    }

    let start = TimeOfDay::parse(&meeting.start_time)?;
    let end = TimeOfDay::parse(&meeting.end_time)?;
    let location = location_of(meeting);

    days.into_iter()
        .map(|day| TimeBlock::new(owner, day, start, end, location.clone()).map_err(Into::into))
        .collect()
}

/// Expands every meeting of a section, skipping malformed ones.
pub fn expand_meetings<'a, I>(owner: &str, meetings: I) -> Vec<TimeBlock>
where
    I: IntoIterator<Item = &'a MeetingRecord>,
{
    let mut blocks = Vec::new();
    for meeting in meetings {
        match expand_meeting(owner, meeting) {
            Ok(expanded) => blocks.extend(expanded),
            Err(e) => warn!(section = owner, days = %meeting.days, error = %e, "skipping malformed meeting"),
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting(days: &str, start: &str, end: &str) -> MeetingRecord {
        MeetingRecord {
            days: days.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            building: "ESJ".to_string(),
            room: "2204".to_string(),
        }
    }

    #[test]
    fn one_block_per_day() {
        let blocks = expand_meeting("MATH141-0101", &meeting("MWF", "9:00am", "9:50am")).unwrap();
        let days: Vec<Weekday> = blocks.iter().map(|b| b.weekday()).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert!(blocks.iter().all(|b| b.start() == TimeOfDay::from_hm(9, 0).unwrap()));
        assert!(blocks.iter().all(|b| b.end() == TimeOfDay::from_hm(9, 50).unwrap()));
        assert!(blocks.iter().all(|b| b.owner() == "MATH141-0101"));
        assert_eq!(blocks[0].location(), &Location::new("ESJ", "2204"));
    }

    #[test]
    fn two_letter_day_codes() {
        let blocks = expand_meeting("PHYS260-0101", &meeting("TuTh", "11:00am", "12:15pm")).unwrap();
        let days: Vec<Weekday> = blocks.iter().map(|b| b.weekday()).collect();
        assert_eq!(days, vec![Weekday::Tue, Weekday::Thu]);
        assert_eq!(blocks[0].end().format_24h(), "12:15");
    }

    #[test]
    fn weekend_days_do_not_drop_weekday_blocks() {
        let blocks = expand_meetings("CHEM135-0101", [&meeting("TuThSa", "9:00am", "9:50am")]);
        let days: Vec<Weekday> = blocks.iter().map(|b| b.weekday()).collect();
        assert_eq!(days, vec![Weekday::Tue, Weekday::Thu]);
    }

    #[test]
    fn code_without_teaching_days_yields_nothing() {
        assert!(matches!(
            expand_meeting("x", &meeting("TBA", "9:00am", "9:50am")),
            Err(MeetingError::Time(TimeError::InvalidDayCode { .. }))
        ));
        assert!(expand_meetings("x", [&meeting("TBA", "9:00am", "9:50am")]).is_empty());
    }

    #[test]
    fn empty_day_code_yields_nothing() {
        assert!(expand_meeting("ENES100-0101", &meeting("", "", "")).unwrap().is_empty());
    }

    #[test]
    fn malformed_time_is_an_error() {
        assert!(matches!(
            expand_meeting("x", &meeting("M", "soon", "9:50am")),
            Err(MeetingError::Time(_))
        ));
        assert!(matches!(
            expand_meeting("x", &meeting("M", "10:00am", "9:00am")),
            Err(MeetingError::Interval(_))
        ));
    }

    #[test]
    fn malformed_meetings_are_skipped() {
        let meetings = vec![
            meeting("MW", "9:00am", "9:50am"),
            meeting("F", "bad", "9:50am"),
            meeting("", "", ""),
            meeting("Th", "2:00pm", "3:15pm"),
        ];
        let blocks = expand_meetings("CHEM135-0101", &meetings);
        let days: Vec<Weekday> = blocks.iter().map(|b| b.weekday()).collect();
        assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Thu]);
    }

    #[test]
    fn blank_location_fields_become_none() {
        let mut m = meeting("M", "9:00am", "9:50am");
        m.building = " ".to_string();
        m.room = String::new();
        let blocks = expand_meeting("x", &m).unwrap();
        assert_eq!(blocks[0].location(), &Location::default());
    }
}

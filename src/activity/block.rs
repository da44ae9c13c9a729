//! Weekly recurring time blocks.

use std::fmt::{self, Display};

use qtty::Second;

use crate::interval::{Interval, IntervalError};
use crate::time::{TimeOfDay, Weekday};
use crate::Id;

/// Where a block takes place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub building: Option<String>,
    pub room: Option<String>,
}

impl Location {
    pub fn new(building: impl Into<String>, room: impl Into<String>) -> Self {
        Self {
            building: Some(building.into()),
            room: Some(room.into()),
        }
    }

    /// Free-form place, used by extracurricular activities.
    pub fn place(place: impl Into<String>) -> Self {
        Self {
            building: Some(place.into()),
            room: None,
        }
    }
}

/// One weekly occurrence of an activity on a single day.
///
/// # Invariants
///
/// - `start < end`
/// - `owner` is the id of the activity the block belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct TimeBlock {
    owner: Id,
    weekday: Weekday,
    start: TimeOfDay,
    end: TimeOfDay,
    interval: Interval<Second>,
    location: Location,
}

impl TimeBlock {
    pub fn new(
        owner: impl Into<Id>,
        weekday: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
        location: Location,
    ) -> Result<Self, IntervalError> {
        let interval = Interval::try_new(start.on_axis(), end.on_axis())?;
        Ok(Self {
            owner: owner.into(),
            weekday,
            start,
            end,
            interval,
            location,
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The block as a range on the day axis, in seconds since midnight.
    pub fn interval(&self) -> &Interval<Second> {
        &self.interval
    }
}

impl Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}-{}",
            self.owner, self.weekday, self.start, self.end
        )
    }
}

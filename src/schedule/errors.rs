use std::fmt;

use crate::time::Weekday;
use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Activity ID is already present in the schedule
    DuplicateActivity(Id),
    /// A block of the new activity overlaps a committed block
    OverlapsExisting {
        new_id: Id,
        existing_id: Id,
        day: Weekday,
    },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::DuplicateActivity(id) => {
                write!(f, "Activity {} already exists in schedule", id)
            }
            ScheduleError::OverlapsExisting {
                new_id,
                existing_id,
                day,
            } => {
                write!(
                    f,
                    "Activity {} overlaps with existing activity {} on {}",
                    new_id, existing_id, day
                )
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

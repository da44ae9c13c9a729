//! Things that occupy time in the week: course sections and extracurriculars.
//!
//! An [`Activity`] owns an ordered list of [`TimeBlock`]s. It is built from
//! catalog data (or configuration for extras), then either committed to a
//! [`WeekSchedule`](crate::schedule::WeekSchedule) as a whole or dropped.

mod block;
mod meeting;

pub use block::{Location, TimeBlock};
pub use meeting::{expand_meeting, expand_meetings, MeetingError};

use crate::catalog::SectionInfo;
use crate::interval::IntervalError;
use crate::time::{TimeOfDay, Weekday};
use crate::Id;

/// A concrete offering of a course.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSection {
    pub id: Id,
    pub course: Id,
    pub instructors: Vec<String>,
    blocks: Vec<TimeBlock>,
}

impl CourseSection {
    pub fn new(id: impl Into<Id>, course: impl Into<Id>, instructors: Vec<String>) -> Self {
        Self {
            id: id.into(),
            course: course.into(),
            instructors,
            blocks: Vec::new(),
        }
    }

    /// Builds a section from catalog data, expanding every usable meeting.
    pub fn from_info(course: &str, info: &SectionInfo) -> Self {
        let mut section = Self::new(
            info.section_id.clone(),
            info.course.clone().unwrap_or_else(|| course.to_string()),
            info.instructors.clone(),
        );
        section.blocks = expand_meetings(&info.section_id, &info.meetings);
        section
    }

    /// Adds a block on `day`. The block is owned by this section.
    pub fn add_block(
        &mut self,
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
        location: Location,
    ) -> Result<&mut Self, IntervalError> {
        self.blocks
            .push(TimeBlock::new(self.id.clone(), day, start, end, location)?);
        Ok(self)
    }
}

/// A non-course commitment such as a job or a workout.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraActivity {
    pub id: Id,
    pub description: String,
    blocks: Vec<TimeBlock>,
}

impl ExtraActivity {
    pub fn new(id: impl Into<Id>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            blocks: Vec::new(),
        }
    }

    pub fn add_block(
        &mut self,
        day: Weekday,
        start: TimeOfDay,
        end: TimeOfDay,
        location: Location,
    ) -> Result<&mut Self, IntervalError> {
        self.blocks
            .push(TimeBlock::new(self.id.clone(), day, start, end, location)?);
        Ok(self)
    }
}

/// Anything that can be placed on the weekly grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Activity {
    Section(CourseSection),
    Extra(ExtraActivity),
}

impl Activity {
    pub fn id(&self) -> &str {
        match self {
            Activity::Section(s) => &s.id,
            Activity::Extra(e) => &e.id,
        }
    }

    /// All blocks in insertion order.
    pub fn blocks(&self) -> &[TimeBlock] {
        match self {
            Activity::Section(s) => &s.blocks,
            Activity::Extra(e) => &e.blocks,
        }
    }

    pub fn blocks_on(&self, day: Weekday) -> impl Iterator<Item = &TimeBlock> + '_ {
        self.blocks().iter().filter(move |b| b.weekday() == day)
    }

    /// Days the activity occupies, in week order.
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .into_iter()
            .filter(|day| self.blocks().iter().any(|b| b.weekday() == *day))
            .collect()
    }

    /// Instructors of a section; extras have none.
    pub fn instructors(&self) -> &[String] {
        match self {
            Activity::Section(s) => &s.instructors,
            Activity::Extra(_) => &[],
        }
    }

    pub fn is_section(&self) -> bool {
        matches!(self, Activity::Section(_))
    }
}

impl From<CourseSection> for Activity {
    fn from(section: CourseSection) -> Self {
        Activity::Section(section)
    }
}

impl From<ExtraActivity> for Activity {
    fn from(extra: ExtraActivity) -> Self {
        Activity::Extra(extra)
    }
}

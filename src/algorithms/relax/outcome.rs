//! Per-course outcomes and the result of a whole build.

use std::fmt::{self, Display};

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::constraints::PriorityEntry;
use crate::export::ExportError;
use crate::schedule::errors::ScheduleError;
use crate::schedule::WeekSchedule;
use crate::Id;

/// Fatal build errors. Unsatisfiable courses are not errors; they are
/// reported through [`CourseState::Failed`].
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("schedule update failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}

/// Terminal state of one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseState {
    /// `section` was committed with the first `active` constraints in force.
    Found { section: Id, active: usize },
    /// No section fit, even with every soft constraint dropped. `attempted`
    /// lists the subset sizes tried, largest first; `last_constrained` is the
    /// smallest non-empty subset tried (empty if the list was).
    Failed {
        attempted: Vec<usize>,
        last_constrained: Vec<PriorityEntry>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOutcome {
    pub course: Id,
    pub state: CourseState,
}

impl CourseOutcome {
    pub fn found(course: impl Into<Id>, section: impl Into<Id>, active: usize) -> Self {
        Self {
            course: course.into(),
            state: CourseState::Found {
                section: section.into(),
                active,
            },
        }
    }

    pub fn failed(
        course: impl Into<Id>,
        attempted: Vec<usize>,
        last_constrained: Vec<PriorityEntry>,
    ) -> Self {
        Self {
            course: course.into(),
            state: CourseState::Failed {
                attempted,
                last_constrained,
            },
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.state, CourseState::Found { .. })
    }

    /// The committed section, if any.
    pub fn section(&self) -> Option<&str> {
        match &self.state {
            CourseState::Found { section, .. } => Some(section.as_str()),
            CourseState::Failed { .. } => None,
        }
    }
}

impl Display for CourseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            CourseState::Found { section, active } => {
                write!(f, "{}: {} ({} constraint(s) active)", self.course, section, active)
            }
            CourseState::Failed {
                attempted,
                last_constrained,
            } => {
                let sizes: Vec<String> = attempted.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "{}: no compatible section (subset sizes tried: {}; gave up at {})",
                    self.course,
                    sizes.join(", "),
                    attempted.last().copied().unwrap_or(0)
                )?;
                if !last_constrained.is_empty() {
                    let entries: Vec<String> =
                        last_constrained.iter().map(ToString::to_string).collect();
                    write!(f, "; still failing under {{{}}}", entries.join("; "))?;
                }
                Ok(())
            }
        }
    }
}

/// Everything a build produced.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub schedule: WeekSchedule,
    pub outcomes: Vec<CourseOutcome>,
}

impl BuildReport {
    /// True when every course found a section.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CourseOutcome::is_found)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CourseOutcome> + '_ {
        self.outcomes.iter().filter(|o| !o.is_found())
    }

    pub fn outcome(&self, course: &str) -> Option<&CourseOutcome> {
        self.outcomes.iter().find(|o| o.course == course)
    }

    /// Section committed for `course`, if it was placed.
    pub fn section_for(&self, course: &str) -> Option<&str> {
        self.outcome(course).and_then(CourseOutcome::section)
    }
}

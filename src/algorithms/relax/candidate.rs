//! Accept/reject decision for one candidate section and its atomic commit.

use std::fmt::{self, Display};

use tracing::{debug, warn};

use crate::activity::Activity;
use crate::constraints::{
    evaluate, ConstraintError, ConstraintOutcome, ExclusionRule, IndeterminatePolicy,
    PriorityEntry, Violation, ViolationKind,
};
use crate::schedule::errors::ScheduleError;
use crate::schedule::{Conflict, WeekSchedule};
use crate::time::Weekday;

/// Fixed rules applied to every candidate of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRules {
    pub exclusion: ExclusionRule,
    pub policy: IndeterminatePolicy,
}

/// Why a candidate was turned down.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Reserved section while reserved sections are not allowed.
    Excluded { prefix: String },
    /// The same activity is already on the grid.
    AlreadyCommitted,
    Constraint { day: Weekday, violation: Violation },
    /// Malformed constraint data under [`IndeterminatePolicy::Reject`].
    Indeterminate { day: Weekday, error: ConstraintError },
    Overlap(Conflict),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Excluded { prefix } => write!(f, "reserved section ({prefix})"),
            Rejection::AlreadyCommitted => write!(f, "already committed"),
            Rejection::Constraint { day, violation } => {
                let direction = match violation.kind {
                    ViolationKind::TooEarly => "starts",
                    ViolationKind::TooLate => "ends",
                };
                let side = match violation.kind {
                    ViolationKind::TooEarly => "early",
                    ViolationKind::TooLate => "late",
                };
                write!(
                    f,
                    "{direction} {:.0} s too {side} on {day} (boundary {})",
                    violation.by.value(),
                    violation.boundary
                )
            }
            Rejection::Indeterminate { day, error } => {
                write!(f, "cannot evaluate constraint on {day}: {error}")
            }
            Rejection::Overlap(conflict) => write!(
                f,
                "overlaps {:.0} s with {} on {}",
                conflict.by.value(),
                conflict.existing_id,
                conflict.day
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Checks the active constraints for one day's blocks.
///
/// Returns `Some(rejection)` on the first violation. An indeterminate entry
/// under [`IndeterminatePolicy::PassDay`] ends the evaluation for the day with
/// a pass, leaving the remaining entries unchecked.
fn check_day_constraints(
    candidate: &Activity,
    day: Weekday,
    active: &[PriorityEntry],
    policy: IndeterminatePolicy,
) -> Option<Rejection> {
    for entry in active {
        match evaluate(entry, candidate.blocks_on(day)) {
            ConstraintOutcome::Satisfied | ConstraintOutcome::Unenforced => {}
            ConstraintOutcome::Violated(violation) => {
                return Some(Rejection::Constraint { day, violation });
            }
            ConstraintOutcome::Indeterminate(error) => match policy {
                IndeterminatePolicy::PassDay => {
                    warn!(
                        activity = candidate.id(),
                        %day,
                        %error,
                        "constraint cannot be evaluated; treating the day as passing"
                    );
                    return None;
                }
                IndeterminatePolicy::Reject => {
                    return Some(Rejection::Indeterminate { day, error });
                }
            },
        }
    }
    None
}

/// Decides whether `candidate` fits the schedule under the active subset.
///
/// Order of checks: hard exclusion, duplicate commit, then for each day the
/// candidate occupies (Monday first) the soft constraints followed by overlap
/// with other activities. The schedule is never modified.
pub fn check_conflicts(
    candidate: &Activity,
    active: &[PriorityEntry],
    schedule: &WeekSchedule,
    rules: &SelectionRules,
) -> Verdict {
    if rules.exclusion.excludes(candidate) {
        return Verdict::Rejected(Rejection::Excluded {
            prefix: rules.exclusion.prefix().to_string(),
        });
    }

    if schedule.contains_activity(candidate.id()) {
        return Verdict::Rejected(Rejection::AlreadyCommitted);
    }

    for day in candidate.days() {
        if let Some(rejection) = check_day_constraints(candidate, day, active, rules.policy) {
            return Verdict::Rejected(rejection);
        }

        if let Some(conflict) = schedule.first_conflict(candidate.blocks_on(day)) {
            return Verdict::Rejected(Rejection::Overlap(conflict));
        }
    }

    Verdict::Accepted
}

/// Runs [`check_conflicts`] and, on acceptance, commits all of the
/// candidate's blocks in one step.
pub fn try_commit(
    candidate: &Activity,
    active: &[PriorityEntry],
    schedule: &mut WeekSchedule,
    rules: &SelectionRules,
) -> Result<Verdict, ScheduleError> {
    let verdict = check_conflicts(candidate, active, schedule, rules);
    match &verdict {
        Verdict::Accepted => schedule.commit(candidate)?,
        Verdict::Rejected(reason) => {
            debug!(activity = candidate.id(), %reason, "candidate rejected");
        }
    }
    Ok(verdict)
}

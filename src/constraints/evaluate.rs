//! Evaluation of time-boundary constraints against a day's blocks.

use qtty::{Quantity, Second};
use serde::Deserialize;

use super::error::ConstraintError;
use super::priority::{Constraint, PriorityEntry};
use crate::activity::TimeBlock;
use crate::time::{TimeOfDay, SECONDS_PER_DAY};

/// Which boundary was crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    TooEarly,
    TooLate,
}

/// A boundary violation with its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Violation {
    pub kind: ViolationKind,
    pub boundary: TimeOfDay,
    pub by: Quantity<Second>,
}

/// Result of evaluating one priority entry for one day.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintOutcome {
    Satisfied,
    Violated(Violation),
    /// The entry could not be evaluated (missing or malformed value).
    Indeterminate(ConstraintError),
    /// The entry kind is accepted as data but never affects selection.
    Unenforced,
}

/// What to do with an [`ConstraintOutcome::Indeterminate`] result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndeterminatePolicy {
    /// The active subset counts as passing for the rest of that course-day.
    #[default]
    PassDay,
    /// The candidate is rejected.
    Reject,
}

/// Folds a negative same-day difference into "seconds short of the boundary".
///
/// A zero magnitude cannot be told apart from "no violation" and is reported
/// as such.
fn folded_violation(diff: i64) -> Option<Quantity<Second>> {
    if diff >= 0 {
        return None;
    }
    let magnitude = SECONDS_PER_DAY - diff.rem_euclid(SECONDS_PER_DAY);
    (magnitude != 0).then(|| Quantity::new(magnitude as f64))
}

/// Seconds by which `start` precedes `boundary`, if it does.
pub fn starts_too_early(start: TimeOfDay, boundary: TimeOfDay) -> Option<Quantity<Second>> {
    folded_violation(start.seconds_since(boundary))
}

/// Seconds by which `end` runs past `boundary`, if it does.
pub fn ends_too_late(end: TimeOfDay, boundary: TimeOfDay) -> Option<Quantity<Second>> {
    folded_violation(boundary.seconds_since(end))
}

/// Evaluates `entry` against the blocks a candidate holds on one day.
///
/// Every block is checked; the first offending block determines the
/// reported violation.
pub fn evaluate<'a, I>(entry: &PriorityEntry, blocks: I) -> ConstraintOutcome
where
    I: IntoIterator<Item = &'a TimeBlock>,
{
    if !entry.priority.is_enforced() {
        return ConstraintOutcome::Unenforced;
    }

    let constraint = match entry.resolve() {
        Ok(constraint) => constraint,
        Err(e) => return ConstraintOutcome::Indeterminate(e),
    };

    for block in blocks {
        let violation = match constraint {
            Constraint::EarliestClass(boundary) => {
                starts_too_early(block.start(), boundary).map(|by| Violation {
                    kind: ViolationKind::TooEarly,
                    boundary,
                    by,
                })
            }
            Constraint::LatestClass(boundary) => {
                ends_too_late(block.end(), boundary).map(|by| Violation {
                    kind: ViolationKind::TooLate,
                    boundary,
                    by,
                })
            }
            _ => None,
        };
        if let Some(violation) = violation {
            return ConstraintOutcome::Violated(violation);
        }
    }

    ConstraintOutcome::Satisfied
}

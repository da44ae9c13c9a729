//! Soft constraints, their evaluation, and the hard exclusion rule.
//!
//! Only `earliest_class` and `latest_class` influence section selection. The
//! remaining kinds (`professor`, `section`, `extra`, `free_day`) are parsed and
//! carried in the priority list but always evaluate to
//! [`ConstraintOutcome::Unenforced`].

pub mod error;
pub mod evaluate;
pub mod exclusion;
pub mod priority;

pub use error::ConstraintError;
pub use evaluate::{
    ends_too_late, evaluate, starts_too_early, ConstraintOutcome, IndeterminatePolicy, Violation,
    ViolationKind,
};
pub use exclusion::{ExclusionRule, DEFAULT_RESERVED_PREFIX};
pub use priority::{Constraint, PriorityEntry, PriorityKind, PriorityList};

use thiserror::Error;

use super::PriorityKind;
use crate::time::TimeError;

/// Errors that can occur while resolving a priority entry into a constraint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    #[error("{kind} expects a value at index {index}")]
    MissingValue { kind: PriorityKind, index: usize },

    #[error("{kind} has a malformed value: {source}")]
    MalformedValue {
        kind: PriorityKind,
        #[source]
        source: TimeError,
    },
}

//! Hard exclusion of reserved sections (Freshman Connection).

use crate::activity::Activity;

/// Default reserved prefix for Freshman Connection sections (`MATH141-FC01`).
pub const DEFAULT_RESERVED_PREFIX: &str = "FC";

/// Rejects course sections whose section token starts with a reserved prefix.
///
/// The section token is the part of the identifier after the first `-`.
/// Identifiers without a `-` carry no token and never match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRule {
    prefix: String,
    allow_reserved: bool,
}

impl ExclusionRule {
    pub fn new(prefix: impl Into<String>, allow_reserved: bool) -> Self {
        Self {
            prefix: prefix.into(),
            allow_reserved,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn allows_reserved(&self) -> bool {
        self.allow_reserved
    }

    /// Returns true if `section_id` names a reserved section.
    pub fn is_reserved(&self, section_id: &str) -> bool {
        !self.prefix.is_empty()
            && section_id
                .split_once('-')
                .is_some_and(|(_, token)| token.starts_with(&self.prefix))
    }

    /// Returns true if the candidate must be rejected outright.
    pub fn excludes(&self, candidate: &Activity) -> bool {
        match candidate {
            Activity::Section(section) => !self.allow_reserved && self.is_reserved(&section.id),
            Activity::Extra(_) => false,
        }
    }
}

impl Default for ExclusionRule {
    fn default() -> Self {
        Self::new(DEFAULT_RESERVED_PREFIX, false)
    }
}

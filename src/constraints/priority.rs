//! Ranked soft constraints as supplied by the user.

use std::fmt::{self, Display};
use std::ops::Deref;

use serde::Deserialize;

use super::error::ConstraintError;
use crate::time::{TimeOfDay, Weekday};
use crate::Id;

/// The kind of a priority entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityKind {
    #[serde(alias = "EarliestClass")]
    EarliestClass,
    #[serde(alias = "LatestClass")]
    LatestClass,
    #[serde(alias = "Professor")]
    Professor,
    #[serde(alias = "Section")]
    Section,
    #[serde(alias = "Extra")]
    Extra,
    #[serde(alias = "FreeDay")]
    FreeDay,
}

impl PriorityKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            PriorityKind::EarliestClass => "earliest_class",
            PriorityKind::LatestClass => "latest_class",
            PriorityKind::Professor => "professor",
            PriorityKind::Section => "section",
            PriorityKind::Extra => "extra",
            PriorityKind::FreeDay => "free_day",
        }
    }

    /// Only time boundaries take part in section selection.
    pub const fn is_enforced(self) -> bool {
        matches!(self, PriorityKind::EarliestClass | PriorityKind::LatestClass)
    }
}

impl Display for PriorityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw entry of the priority list, e.g.
/// `{"priority": "earliest_class", "value": ["9:00am"]}`.
///
/// Values stay unparsed until evaluation so that a malformed entry degrades
/// into an indeterminate outcome instead of failing the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriorityEntry {
    pub priority: PriorityKind,
    #[serde(default)]
    pub value: Vec<String>,
}

impl PriorityEntry {
    pub fn new<I, S>(priority: PriorityKind, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            priority,
            value: value.into_iter().map(Into::into).collect(),
        }
    }

    pub fn earliest_class(time: &str) -> Self {
        Self::new(PriorityKind::EarliestClass, [time])
    }

    pub fn latest_class(time: &str) -> Self {
        Self::new(PriorityKind::LatestClass, [time])
    }

    fn arg(&self, index: usize) -> Result<&str, ConstraintError> {
        self.value
            .get(index)
            .map(String::as_str)
            .ok_or(ConstraintError::MissingValue {
                kind: self.priority,
                index,
            })
    }

    fn time_arg(&self, index: usize) -> Result<TimeOfDay, ConstraintError> {
        TimeOfDay::parse(self.arg(index)?).map_err(|source| ConstraintError::MalformedValue {
            kind: self.priority,
            source,
        })
    }

    /// Parses the raw values into a typed [`Constraint`].
    pub fn resolve(&self) -> Result<Constraint, ConstraintError> {
        Ok(match self.priority {
            PriorityKind::EarliestClass => Constraint::EarliestClass(self.time_arg(0)?),
            PriorityKind::LatestClass => Constraint::LatestClass(self.time_arg(0)?),
            PriorityKind::Professor => Constraint::Professor {
                course: self.arg(0)?.to_string(),
                name: self.arg(1)?.to_string(),
            },
            PriorityKind::Section => Constraint::Section(self.arg(0)?.to_string()),
            PriorityKind::Extra => Constraint::Extra {
                start: self.time_arg(0)?,
                end: self.time_arg(1)?,
            },
            PriorityKind::FreeDay => {
                let day = self.arg(0)?.parse::<Weekday>().map_err(|source| {
                    ConstraintError::MalformedValue {
                        kind: self.priority,
                        source,
                    }
                })?;
                Constraint::FreeDay(day)
            }
        })
    }
}

impl Display for PriorityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: [{}]", self.priority, self.value.join(", "))
    }
}

/// A soft constraint in typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// No class may start before this time.
    EarliestClass(TimeOfDay),
    /// No class may end after this time.
    LatestClass(TimeOfDay),
    Professor { course: Id, name: String },
    Section(Id),
    Extra { start: TimeOfDay, end: TimeOfDay },
    FreeDay(Weekday),
}

/// Priority-ordered constraints, most important first.
///
/// Relaxation drops entries from the tail, so the active subset at level `k`
/// is always the first `k` entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PriorityList(Vec<PriorityEntry>);

impl PriorityList {
    pub fn new(entries: Vec<PriorityEntry>) -> Self {
        Self(entries)
    }

    /// The first `k` entries (clamped to the list length).
    pub fn active(&self, k: usize) -> &[PriorityEntry] {
        &self.0[..k.min(self.0.len())]
    }
}

impl Deref for PriorityList {
    type Target = [PriorityEntry];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<PriorityEntry>> for PriorityList {
    fn from(entries: Vec<PriorityEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<PriorityEntry> for PriorityList {
    fn from_iter<I: IntoIterator<Item = PriorityEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_snake_case_and_pascal_case() {
        let list: PriorityList = serde_json::from_str(
            r#"[
                {"priority": "earliest_class", "value": ["9:00am"]},
                {"priority": "LatestClass", "value": ["2:00pm"]},
                {"priority": "free_day"}
            ]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].priority, PriorityKind::EarliestClass);
        assert_eq!(list[1].priority, PriorityKind::LatestClass);
        assert!(list[2].value.is_empty());
    }

    #[test]
    fn unknown_kind_fails_to_deserialize() {
        let parsed = serde_json::from_str::<PriorityEntry>(r#"{"priority": "lunch", "value": []}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn active_subset_is_a_prefix() {
        let list = PriorityList::from(vec![
            PriorityEntry::earliest_class("9:00am"),
            PriorityEntry::latest_class("2:00pm"),
        ]);
        assert_eq!(list.active(2).len(), 2);
        assert_eq!(list.active(1), &list[..1]);
        assert!(list.active(0).is_empty());
        assert_eq!(list.active(10).len(), 2);
    }

    #[test]
    fn resolves_time_boundaries() {
        assert_eq!(
            PriorityEntry::earliest_class("9:00am").resolve(),
            Ok(Constraint::EarliestClass(TimeOfDay::from_hm(9, 0).unwrap()))
        );
        assert_eq!(
            PriorityEntry::latest_class("2:00pm").resolve(),
            Ok(Constraint::LatestClass(TimeOfDay::from_hm(14, 0).unwrap()))
        );
    }

    #[test]
    fn resolves_unenforced_kinds() {
        let prof = PriorityEntry::new(PriorityKind::Professor, ["MATH141", "Jane Doe"]);
        assert_eq!(
            prof.resolve(),
            Ok(Constraint::Professor {
                course: "MATH141".to_string(),
                name: "Jane Doe".to_string()
            })
        );
        let free = PriorityEntry::new(PriorityKind::FreeDay, ["F"]);
        assert_eq!(free.resolve(), Ok(Constraint::FreeDay(Weekday::Fri)));
        assert!(!PriorityKind::FreeDay.is_enforced());
    }

    #[test]
    fn missing_value_is_reported() {
        let entry = PriorityEntry::new(PriorityKind::EarliestClass, Vec::<String>::new());
        assert_eq!(
            entry.resolve(),
            Err(ConstraintError::MissingValue {
                kind: PriorityKind::EarliestClass,
                index: 0
            })
        );
    }

    #[test]
    fn malformed_time_is_reported() {
        let entry = PriorityEntry::earliest_class("whenever");
        assert!(matches!(
            entry.resolve(),
            Err(ConstraintError::MalformedValue { .. })
        ));
    }

    #[test]
    fn display_lists_values() {
        assert_eq!(
            PriorityEntry::earliest_class("9:00am").to_string(),
            "earliest_class: [9:00am]"
        );
    }
}

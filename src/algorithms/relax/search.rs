//! First-fit section search for one course under one constraint subset.

use tracing::{debug, info};

use super::candidate::{try_commit, SelectionRules, Verdict};
use super::outcome::BuildError;
use crate::activity::{Activity, CourseSection};
use crate::catalog::{Catalog, CatalogError};
use crate::constraints::PriorityEntry;
use crate::schedule::WeekSchedule;
use crate::Id;

/// Sections of one course, fetched from the catalog on first use.
///
/// The pool lives for the whole relaxation of a course, so each section's
/// meeting data is requested at most once however many subsets are tried.
pub struct SectionPool<'c, C: Catalog> {
    catalog: &'c C,
    course: Id,
    ids: Vec<Id>,
    loaded: Vec<Option<Activity>>,
}

impl<'c, C: Catalog> SectionPool<'c, C> {
    /// Looks up the section list of `course`.
    pub fn open(catalog: &'c C, course: &str) -> Result<Self, CatalogError> {
        let ids = catalog.sections(course)?;
        debug!(course, sections = ids.len(), "section list fetched");
        let loaded = vec![None; ids.len()];
        Ok(Self {
            catalog,
            course: course.to_string(),
            ids,
            loaded,
        })
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The candidate at `index`, in catalog order.
    pub fn candidate(&mut self, index: usize) -> Result<&Activity, CatalogError> {
        let activity = match self.loaded[index].take() {
            Some(activity) => activity,
            None => {
                let info = self.catalog.section(&self.ids[index])?;
                Activity::from(CourseSection::from_info(&self.course, &info))
            }
        };
        Ok(self.loaded[index].insert(activity))
    }
}

/// Tries the course's sections in catalog order and commits the first one
/// accepted under `active`. Returns its id, or `None` if none fits.
pub fn find_section<C: Catalog>(
    pool: &mut SectionPool<'_, C>,
    active: &[PriorityEntry],
    schedule: &mut WeekSchedule,
    rules: &SelectionRules,
) -> Result<Option<Id>, BuildError> {
    let course = pool.course().to_string();
    for index in 0..pool.len() {
        let candidate = pool.candidate(index)?;
        if let Verdict::Accepted = try_commit(candidate, active, schedule, rules)? {
            info!(course = %course, section = candidate.id(), "section found");
            return Ok(Some(candidate.id().to_string()));
        }
    }
    Ok(None)
}

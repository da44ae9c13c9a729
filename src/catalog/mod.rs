//! Course catalog lookups.
//!
//! The scheduler only needs [`Catalog::sections`] and [`Catalog::section`];
//! professor lookups back the (unenforced) professor preferences.

mod error;
mod memory;

pub use error::CatalogError;
pub use memory::InMemoryCatalog;

use serde::Deserialize;

use crate::Id;

/// One scheduled meeting of a section as published by the catalog.
///
/// Times use the catalog's `hh:mmam` format; an empty `days` marks a meeting
/// without a fixed weekly slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MeetingRecord {
    #[serde(default)]
    pub days: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub room: String,
}

/// Meeting data and staff for one section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionInfo {
    pub section_id: Id,
    #[serde(default)]
    pub course: Option<Id>,
    #[serde(default)]
    pub instructors: Vec<String>,
    #[serde(default)]
    pub meetings: Vec<MeetingRecord>,
}

/// A course/semester pair a professor taught.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaughtRecord {
    pub course_id: Id,
    pub semester: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfessorRecord {
    pub name: String,
    #[serde(default)]
    pub taught: Vec<TaughtRecord>,
}

/// Source of course, section and professor data.
///
/// Lookups are synchronous; the build waits on each call. Implementations
/// must return sections in a deterministic order, which becomes the order
/// in which candidates are tried.
pub trait Catalog {
    /// Section ids offered for `course_id`, in catalog order.
    fn sections(&self, course_id: &str) -> Result<Vec<Id>, CatalogError>;

    /// Instructors and meetings of one section.
    fn section(&self, section_id: &str) -> Result<SectionInfo, CatalogError>;

    /// Professors whose name matches `name`.
    fn professor(&self, name: &str) -> Result<Vec<ProfessorRecord>, CatalogError>;

    /// Names of the professors teaching `course_id` in `semester`.
    fn course_professors(&self, course_id: &str, semester: &str) -> Result<Vec<String>, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn sections(&self, course_id: &str) -> Result<Vec<Id>, CatalogError> {
        (**self).sections(course_id)
    }

    fn section(&self, section_id: &str) -> Result<SectionInfo, CatalogError> {
        (**self).section(section_id)
    }

    fn professor(&self, name: &str) -> Result<Vec<ProfessorRecord>, CatalogError> {
        (**self).professor(name)
    }

    fn course_professors(&self, course_id: &str, semester: &str) -> Result<Vec<String>, CatalogError> {
        (**self).course_professors(course_id, semester)
    }
}

//! Catalog backed by in-memory tables, loadable from a JSON snapshot.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::{Catalog, CatalogError, ProfessorRecord, SectionInfo};
use crate::Id;

#[derive(Debug, Deserialize)]
struct CourseRecord {
    course_id: Id,
    #[serde(default)]
    sections: Vec<Id>,
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    courses: Vec<CourseRecord>,
    #[serde(default)]
    sections: Vec<SectionInfo>,
    #[serde(default)]
    professors: Vec<ProfessorRecord>,
}

/// A [`Catalog`] serving a fixed snapshot.
///
/// # Example
///
/// ```
/// use weekgrid::catalog::{Catalog, InMemoryCatalog};
///
/// let catalog = InMemoryCatalog::from_json_str(r#"{
///     "courses": [{"course_id": "MATH141", "sections": ["MATH141-0101"]}],
///     "sections": [{
///         "section_id": "MATH141-0101",
///         "instructors": ["Jane Doe"],
///         "meetings": [{"days": "MWF", "start_time": "9:00am", "end_time": "9:50am"}]
///     }]
/// }"#).unwrap();
///
/// assert_eq!(catalog.sections("MATH141").unwrap(), vec!["MATH141-0101".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    courses: HashMap<Id, Vec<Id>>,
    sections: HashMap<Id, SectionInfo>,
    professors: Vec<ProfessorRecord>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for course in snapshot.courses {
            catalog.add_course(course.course_id, course.sections);
        }
        for section in snapshot.sections {
            catalog.add_section(section);
        }
        for professor in snapshot.professors {
            catalog.add_professor(professor);
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Registers `course_id` with its sections in lookup order.
    pub fn add_course(&mut self, course_id: impl Into<Id>, sections: Vec<Id>) -> &mut Self {
        self.courses.insert(course_id.into(), sections);
        self
    }

    pub fn add_section(&mut self, section: SectionInfo) -> &mut Self {
        self.sections.insert(section.section_id.clone(), section);
        self
    }

    pub fn add_professor(&mut self, professor: ProfessorRecord) -> &mut Self {
        self.professors.push(professor);
        self
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

impl Catalog for InMemoryCatalog {
    fn sections(&self, course_id: &str) -> Result<Vec<Id>, CatalogError> {
        self.courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| CatalogError::CourseNotFound(course_id.to_string()))
    }

    fn section(&self, section_id: &str) -> Result<SectionInfo, CatalogError> {
        self.sections
            .get(section_id)
            .cloned()
            .ok_or_else(|| CatalogError::SectionNotFound(section_id.to_string()))
    }

    fn professor(&self, name: &str) -> Result<Vec<ProfessorRecord>, CatalogError> {
        Ok(self
            .professors
            .iter()
            .filter(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .cloned()
            .collect())
    }

    fn course_professors(&self, course_id: &str, semester: &str) -> Result<Vec<String>, CatalogError> {
        let mut names: Vec<String> = Vec::new();
        for professor in &self.professors {
            let teaches = professor
                .taught
                .iter()
                .any(|t| t.course_id == course_id && t.semester == semester);
            if teaches && !names.contains(&professor.name) {
                names.push(professor.name.clone());
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "courses": [
            {"course_id": "MATH141", "sections": ["MATH141-0201", "MATH141-0101"]},
            {"course_id": "ENES100", "sections": []}
        ],
        "sections": [
            {
                "section_id": "MATH141-0101",
                "course": "MATH141",
                "instructors": ["Jane Doe"],
                "meetings": [
                    {"days": "MWF", "start_time": "8:00am", "end_time": "8:50am",
                     "building": "ESJ", "room": "0202", "classtype": ""}
                ]
            },
            {"section_id": "MATH141-0201"}
        ],
        "professors": [
            {"name": "Jane Doe", "taught": [
                {"course_id": "MATH141", "semester": "202308"},
                {"course_id": "MATH140", "semester": "202308"}
            ]},
            {"name": "John Roe", "taught": [{"course_id": "MATH141", "semester": "202301"}]},
            {"name": "Jane Doe", "taught": [{"course_id": "MATH141", "semester": "202308"}]}
        ]
    }"#;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::from_json_str(SNAPSHOT).unwrap()
    }

    #[test]
    fn sections_keep_catalog_order() {
        assert_eq!(
            catalog().sections("MATH141").unwrap(),
            vec!["MATH141-0201".to_string(), "MATH141-0101".to_string()]
        );
        assert!(catalog().sections("ENES100").unwrap().is_empty());
    }

    #[test]
    fn unknown_course_is_an_error() {
        assert!(matches!(
            catalog().sections("PHYS999"),
            Err(CatalogError::CourseNotFound(id)) if id == "PHYS999"
        ));
    }

    #[test]
    fn section_lookup_returns_meetings() {
        let info = catalog().section("MATH141-0101").unwrap();
        assert_eq!(info.instructors, vec!["Jane Doe".to_string()]);
        assert_eq!(info.meetings.len(), 1);
        assert_eq!(info.meetings[0].days, "MWF");
        assert_eq!(info.meetings[0].room, "0202");

        let bare = catalog().section("MATH141-0201").unwrap();
        assert!(bare.meetings.is_empty());
    }

    #[test]
    fn unknown_section_is_an_error() {
        assert!(matches!(
            catalog().section("MATH141-9999"),
            Err(CatalogError::SectionNotFound(_))
        ));
    }

    #[test]
    fn professor_lookup_is_case_insensitive() {
        assert_eq!(catalog().professor("jane doe").unwrap().len(), 2);
        assert!(catalog().professor("Nobody").unwrap().is_empty());
    }

    #[test]
    fn course_professors_filter_by_semester_and_dedupe() {
        assert_eq!(
            catalog().course_professors("MATH141", "202308").unwrap(),
            vec!["Jane Doe".to_string()]
        );
        assert_eq!(
            catalog().course_professors("MATH141", "202301").unwrap(),
            vec!["John Roe".to_string()]
        );
        assert!(catalog().course_professors("CHEM135", "202308").unwrap().is_empty());
    }

    #[test]
    fn malformed_snapshot_fails_to_load() {
        assert!(matches!(
            InMemoryCatalog::from_json_str("{\"courses\": 3}"),
            Err(CatalogError::Decode(_))
        ));
    }

    #[test]
    fn builder_methods_register_entries() {
        let mut catalog = InMemoryCatalog::new();
        catalog
            .add_course("CHEM135", vec!["CHEM135-0101".to_string()])
            .add_section(SectionInfo {
                section_id: "CHEM135-0101".to_string(),
                course: Some("CHEM135".to_string()),
                instructors: vec![],
                meetings: vec![],
            });
        assert_eq!(catalog.course_count(), 1);
        assert_eq!(catalog.section_count(), 1);
    }
}

use thiserror::Error;

/// Failures of a catalog lookup. These abort the whole build.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Course not found in catalog: {0}")]
    CourseNotFound(String),

    #[error("Section not found in catalog: {0}")]
    SectionNotFound(String),

    #[error("Catalog lookup failed: {0}")]
    Unavailable(String),

    #[error("Cannot read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot decode catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

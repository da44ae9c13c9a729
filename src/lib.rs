//! weekgrid - weekly class schedule builder
//!
//! Places one section per requested course onto a Monday–Friday grid,
//! honoring time-of-day preferences in priority order and relaxing the
//! lowest-priority ones until a non-overlapping section fits.

pub mod activity;
pub mod algorithms;
pub mod catalog;
pub mod config;
pub mod constraints;
pub mod export;
pub mod interval;
pub mod logging;
pub mod schedule;
pub mod time;

/// Identifier type used for courses, sections and extracurricular activities.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}

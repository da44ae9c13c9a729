pub mod relax;

pub use relax::{BuildError, BuildReport, BuildRequest, RelaxationScheduler};

use crate::catalog::Catalog;

/// Algorithm that turns a course request into a committed weekly schedule.
///
/// # Arguments
///
/// * `request` - Courses, priorities and pre-committed extras
/// * `catalog` - Source of section lists and meeting data
///
/// # Returns
///
/// A [`BuildReport`] with the schedule and one outcome per course. Catalog
/// failures abort the build and are returned as [`BuildError`].
pub trait SchedulingAlgorithm {
    fn build<C: Catalog>(
        &self,
        request: &BuildRequest,
        catalog: &C,
    ) -> Result<BuildReport, BuildError>;
}

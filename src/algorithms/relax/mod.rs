//! Priority relaxation scheduling.
//!
//! Courses are placed one at a time, in request order, onto a shared
//! [`WeekSchedule`]. For each course the algorithm runs a small state machine:
//!
//! 1. **Searching(k)**: with the first `k` entries of the priority list active
//!    (starting at the full list), try the course's sections in catalog order
//!    and commit the first one that passes [`check_conflicts`].
//! 2. If none passes and `k > 0`, drop the lowest-priority entry and search
//!    again with `k - 1`.
//! 3. If none passes at `k == 0` the course is **Failed**; the schedule is
//!    left as it was and the next course is processed.
//!
//! Placement is first-fit and final. A committed section is never revisited,
//! even when it leaves no room for a later course.
//!
//! # Module Structure
//!
//! - [`candidate`] - accept/reject decision and atomic commit
//! - [`search`] - lazily loaded section pool and first-fit search
//! - [`outcome`] - per-course states, build report, fatal errors

pub mod candidate;
pub mod outcome;
pub mod search;


use tracing::{info, warn};

use crate::activity::Activity;
use crate::catalog::Catalog;
use crate::constraints::{ExclusionRule, IndeterminatePolicy, PriorityList};
use crate::export::Exporter;
use crate::schedule::WeekSchedule;
use crate::Id;

pub use candidate::{check_conflicts, try_commit, Rejection, SelectionRules, Verdict};
pub use outcome::{BuildError, BuildReport, CourseOutcome, CourseState};
pub use search::{find_section, SectionPool};

/// Inputs of one build.
#[derive(Debug, Clone, Default)]
pub struct BuildRequest {
    /// Courses in processing order.
    pub courses: Vec<Id>,
    /// Opaque term token, passed through to logs.
    pub semester: String,
    pub priority_list: PriorityList,
    /// Activities committed before any course is placed.
    pub extras: Vec<Activity>,
}

/// Places one section per course, relaxing soft constraints from the tail of
/// the priority list until a section fits.
#[derive(Debug, Clone, Default)]
pub struct RelaxationScheduler {
    rules: SelectionRules,
}

impl RelaxationScheduler {
    pub fn new(rules: SelectionRules) -> Self {
        Self { rules }
    }

    /// Scheduler that rejects reserved sections unless `allow_reserved`.
    pub fn with_exclusion(exclusion: ExclusionRule) -> Self {
        Self::new(SelectionRules {
            exclusion,
            policy: IndeterminatePolicy::default(),
        })
    }

    pub fn rules(&self) -> &SelectionRules {
        &self.rules
    }

    /// Runs the relaxation loop for one course.
    fn place_course<C: Catalog>(
        &self,
        course: &str,
        priority_list: &PriorityList,
        catalog: &C,
        schedule: &mut WeekSchedule,
    ) -> Result<CourseOutcome, BuildError> {
        let mut pool = SectionPool::open(catalog, course)?;
        let mut k = priority_list.len();
        let mut attempted = Vec::new();

        loop {
            attempted.push(k);
            let active = priority_list.active(k);

            if let Some(section) = find_section(&mut pool, active, schedule, &self.rules)? {
                return Ok(CourseOutcome::found(course, section, k));
            }

            if k == 0 {
                warn!(course, "no compatible section even without soft constraints");
                let last_constrained = priority_list.active(1).to_vec();
                return Ok(CourseOutcome::failed(course, attempted, last_constrained));
            }

            info!(
                course,
                dropped = %priority_list[k - 1],
                "no compatible section; relaxing priorities"
            );
            k -= 1;
        }
    }

    /// Builds a schedule for `request` without exporting it.
    pub fn build<C: Catalog>(
        &self,
        request: &BuildRequest,
        catalog: &C,
    ) -> Result<BuildReport, BuildError> {
        info!(
            courses = request.courses.len(),
            semester = %request.semester,
            allow_reserved = self.rules.exclusion.allows_reserved(),
            "building schedule"
        );
        for (rank, entry) in request.priority_list.iter().enumerate() {
            info!(rank, %entry, "priority");
        }

        let mut schedule = WeekSchedule::new();
        for extra in &request.extras {
            schedule.commit(extra)?;
        }

        let mut outcomes = Vec::with_capacity(request.courses.len());
        for course in &request.courses {
            let outcome = self.place_course(course, &request.priority_list, catalog, &mut schedule)?;
            outcomes.push(outcome);
        }

        Ok(BuildReport { schedule, outcomes })
    }

    /// Builds a schedule and hands it to `exporter` if every course was
    /// placed. Failed courses are logged and export is skipped.
    pub fn run<C: Catalog, X: Exporter + ?Sized>(
        &self,
        request: &BuildRequest,
        catalog: &C,
        exporter: &X,
    ) -> Result<BuildReport, BuildError> {
        let report = self.build(request, catalog)?;
        if report.is_success() {
            exporter.export(&report.schedule)?;
        } else {
            for failure in report.failures() {
                warn!(%failure, "course could not be placed");
            }
            warn!("schedule incomplete; export skipped");
        }
        Ok(report)
    }
}

impl crate::algorithms::SchedulingAlgorithm for RelaxationScheduler {
    fn build<C: Catalog>(
        &self,
        request: &BuildRequest,
        catalog: &C,
    ) -> Result<BuildReport, BuildError> {
        RelaxationScheduler::build(self, request, catalog)
    }
}

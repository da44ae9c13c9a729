//! Run configuration.
//!
//! A run is described by a JSON file merged with `WEEKGRID_`-prefixed
//! environment variables, e.g. `WEEKGRID_ALLOW_RESERVED=true` or
//! `WEEKGRID_OUTPUT=out/schedule.txt`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json};
use figment::Figment;
use serde::Deserialize;
use thiserror::Error;

use crate::activity::{Activity, ExtraActivity, Location};
use crate::algorithms::relax::{BuildRequest, SelectionRules};
use crate::constraints::{ExclusionRule, IndeterminatePolicy, PriorityList, DEFAULT_RESERVED_PREFIX};
use crate::export::DEFAULT_DISPLAY_TAG;
use crate::interval::IntervalError;
use crate::time::{TimeOfDay, Weekday};
use crate::{generate_id, Id};

/// Environment variable prefix merged over the configuration file.
pub const ENV_PREFIX: &str = "WEEKGRID_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Extract(#[from] figment::Error),

    #[error("Extra activity '{id}' has an invalid block on {day}: {source}")]
    InvalidExtraBlock {
        id: Id,
        day: Weekday,
        #[source]
        source: IntervalError,
    },
}

/// One weekly block of an extracurricular activity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtraBlockConfig {
    pub day: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    #[serde(default)]
    pub building: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}

/// An extracurricular activity committed before any course.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtraConfig {
    /// Generated when absent.
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blocks: Vec<ExtraBlockConfig>,
}

impl ExtraConfig {
    pub fn to_activity(&self) -> Result<Activity, ConfigError> {
        let id = self.id.clone().unwrap_or_else(generate_id);
        let mut extra = ExtraActivity::new(id.clone(), self.description.clone());
        for block in &self.blocks {
            let location = Location {
                building: block.building.clone(),
                room: block.room.clone(),
            };
            extra
                .add_block(block.day, block.start, block.end, location)
                .map_err(|source| ConfigError::InvalidExtraBlock {
                    id: id.clone(),
                    day: block.day,
                    source,
                })?;
        }
        Ok(Activity::from(extra))
    }
}

fn default_reserved_prefix() -> String {
    DEFAULT_RESERVED_PREFIX.to_string()
}

fn default_display_tag() -> String {
    DEFAULT_DISPLAY_TAG.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("schedule.txt")
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Courses in processing order.
    pub courses: Vec<Id>,
    #[serde(default)]
    pub semester: String,
    /// Admit sections whose number starts with `reserved_prefix`.
    #[serde(default)]
    pub allow_reserved: bool,
    #[serde(default = "default_reserved_prefix")]
    pub reserved_prefix: String,
    #[serde(default)]
    pub priority_list: PriorityList,
    #[serde(default)]
    pub on_indeterminate: IndeterminatePolicy,
    #[serde(default)]
    pub extras: Vec<ExtraConfig>,
    /// Catalog JSON file.
    pub catalog: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_display_tag")]
    pub display_tag: String,
}

impl RunConfig {
    /// Reads `path` and merges `WEEKGRID_*` environment variables over it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        Ok(Figment::new()
            .merge(Json::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?)
    }

    /// Parses a configuration from a JSON string, without environment overrides.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(Figment::from(Json::string(json)).extract()?)
    }

    pub fn rules(&self) -> SelectionRules {
        SelectionRules {
            exclusion: ExclusionRule::new(self.reserved_prefix.clone(), self.allow_reserved),
            policy: self.on_indeterminate,
        }
    }

    pub fn to_request(&self) -> Result<BuildRequest, ConfigError> {
        let extras = self
            .extras
            .iter()
            .map(ExtraConfig::to_activity)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BuildRequest {
            courses: self.courses.clone(),
            semester: self.semester.clone(),
            priority_list: self.priority_list.clone(),
            extras,
        })
    }
}

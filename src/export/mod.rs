//! Text export of a finished schedule.
//!
//! Each block becomes a four-line record followed by a blank line:
//!
//! ```text
//! MATH141-0201
//! Mon
//! 09:00 - 09:50
//! lightblue
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::schedule::WeekSchedule;

/// Display tag written for every block unless configured otherwise.
pub const DEFAULT_DISPLAY_TAG: &str = "lightblue";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot write schedule to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Receives the final schedule of a successful build.
pub trait Exporter {
    fn export(&self, schedule: &WeekSchedule) -> Result<(), ExportError>;
}

/// Renders every block of `schedule`, Monday first, in commit order.
pub fn render_text(schedule: &WeekSchedule, tag: &str) -> String {
    let mut out = String::new();
    for block in schedule.iter() {
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "{}\n{}\n{} - {}\n{}\n\n",
            block.owner(),
            block.weekday().label(),
            block.start().format_24h(),
            block.end().format_24h(),
            tag
        );
    }
    out
}

/// Writes [`render_text`] output to a file.
#[derive(Debug, Clone)]
pub struct TextFileExporter {
    path: PathBuf,
    tag: String,
}

impl TextFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            tag: DEFAULT_DISPLAY_TAG.to_string(),
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Exporter for TextFileExporter {
    fn export(&self, schedule: &WeekSchedule) -> Result<(), ExportError> {
        std::fs::write(&self.path, render_text(schedule, &self.tag)).map_err(|source| {
            ExportError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        info!(path = %self.path.display(), blocks = schedule.len(), "schedule exported");
        Ok(())
    }
}

//! Command-line entry point.
//!
//! Usage: `weekgrid [run.json]` (defaults to `weekgrid.json`).

use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};

use weekgrid::algorithms::RelaxationScheduler;
use weekgrid::catalog::InMemoryCatalog;
use weekgrid::config::RunConfig;
use weekgrid::export::TextFileExporter;
use weekgrid::logging;

fn main() -> anyhow::Result<ExitCode> {
    logging::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "weekgrid.json".to_string());
    let config = RunConfig::load(&path).with_context(|| format!("loading {path}"))?;

    let catalog = InMemoryCatalog::from_path(&config.catalog)
        .with_context(|| format!("loading catalog {}", config.catalog.display()))?;
    info!(
        courses = catalog.course_count(),
        sections = catalog.section_count(),
        "catalog loaded"
    );

    let request = config.to_request()?;
    let exporter = TextFileExporter::new(&config.output).with_tag(config.display_tag.clone());
    let report = RelaxationScheduler::new(config.rules()).run(&request, &catalog, &exporter)?;

    for outcome in &report.outcomes {
        println!("{outcome}");
    }

    if report.is_success() {
        println!("schedule written to {}", exporter.path().display());
        Ok(ExitCode::SUCCESS)
    } else {
        error!(failed = report.failures().count(), "schedule incomplete");
        Ok(ExitCode::FAILURE)
    }
}

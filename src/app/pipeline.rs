//! The fit workflow: load → fit → report → export.
//!
//! Output goes to the sinks the caller passes in, so tests can drive a full run
//! without touching the process streams.

use std::io::Write;

use tracing::debug;

use crate::domain::{FitConfig, RegressionLine};
use crate::error::AppError;
use crate::fit::fit_line;
use crate::io::ingest::{LoadOptions, LoadedPoints, load_points};
use crate::report;

/// All computed outputs of a successful `fit` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub loaded: LoadedPoints,
    pub line: RegressionLine,
}

/// Execute the full fit pipeline.
///
/// A file that cannot be opened is reported on `err` and treated as empty, so
/// the run still ends at the too-few-points gate.
pub fn run_fit(
    config: &FitConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<RunOutput, AppError> {
    report::write_banner(out)?;

    let loaded = match load_points(&config.input, &LoadOptions::from(config)) {
        Ok(loaded) => loaded,
        Err(e) => {
            debug!(error = ?e, "input unreadable, continuing with no points");
            writeln!(err, "{e}").map_err(report::write_failed)?;
            LoadedPoints::default()
        }
    };
    report::write_issues(err, &loaded.issues)?;

    let line = fit_line(&loaded.points)?;
    report::write_fit(out, &line)?;

    if let Some(path) = &config.export {
        crate::io::export::write_line_json(path, &line, &config.input, &loaded)?;
    }

    Ok(RunOutput { loaded, line })
}

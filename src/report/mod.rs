//! Terminal reporting.
//!
//! We keep formatting code in one place so the loader and fitter stay free of
//! output concerns. Everything writes to an injected sink.

use std::io::Write;

use crate::domain::{LineFile, RegressionLine};
use crate::error::{AppError, EXIT_USAGE};
use crate::io::ingest::RowIssue;

pub const BANNER: &str = "--- Linear Regression Calculator ---";

pub fn write_banner(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "{}", BANNER).map_err(write_failed)
}

/// One warning line per skipped row, in file order.
pub fn write_issues(err: &mut impl Write, issues: &[RowIssue]) -> Result<(), AppError> {
    for issue in issues {
        writeln!(err, "{issue}").map_err(write_failed)?;
    }
    Ok(())
}

/// Point count and the fitted equation.
pub fn write_fit(out: &mut impl Write, line: &RegressionLine) -> Result<(), AppError> {
    writeln!(out, "Analyzed {} data points.", line.n).map_err(write_failed)?;
    writeln!(out, "The best-fitting regression line is:").map_err(write_failed)?;
    writeln!(out, "{line}").map_err(write_failed)
}

/// Summary of a saved fit.
pub fn write_saved(out: &mut impl Write, doc: &LineFile) -> Result<(), AppError> {
    let line = RegressionLine {
        slope: doc.slope,
        intercept: doc.intercept,
        n: doc.n,
    };
    writeln!(
        out,
        "Fitted {} on {} data points from {} ({} of {} rows skipped).",
        doc.generated.format("%Y-%m-%d %H:%M:%S"),
        doc.n,
        doc.source.display(),
        doc.rows_skipped,
        doc.rows_read,
    )
    .map_err(write_failed)?;
    writeln!(out, "{line}").map_err(write_failed)
}

pub(crate) fn write_failed(e: std::io::Error) -> AppError {
    AppError::new(EXIT_USAGE, format!("Failed to write output: {e}"))
}

//! Write fitted lines and generated samples to disk.
//!
//! - fitted line → pretty JSON (`LineFile`), for scripts
//! - sample points → plain two-column CSV that the loader reads back

use std::fs::File;
use std::path::Path;

use chrono::Local;

use crate::domain::{LineFile, Point, RegressionLine};
use crate::error::{AppError, EXIT_USAGE, SampleError};
use crate::io::ingest::LoadedPoints;

/// Write the fitted line as JSON.
pub fn write_line_json(
    path: &Path,
    line: &RegressionLine,
    source: &Path,
    loaded: &LoadedPoints,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            EXIT_USAGE,
            format!("Failed to create export JSON '{}': {e}", path.display()),
        )
    })?;

    let doc = LineFile {
        tool: "linefit".to_string(),
        generated: Local::now(),
        source: source.to_path_buf(),
        rows_read: loaded.rows_read,
        rows_skipped: loaded.rows_skipped(),
        n: line.n,
        slope: line.slope,
        intercept: line.intercept,
    };

    serde_json::to_writer_pretty(file, &doc)
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

/// Read a line JSON file written by [`write_line_json`].
pub fn read_line_json(path: &Path) -> Result<LineFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            EXIT_USAGE,
            format!("Failed to open line JSON '{}': {e}", path.display()),
        )
    })?;
    serde_json::from_reader(file)
        .map_err(|e| AppError::new(EXIT_USAGE, format!("Invalid line JSON: {e}")))
}

/// Write points as `x<delim>y` lines, no header and no quoting.
///
/// The loader reads with quoting off, so fields are never quoted here either.
pub fn write_points_csv(path: &Path, points: &[Point], delimiter: u8) -> Result<(), SampleError> {
    let to_err = |source: csv::Error| SampleError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .map_err(to_err)?;

    for p in points {
        writer
            .write_record([p.x().to_string(), p.y().to_string()])
            .map_err(to_err)?;
    }
    writer.flush().map_err(|e| to_err(e.into()))?;

    Ok(())
}

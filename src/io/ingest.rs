//! Point ingest.
//!
//! This module turns a delimiter-separated text file into an ordered list of
//! finite `(x, y)` points that are safe to fit.
//!
//! Rules:
//! - the first field is `x`, the second is `y`; later fields are ignored
//! - each field is trimmed and parsed as `f64`; `inf`/`NaN` count as invalid
//! - a line is kept only if both fields parse, otherwise it is reported and skipped
//! - blank lines are skipped silently
//! - no quoting or escaping; a header is only skipped when asked for

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::{debug, info};

use crate::domain::{DEFAULT_DELIMITER, FitConfig, Point};
use crate::error::LoadError;

/// Reader settings for a single load.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub has_header: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_header: false,
        }
    }
}

impl From<&FitConfig> for LoadOptions {
    fn from(config: &FitConfig) -> Self {
        Self {
            delimiter: config.delimiter,
            has_header: config.has_header,
        }
    }
}

/// Which coordinate a field was meant to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// A skipped line. Advisory only: the load carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// A field did not parse as a finite number.
    InvalidValue {
        line: u64,
        axis: Axis,
        value: String,
        source_line: String,
    },
    /// The line had an `x` but no second field.
    MissingValue { line: u64, source_line: String },
    /// The reader could not decode the line (e.g. invalid UTF-8) or hit an I/O error.
    Unreadable { line: u64, message: String },
}

impl RowIssue {
    pub fn line(&self) -> u64 {
        match self {
            RowIssue::InvalidValue { line, .. }
            | RowIssue::MissingValue { line, .. }
            | RowIssue::Unreadable { line, .. } => *line,
        }
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIssue::InvalidValue {
                axis,
                value,
                source_line,
                ..
            } => write!(
                f,
                "Warning: Skipping invalid {axis}-value '{value}' on line: {source_line}"
            ),
            RowIssue::MissingValue { line, source_line } => write!(
                f,
                "Warning: Skipping line {line} with a missing y-value: {source_line}"
            ),
            RowIssue::Unreadable { line, message } => {
                write!(f, "Warning: Skipping unreadable line {line}: {message}")
            }
        }
    }
}

/// Ingest output: points in file order plus everything that was skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadedPoints {
    pub points: Vec<Point>,
    pub issues: Vec<RowIssue>,
    /// Non-blank records seen (header excluded).
    pub rows_read: usize,
}

impl LoadedPoints {
    pub fn rows_skipped(&self) -> usize {
        self.rows_read - self.points.len()
    }
}

/// Open `path` and load its points.
///
/// Only failing to open the file is an error; every per-line problem is
/// recorded in [`LoadedPoints::issues`] instead.
pub fn load_points(path: &Path, options: &LoadOptions) -> Result<LoadedPoints, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded = read_points(file, options);
    info!(
        path = %path.display(),
        points = loaded.points.len(),
        skipped = loaded.rows_skipped(),
        "loaded points"
    );
    Ok(loaded)
}

/// Load points from any reader.
pub fn read_points<R: Read>(reader: R, options: &LoadOptions) -> LoadedPoints {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(options.has_header)
        .delimiter(options.delimiter)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let separator = char::from(options.delimiter).to_string();
    let mut loaded = LoadedPoints::default();

    for (idx, result) in reader.records().enumerate() {
        loaded.rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(idx as u64 + 1);
                let stop = matches!(e.kind(), csv::ErrorKind::Io(_));
                push_issue(
                    &mut loaded,
                    RowIssue::Unreadable {
                        line,
                        message: e.to_string(),
                    },
                );
                if stop {
                    break;
                }
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(idx as u64 + 1);
        match parse_record(&record, line, &separator) {
            Ok(Some(point)) => loaded.points.push(point),
            Ok(None) => loaded.rows_read -= 1,
            Err(issue) => push_issue(&mut loaded, issue),
        }
    }

    loaded
}

fn push_issue(loaded: &mut LoadedPoints, issue: RowIssue) {
    debug!(line = issue.line(), "{issue}");
    loaded.issues.push(issue);
}

/// Parse one record. `Ok(None)` means a whitespace-only line.
fn parse_record(record: &StringRecord, line: u64, separator: &str) -> Result<Option<Point>, RowIssue> {
    let source_line = || record.iter().collect::<Vec<_>>().join(separator);

    let Some(x_text) = record.get(0) else {
        return Ok(None);
    };
    if record.len() == 1 && x_text.trim().is_empty() {
        return Ok(None);
    }

    let x = parse_coordinate(x_text).ok_or_else(|| RowIssue::InvalidValue {
        line,
        axis: Axis::X,
        value: x_text.to_string(),
        source_line: source_line(),
    })?;

    let y_text = record.get(1).ok_or_else(|| RowIssue::MissingValue {
        line,
        source_line: source_line(),
    })?;

    let y = parse_coordinate(y_text).ok_or_else(|| RowIssue::InvalidValue {
        line,
        axis: Axis::Y,
        value: y_text.to_string(),
        source_line: source_line(),
    })?;

    // Both coordinates are already known to be finite.
    Ok(Point::new(x, y))
}

fn parse_coordinate(s: &str) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

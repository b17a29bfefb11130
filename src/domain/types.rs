//! Shared domain types.
//!
//! These types are intentionally small and `Copy` where possible so they can be:
//!
//! - handed from the loader to the fitter by value
//! - compared directly in tests
//!
//! `LineFile` is the one serialized shape (the `fit --export` JSON).

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data.csv";

/// Default field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// A single `(x, y)` observation.
///
/// Both coordinates are finite. The loader is the only producer and rejects
/// anything that would violate this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Build a point, returning `None` if either coordinate is NaN or infinite.
    pub fn new(x: f64, y: f64) -> Option<Self> {
        (x.is_finite() && y.is_finite()).then_some(Self { x, y })
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// A fitted least-squares line `y = slope·x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionLine {
    pub slope: f64,
    pub intercept: f64,
    /// Number of points the line was fitted on.
    pub n: usize,
}

impl RegressionLine {
    /// Evaluate the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Vertical residual `y - ŷ` of a point against this line.
    pub fn residual(&self, point: &Point) -> f64 {
        point.y() - self.predict(point.x())
    }
}

impl fmt::Display for RegressionLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {}x + {}", self.slope, self.intercept)
    }
}

/// A saved fit (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineFile {
    pub tool: String,
    pub generated: DateTime<Local>,
    pub source: PathBuf,
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub n: usize,
    pub slope: f64,
    pub intercept: f64,
}

/// A full `fit` run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags, environment and defaults.
#[derive(Debug, Clone)]
pub struct FitConfig {
    pub input: PathBuf,
    pub delimiter: u8,
    /// Treat the first line as a header and skip it.
    pub has_header: bool,
    pub export: Option<PathBuf>,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            delimiter: DEFAULT_DELIMITER,
            has_header: false,
            export: None,
        }
    }
}

/// Parameters for synthetic sample generation.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub slope: f64,
    pub intercept: f64,
    pub count: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Standard deviation of the Gaussian noise added to each `y`.
    pub noise: f64,
    pub seed: u64,
    pub output: PathBuf,
    pub delimiter: u8,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            slope: 2.0,
            intercept: 3.0,
            count: 50,
            x_min: 0.0,
            x_max: 10.0,
            noise: 0.0,
            seed: 42,
            output: PathBuf::from(DEFAULT_INPUT),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

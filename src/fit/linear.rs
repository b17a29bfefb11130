//! Closed-form ordinary least squares for a single predictor.
//!
//! ```text
//! D = n·Σx² − (Σx)²
//! m = (n·Σxy − Σx·Σy) / D
//! b = (Σy − m·Σx) / n
//! ```
//!
//! The denominator is compared against zero exactly. Near-degenerate inputs
//! (x values that are almost but not quite identical) still produce a line,
//! possibly with a very large slope. Sums that overflow `f64` (|x| around
//! 1e155 and up) leave a NaN or infinite denominator or coefficient; those are
//! reported as degenerate too rather than printed as `NaN`.

use tracing::{info, trace};

use crate::domain::{Point, RegressionLine};
use crate::error::FitError;

/// Minimum number of points that defines a line.
pub const MIN_POINTS: usize = 2;

/// Running sums over a point set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sums {
    pub n: usize,
    pub x: f64,
    pub y: f64,
    pub xy: f64,
    pub x2: f64,
}

impl Sums {
    pub fn push(&mut self, p: &Point) {
        self.n += 1;
        self.x += p.x();
        self.y += p.y();
        self.xy += p.x() * p.y();
        self.x2 += p.x() * p.x();
    }

    /// `n·Σx² − (Σx)²`.
    pub fn denominator(&self) -> f64 {
        self.n as f64 * self.x2 - self.x * self.x
    }

    /// Derive the line, applying both failure gates in order.
    pub fn estimate(&self) -> Result<RegressionLine, FitError> {
        if self.n < MIN_POINTS {
            return Err(FitError::InsufficientData { found: self.n });
        }

        let n = self.n as f64;
        let denom = self.denominator();
        if denom == 0.0 || !denom.is_finite() {
            return Err(FitError::DegenerateInput);
        }

        let slope = (n * self.xy - self.x * self.y) / denom;
        let intercept = (self.y - slope * self.x) / n;
        if !(slope.is_finite() && intercept.is_finite()) {
            return Err(FitError::DegenerateInput);
        }

        Ok(RegressionLine {
            slope,
            intercept,
            n: self.n,
        })
    }
}

impl<'a> FromIterator<&'a Point> for Sums {
    fn from_iter<I: IntoIterator<Item = &'a Point>>(iter: I) -> Self {
        let mut sums = Sums::default();
        for p in iter {
            sums.push(p);
        }
        sums
    }
}

/// Fit a least-squares line through `points`.
pub fn fit_line(points: &[Point]) -> Result<RegressionLine, FitError> {
    let sums: Sums = points.iter().collect();
    trace!(?sums, "accumulated sums");

    let line = sums.estimate()?;
    info!(n = line.n, slope = line.slope, intercept = line.intercept, "fitted line");
    Ok(line)
}

use std::path::PathBuf;

use thiserror::Error;

/// Exit code for any failed regression gate.
pub const EXIT_FIT_FAILED: u8 = 1;

/// Exit code for usage errors and failures writing outputs.
pub const EXIT_USAGE: u8 = 2;

/// Error surfaced at the binary boundary: a message plus the process exit code.
///
/// Library errors (`FitError`, `SampleError`, JSON and output write failures)
/// are folded into this just before `main` prints the message to stderr.
#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    /// `exit_code` should be one of [`EXIT_FIT_FAILED`] or [`EXIT_USAGE`].
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// The input resource could not be opened.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error: Could not open the file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A regression gate that stops the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("Error: Not enough data points to calculate a regression line. Need at least 2.")]
    InsufficientData { found: usize },
    #[error("Error: Cannot calculate slope.")]
    DegenerateInput,
}

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("Sample count must be > 0.")]
    EmptySample,
    #[error("Invalid x range [{min}, {max}]: bounds must be finite with max > min.")]
    InvalidRange { min: f64, max: f64 },
    #[error("Slope and intercept must be finite.")]
    NonFiniteLine,
    #[error("Noise must be finite and >= 0, got {0}.")]
    InvalidNoise(f64),
    #[error("Failed to write sample '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl From<FitError> for AppError {
    fn from(err: FitError) -> Self {
        AppError::new(EXIT_FIT_FAILED, err.to_string())
    }
}

impl From<SampleError> for AppError {
    fn from(err: SampleError) -> Self {
        AppError::new(EXIT_USAGE, err.to_string())
    }
}

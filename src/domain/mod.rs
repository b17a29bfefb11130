//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - observation points (`Point`)
//! - the fitted line (`RegressionLine`)
//! - run configuration (`FitConfig`, `SampleConfig`)

pub mod types;

pub use types::*;

//! Input/output helpers.
//!
//! - point ingest + per-line validation (`ingest`)
//! - fitted-line JSON and sample CSV writers (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

//! Least-squares line fitting.
//!
//! Responsibilities:
//!
//! - accumulate the four running sums in one pass (`Sums`)
//! - apply the failure gates (too few points, zero denominator)
//! - derive slope and intercept in closed form

pub mod linear;

pub use linear::*;

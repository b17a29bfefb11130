//! `linefit` library crate.
//!
//! The binary (`linefit`) is a thin wrapper around this library so that:
//!
//! - loading and fitting are testable without spawning processes
//! - report output can be captured through injected sinks

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod logging;
pub mod report;

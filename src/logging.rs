//! Diagnostic logging.
//!
//! Report lines (banner, warnings, the fitted equation) go to the sinks passed
//! into the pipeline. `tracing` output is extra detail on stderr, off below WARN
//! unless asked for with `-v`.

use tracing::metadata::LevelFilter;
use tracing_subscriber::prelude::*;

/// Map `-q` / `-v` counts to a level filter.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. Safe to call more than once; later calls are ignored.
pub fn init(filter: LevelFilter) {
    let stderr_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(stderr_log).try_init();
}

//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - sets up logging
//! - dispatches to fit / sample / show

use std::io::Write;

use clap::Parser;

use crate::cli::{Command, ShowArgs};
use crate::domain::{FitConfig, SampleConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `linefit` binary.
pub fn run() -> Result<(), AppError> {
    // Environment-backed options read `.env` too; real env vars win.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    crate::logging::init(crate::logging::level_filter(cli.verbose, cli.quiet));

    dispatch(cli.command, &mut std::io::stdout(), &mut std::io::stderr())
}

/// Run one parsed command against the given sinks.
pub fn dispatch(command: Command, out: &mut impl Write, err: &mut impl Write) -> Result<(), AppError> {
    match command {
        Command::Fit(args) => {
            let config = FitConfig::from(&args);
            pipeline::run_fit(&config, out, err).map(|_| ())
        }
        Command::Sample(args) => handle_sample(&SampleConfig::from(&args), out),
        Command::Show(args) => handle_show(args, out),
    }
}

fn handle_sample(config: &SampleConfig, out: &mut impl Write) -> Result<(), AppError> {
    let points = crate::data::generate_sample(config)?;
    crate::io::export::write_points_csv(&config.output, &points, config.delimiter)?;

    writeln!(out, "Wrote {} points to {}", points.len(), config.output.display())
        .map_err(crate::report::write_failed)
}

fn handle_show(args: ShowArgs, out: &mut impl Write) -> Result<(), AppError> {
    let doc = crate::io::export::read_line_json(&args.file)?;
    crate::report::write_saved(out, &doc)
}

/// Rewrite argv so `linefit` defaults to `linefit fit`.
///
/// Rules:
/// - `linefit`                      -> `linefit fit`
/// - `linefit -v ...`               -> `linefit fit -v ...`
/// - `linefit points.csv ...`       -> `linefit fit points.csv ...`
/// - `linefit --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "sample" | "show");
    if is_subcommand {
        return argv;
    }

    // Anything else (a flag or an input path) belongs to `fit`.
    argv.insert(1, "fit".to_string());
    argv
}

//! Command-line parsing for the least-squares line fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the loading/fitting code. Every option with an `env` name can
//! also be set in the process environment or in a `.env` file.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::{DEFAULT_INPUT, FitConfig, SampleConfig};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "linefit", version, about = "Least-squares line fit over two-column CSV data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a line through the points in a CSV file (the default command).
    Fit(FitArgs),
    /// Write synthetic points scattered around a known line.
    Sample(SampleArgs),
    /// Print the equation stored in a JSON file written by `fit --export`.
    Show(ShowArgs),
}

/// Options for fitting.
#[derive(Debug, Parser, Clone)]
pub struct FitArgs {
    /// Input file with one `x,y` pair per line.
    #[arg(env = "LINEFIT_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Field delimiter (a single ASCII character).
    #[arg(short, long, env = "LINEFIT_DELIMITER", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Skip the first line as a header instead of reporting it.
    #[arg(long)]
    pub header: bool,

    /// Also write the fitted line to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for sample generation.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    /// Slope of the underlying line.
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub slope: f64,

    /// Intercept of the underlying line.
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    pub intercept: f64,

    /// Number of points to generate.
    #[arg(short = 'n', long, default_value_t = 50)]
    pub count: usize,

    /// Lower bound for x.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x_min: f64,

    /// Upper bound for x.
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    pub x_max: f64,

    /// Standard deviation of the Gaussian noise added to y.
    #[arg(long, default_value_t = 0.0)]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Output file.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub output: PathBuf,

    /// Field delimiter (a single ASCII character).
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,
}

/// Options for printing a saved fit.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// JSON file produced by `linefit fit --export`.
    pub file: PathBuf,
}

impl From<&FitArgs> for FitConfig {
    fn from(args: &FitArgs) -> Self {
        FitConfig {
            input: args.input.clone(),
            delimiter: args.delimiter,
            has_header: args.header,
            export: args.export.clone(),
        }
    }
}

impl From<&SampleArgs> for SampleConfig {
    fn from(args: &SampleArgs) -> Self {
        SampleConfig {
            slope: args.slope,
            intercept: args.intercept,
            count: args.count,
            x_min: args.x_min,
            x_max: args.x_max,
            noise: args.noise,
            seed: args.seed,
            output: args.output.clone(),
            delimiter: args.delimiter,
        }
    }
}

/// A delimiter must not be able to appear inside a rendered number.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b'\n'] | [b'\r'] => Err("delimiter cannot be a line break".to_string()),
        [b @ (b'0'..=b'9' | b'.' | b'+' | b'-' | b'e' | b'E' | b'"')] => Err(format!(
            "delimiter '{}' can appear in a number or a quoted field",
            char::from(*b)
        )),
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("expected a single ASCII character, got '{s}'")),
    }
}

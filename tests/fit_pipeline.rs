//! End-to-end runs of the fit pipeline against files on disk.
//!
//! Report output is captured through in-memory sinks.

use std::fs;
use std::path::PathBuf;

use approx::assert_abs_diff_eq;

use linefit::app::pipeline::run_fit;
use linefit::domain::{FitConfig, SampleConfig};
use linefit::error::FitError;

// ============================================================================
// Helper Functions
// ============================================================================

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("linefit-it-{}-{name}", std::process::id()))
}

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = temp_path(name);
    fs::write(&path, contents).unwrap();
    path
}

struct Captured {
    result: Result<linefit::app::pipeline::RunOutput, linefit::error::AppError>,
    out: String,
    err: String,
}

fn run(config: &FitConfig) -> Captured {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run_fit(config, &mut out, &mut err);
    Captured {
        result,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn config_for(input: PathBuf) -> FitConfig {
    FitConfig {
        input,
        ..FitConfig::default()
    }
}

// ============================================================================
// Success
// ============================================================================

#[test]
fn exact_line_is_recovered_and_reported() {
    let input = write_input("exact.csv", "0,3\n1,5\n2,7\n3,9\n");
    let captured = run(&config_for(input.clone()));
    fs::remove_file(&input).ok();

    let output = captured.result.unwrap();
    assert_abs_diff_eq!(output.line.slope, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(output.line.intercept, 3.0, epsilon = 1e-9);
    assert_eq!(
        captured.out,
        "--- Linear Regression Calculator ---\n\
         Analyzed 4 data points.\n\
         The best-fitting regression line is:\n\
         y = 2x + 3\n"
    );
    assert!(captured.err.is_empty());
}

#[test]
fn bad_lines_are_warned_about_and_skipped() {
    let input = write_input("mixed.csv", "x,y\n0,1\n1,oops\n2,5\n4,9,extra\n");
    let captured = run(&config_for(input.clone()));
    fs::remove_file(&input).ok();

    let output = captured.result.unwrap();
    assert_eq!(output.line.n, 3);
    assert_eq!(output.loaded.rows_skipped(), 2);
    assert_abs_diff_eq!(output.line.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(output.line.intercept, 1.0, epsilon = 1e-12);
    assert_eq!(
        captured.err,
        "Warning: Skipping invalid x-value 'x' on line: x,y\n\
         Warning: Skipping invalid y-value 'oops' on line: 1,oops\n"
    );
}

#[test]
fn residuals_of_noisy_sample_sum_to_zero() {
    let points = linefit::data::generate_sample(&SampleConfig {
        count: 200,
        noise: 3.0,
        seed: 11,
        ..SampleConfig::default()
    })
    .unwrap();
    let line = linefit::fit::fit_line(&points).unwrap();

    let total: f64 = points.iter().map(|p| line.residual(p)).sum();
    assert_abs_diff_eq!(total, 0.0, epsilon = 1e-8);
    assert_abs_diff_eq!(line.slope, 2.0, epsilon = 0.5);
}

#[test]
fn export_writes_json_after_success() {
    let input = write_input("export-in.csv", "1,1\n2,3\n");
    let export = temp_path("export-out.json");
    let config = FitConfig {
        export: Some(export.clone()),
        ..config_for(input.clone())
    };
    let captured = run(&config);
    fs::remove_file(&input).ok();

    captured.result.unwrap();
    let doc = linefit::io::export::read_line_json(&export).unwrap();
    fs::remove_file(&export).ok();
    assert_abs_diff_eq!(doc.slope, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(doc.intercept, -1.0, epsilon = 1e-12);
    assert_eq!(doc.n, 2);
}

// ============================================================================
// Failure gates
// ============================================================================

#[test]
fn one_good_line_is_insufficient() {
    let input = write_input("one-good.csv", "1,2\nabc,def\n");
    let export = temp_path("one-good.json");
    let config = FitConfig {
        export: Some(export.clone()),
        ..config_for(input.clone())
    };
    let captured = run(&config);
    fs::remove_file(&input).ok();

    let err = captured.result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), FitError::InsufficientData { found: 1 }.to_string());
    assert_eq!(captured.err.lines().count(), 1);
    assert!(captured.err.contains("'abc' on line: abc,def"));
    assert!(!export.exists(), "nothing is exported on failure");
}

#[test]
fn missing_file_reports_and_falls_through_to_insufficient_data() {
    let input = temp_path("does-not-exist.csv");
    let captured = run(&config_for(input.clone()));

    let err = captured.result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(
        err.to_string(),
        "Error: Not enough data points to calculate a regression line. Need at least 2."
    );
    assert_eq!(
        captured.err,
        format!("Error: Could not open the file {}\n", input.display())
    );
    assert_eq!(captured.out, "--- Linear Regression Calculator ---\n");
}

#[test]
fn empty_file_is_insufficient_without_open_error() {
    let input = write_input("empty.csv", "");
    let captured = run(&config_for(input.clone()));
    fs::remove_file(&input).ok();

    assert_eq!(captured.result.unwrap_err().exit_code(), 1);
    assert!(captured.err.is_empty());
}

#[test]
fn shared_x_is_degenerate() {
    let input = write_input("vertical.csv", "2,1\n2,5\n2,-3\n");
    let captured = run(&config_for(input.clone()));
    fs::remove_file(&input).ok();

    let err = captured.result.unwrap_err();
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "Error: Cannot calculate slope.");
}

// ============================================================================
// Sample round trip
// ============================================================================

#[test]
fn sample_command_output_fits_back_to_its_line() {
    let output = temp_path("sample.csv");
    let cli = <linefit::cli::Cli as clap::Parser>::try_parse_from([
        "linefit",
        "sample",
        "--slope",
        "-0.25",
        "--intercept",
        "8",
        "-n",
        "30",
        "-o",
        output.to_str().unwrap(),
    ])
    .unwrap();

    let mut out = Vec::new();
    let mut err = Vec::new();
    linefit::app::dispatch(cli.command, &mut out, &mut err).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("Wrote 30 points to {}\n", output.display())
    );

    let captured = run(&config_for(output.clone()));
    fs::remove_file(&output).ok();

    let fitted = captured.result.unwrap();
    assert_eq!(fitted.line.n, 30);
    assert_abs_diff_eq!(fitted.line.slope, -0.25, epsilon = 1e-9);
    assert_abs_diff_eq!(fitted.line.intercept, 8.0, epsilon = 1e-9);
}

// ============================================================================
// Show
// ============================================================================

fn show(file: &std::path::Path) -> (Result<(), linefit::error::AppError>, String) {
    let cli = <linefit::cli::Cli as clap::Parser>::try_parse_from([
        "linefit",
        "show",
        file.to_str().unwrap(),
    ])
    .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = linefit::app::dispatch(cli.command, &mut out, &mut err);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn show_prints_an_exported_fit() {
    let input = write_input("show-in.csv", "0,3\nx,y\n1,5\n2,7\n");
    let export = temp_path("show-out.json");
    let config = FitConfig {
        export: Some(export.clone()),
        ..config_for(input.clone())
    };
    run(&config).result.unwrap();
    fs::remove_file(&input).ok();

    let (result, out) = show(&export);
    fs::remove_file(&export).ok();
    result.unwrap();

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Fitted "), "{}", lines[0]);
    assert!(
        lines[0].ends_with(&format!(
            " on 3 data points from {} (1 of 4 rows skipped).",
            input.display()
        )),
        "{}",
        lines[0]
    );
    assert_eq!(lines[1], "y = 2x + 3");
}

#[test]
fn show_missing_file_is_a_usage_error() {
    let (result, out) = show(&temp_path("show-missing.json"));
    assert_eq!(result.unwrap_err().exit_code(), 2);
    assert!(out.is_empty());
}

#[test]
fn show_malformed_json_is_a_usage_error() {
    let path = write_input("show-bad.json", "{\"slope\": 2.0,");
    let (result, _) = show(&path);
    fs::remove_file(&path).ok();

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().starts_with("Invalid line JSON"), "{err}");
}

//! `junit-gate`: decides whether a JUnit test report meets the bar.
//!
//! Reads `<project-path>/<result-output-file>`, counts tests and failures
//! (root aggregates, or per-assertion with `--assert-check`), and checks the
//! pass rate and failure count against the configured thresholds.
//!
//! **Usage:**
//! ```
//! junit-gate [--config <gate.toml>] [--project-path <dir>] [--result-output-file <file>]
//!            [--assert-check] [--minimum-pass <0..1>] [--max-fails <n>] [--json]
//! ```
//!
//! Flags override values from `--config`, which override the defaults.
//! Exits non-zero if the verdict fails or the report cannot be evaluated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use junit_gate::{analyze, GateReport, GateSettings, Severity};
use tracing_subscriber::EnvFilter;

/// Evaluate a JUnit test report against pass-rate and failure thresholds.
#[derive(Parser, Debug)]
#[command(
    name = "junit-gate",
    about = "Decide whether a JUnit test report meets the configured thresholds"
)]
struct Args {
    /// TOML settings file; flags given on the command line take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory the report path is relative to (default: current directory).
    #[arg(long)]
    project_path: Option<PathBuf>,

    /// Report file inside the project directory (default: test-results.xml).
    #[arg(long)]
    result_output_file: Option<PathBuf>,

    /// Count per-test-case assertions instead of the root aggregate counts.
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    assert_check: Option<bool>,

    /// Lowest acceptable pass rate, between 0 and 1 (default: 1).
    #[arg(long)]
    minimum_pass: Option<f64>,

    /// Highest acceptable failure count; 0 disables this gate.
    #[arg(long)]
    max_fails: Option<u64>,

    /// Print the verdict as JSON instead of the check report.
    #[arg(long)]
    json: bool,
}

impl Args {
    /// Layers explicit flags over the settings file (or the defaults).
    fn settings(&self) -> Result<GateSettings> {
        let mut settings = match &self.config {
            Some(path) => GateSettings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => GateSettings::default(),
        };

        if let Some(project_path) = &self.project_path {
            settings.project_path = project_path.clone();
        }
        if let Some(result_output_file) = &self.result_output_file {
            settings.result_output_file = result_output_file.clone();
        }
        if let Some(assert_check) = self.assert_check {
            settings.assert_check = assert_check;
        }
        if let Some(minimum_pass) = self.minimum_pass {
            settings.minimum_pass = minimum_pass;
        }
        if let Some(max_fails) = self.max_fails {
            settings.max_fails = Some(max_fails);
        }

        Ok(settings)
    }
}

/// Renders a pass rate as a percentage, or "undefined" when nothing was counted.
fn format_pass_rate(pass_rate: f64) -> String {
    if pass_rate.is_finite() {
        format!("{:.2}%", pass_rate * 100.0)
    } else {
        "undefined".to_string()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.settings()?;
    let config = settings.gate_config()?;
    let location = settings.location();

    let verdict = analyze(&location, &config)
        .with_context(|| format!("Failed to evaluate {}", location.resolve().display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        let report = GateReport::from_verdict(&verdict, &config);

        println!("JUnit Gate Report");
        println!("=================");
        println!();

        for result in &report.results {
            let status = match result.severity {
                Severity::Pass => "PASS",
                Severity::Warning => "WARN",
                Severity::Failure => "FAIL",
            };
            println!("[{}] {} — {}", status, result.check, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!(
            "Summary: {} tests, {} failures, pass rate {}",
            verdict.test_count,
            verdict.fail_count,
            format_pass_rate(verdict.pass_rate)
        );
    }

    if !verdict.success {
        tracing::warn!(
            test_count = verdict.test_count,
            fail_count = verdict.fail_count,
            "test report did not meet the gate"
        );
        eprintln!("Gate FAILED.");
        process::exit(1);
    }

    if !args.json {
        println!("Gate PASSED.");
    }
    Ok(())
}

//! JUnit report gate.
//!
//! Reads a JUnit-style XML test report and decides whether the run met a
//! configured bar. The core is two pure steps: [`parser::parse`] builds a
//! normalized element tree, and [`evaluator::evaluate`] counts tests and
//! failures and applies the thresholds.
//!
//! # Counting modes
//!
//! | `assert_check` | tests | failures |
//! |----------------|-------|----------|
//! | `false` | `<testsuites tests>` | `<testsuites failures>` |
//! | `true` | sum of `<testcase assertions>` | cases with a `<failure>` child |
//!
//! # Gates
//!
//! A verdict succeeds when the pass rate is at least `minimum_pass` and,
//! if `max_fails` is set, the failure count does not exceed it.
//!
//! # Entry Point
//!
//! ```no_run
//! use junit_gate::{analyze, GateConfig, ReportLocation};
//!
//! let location = ReportLocation::new(".", "test-results.xml");
//! let config = GateConfig::new(false, 0.9, Some(3)).expect("valid thresholds");
//! let verdict = analyze(&location, &config).expect("report could be evaluated");
//! assert!(verdict.success);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod report;
pub mod runner;
pub mod tests;

pub use config::{GateConfig, GateSettings};
pub use error::GateError;
pub use evaluator::{evaluate, Verdict};
pub use parser::{parse, Element, ParsedReport};
pub use report::{CheckResult, GateReport, Severity};
pub use runner::{analyze, analyze_bytes, ReportLocation};

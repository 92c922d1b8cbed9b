//! Report location resolution and the read → parse → evaluate pipeline.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GateConfig;
use crate::error::GateError;
use crate::evaluator::{evaluate, Verdict};
use crate::parser::parse;

/// Where a report lives: a project directory plus a file relative to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLocation {
    /// Directory the report path is relative to.
    pub project_path: PathBuf,
    /// Report file inside `project_path`.
    pub result_output_file: PathBuf,
}

impl ReportLocation {
    /// Creates a location from its two path fragments.
    pub fn new(project_path: impl AsRef<Path>, result_output_file: impl AsRef<Path>) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
            result_output_file: result_output_file.as_ref().to_path_buf(),
        }
    }

    /// Joins the fragments. An absolute `result_output_file` wins outright.
    pub fn resolve(&self) -> PathBuf {
        self.project_path.join(&self.result_output_file)
    }
}

/// Reads the raw report bytes at `path`.
///
/// # Errors
///
/// Returns [`GateError::Io`] if the file cannot be read.
pub fn read_report(path: &Path) -> Result<Vec<u8>, GateError> {
    std::fs::read(path).map_err(|source| GateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses and evaluates report bytes already in memory.
///
/// # Errors
///
/// Returns any error from [`parse`] or [`evaluate`].
pub fn analyze_bytes(raw: &[u8], config: &GateConfig) -> Result<Verdict, GateError> {
    let report = parse(raw)?;
    debug!(suites = report.test_suites().len(), "parsed report");
    evaluate(&report, config)
}

/// Reads the report at `location` and evaluates it against `config`.
///
/// # Errors
///
/// Returns [`GateError::Io`] if the report cannot be read, or any error from
/// [`analyze_bytes`].
pub fn analyze(location: &ReportLocation, config: &GateConfig) -> Result<Verdict, GateError> {
    let path = location.resolve();
    debug!(
        path = %path.display(),
        assert_check = config.assert_check(),
        minimum_pass = config.minimum_pass(),
        max_fails = ?config.max_fails(),
        "analyzing test report"
    );

    let raw = read_report(&path)?;
    let verdict = analyze_bytes(&raw, config)?;

    info!(
        path = %path.display(),
        test_count = verdict.test_count,
        fail_count = verdict.fail_count,
        pass_rate = verdict.pass_rate,
        success = verdict.success,
        "test report evaluated"
    );
    Ok(verdict)
}

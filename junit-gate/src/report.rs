//! Gate report types: per-gate check results, severity levels, and the
//! aggregated report shown to the user.

use crate::config::GateConfig;
use crate::evaluator::Verdict;

/// Severity level of a gate check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The gate passed.
    Pass,
    /// Something worth noting that does not affect the verdict.
    Warning,
    /// The gate failed (fails the verdict).
    Failure,
}

/// A single gate check result.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Short identifier of the gate that produced this result.
    pub check: String,
    /// Human-readable message describing the outcome.
    pub message: String,
    /// Severity of the result.
    pub severity: Severity,
    /// Optional additional detail lines.
    pub details: Vec<String>,
}

impl CheckResult {
    /// Creates a passing result.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// Creates a failure result.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// Creates a warning result with additional detail lines.
    pub fn warn_with_details(
        check: impl Into<String>,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity: Severity::Warning,
            details,
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Every gate check for one verdict, in evaluation order.
#[derive(Debug, Default)]
pub struct GateReport {
    /// All individual check results.
    pub results: Vec<CheckResult>,
}

impl GateReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Explains `verdict` as one result per enabled gate, plus warnings for
    /// counts that look wrong.
    pub fn from_verdict(verdict: &Verdict, config: &GateConfig) -> Self {
        let mut report = Self::new();

        if config.assert_check() {
            report.push(CheckResult::warn_with_details(
                "counting",
                format!(
                    "{} assertions counted, {} failing test cases",
                    verdict.test_count, verdict.fail_count
                ),
                vec!["assertion mode divides failing cases by assertions, not by cases".into()],
            ));
        }

        let minimum = percent(config.minimum_pass());
        if verdict.pass_rate >= config.minimum_pass() {
            report.push(CheckResult::pass(
                "pass-rate",
                format!("{} >= {minimum}", percent(verdict.pass_rate)),
            ));
        } else if !verdict.pass_rate.is_finite() {
            report.push(CheckResult::fail(
                "pass-rate",
                format!("pass rate undefined: no tests counted (minimum {minimum})"),
            ));
        } else {
            report.push(CheckResult::fail(
                "pass-rate",
                format!("{} < {minimum}", percent(verdict.pass_rate)),
            ));
        }

        if verdict.pass_rate.is_finite() && !(0.0..=1.0).contains(&verdict.pass_rate) {
            report.push(CheckResult::warn_with_details(
                "pass-rate",
                format!("pass rate {} is outside 0-100%", percent(verdict.pass_rate)),
                vec![format!(
                    "{} failures reported against {} tests",
                    verdict.fail_count, verdict.test_count
                )],
            ));
        }

        if let Some(max) = config.max_fails() {
            let max = max.get();
            if verdict.fail_count <= i64::try_from(max).unwrap_or(i64::MAX) {
                report.push(CheckResult::pass(
                    "max-fails",
                    format!("{} failures <= {max}", verdict.fail_count),
                ));
            } else {
                report.push(CheckResult::fail(
                    "max-fails",
                    format!("{} failures > {max}", verdict.fail_count),
                ));
            }
        }

        report
    }

    /// Appends a result to this report.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Returns the count of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if all checks passed (no failures).
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}

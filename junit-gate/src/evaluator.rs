//! Verdict evaluation.
//!
//! Counts tests and failures in a [`ParsedReport`] and applies the
//! [`GateConfig`] thresholds. Evaluation is pure: the same report and config
//! always produce the same [`Verdict`].

use serde::Serialize;

use crate::config::GateConfig;
use crate::error::GateError;
use crate::parser::{Element, ParsedReport, FAILURE, TESTCASE};

/// Result of judging one report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Tests counted, or assertions counted in assertion mode.
    pub test_count: i64,
    /// Failures counted; in assertion mode, failing test cases.
    pub fail_count: i64,
    /// `(test_count - fail_count) / test_count`; NaN when nothing was counted.
    pub pass_rate: f64,
    /// Whether every enabled gate passed.
    pub success: bool,
}

impl Verdict {
    /// Applies the thresholds in `config` to already-counted totals.
    pub fn from_counts(test_count: i64, fail_count: i64, config: &GateConfig) -> Self {
        let pass_rate = test_count.saturating_sub(fail_count) as f64 / test_count as f64;

        // NaN never compares >=, so an empty run fails here without erroring.
        let meets_pass_rate = pass_rate >= config.minimum_pass();
        let meets_max_fails = config
            .max_fails()
            .is_none_or(|max| fail_count <= i64::try_from(max.get()).unwrap_or(i64::MAX));

        Self {
            test_count,
            fail_count,
            pass_rate,
            success: meets_pass_rate && meets_max_fails,
        }
    }
}

/// Evaluates a parsed report against the gate thresholds.
///
/// With `assert_check` set, every `<testcase>` of every `<testsuite>`
/// contributes its `assertions` count to the test total and one failure per
/// case carrying a `<failure>` child. Otherwise the root `tests` and
/// `failures` attributes are used as-is.
///
/// # Errors
///
/// Returns [`GateError::InvalidCount`] if a count attribute that the chosen
/// mode reads is missing or has no leading integer.
pub fn evaluate(report: &ParsedReport, config: &GateConfig) -> Result<Verdict, GateError> {
    let (test_count, fail_count) = if config.assert_check() {
        count_assertions(report)?
    } else {
        count_aggregates(report.root())?
    };

    Ok(Verdict::from_counts(test_count, fail_count, config))
}

fn count_assertions(report: &ParsedReport) -> Result<(i64, i64), GateError> {
    let mut test_count = 0i64;
    let mut fail_count = 0i64;

    for suite in report.test_suites() {
        for case in suite.children(TESTCASE) {
            test_count = test_count.saturating_add(count_attribute(case, "assertions")?);
            if case.has_child(FAILURE) {
                fail_count += 1;
            }
        }
    }

    Ok((test_count, fail_count))
}

fn count_aggregates(root: &Element) -> Result<(i64, i64), GateError> {
    Ok((
        count_attribute(root, "tests")?,
        count_attribute(root, "failures")?,
    ))
}

fn count_attribute(element: &Element, attribute: &str) -> Result<i64, GateError> {
    let raw = element.attribute(attribute);
    raw.and_then(parse_count)
        .ok_or_else(|| GateError::InvalidCount {
            element: element.name().to_string(),
            attribute: attribute.to_string(),
            value: raw.map(str::to_string),
        })
}

/// Reads the leading integer of `text`.
///
/// Surrounding whitespace and one sign are accepted and trailing junk is
/// ignored, so `" 12abc"` reads as 12. Returns `None` when no digit leads.
/// Values beyond `i64` saturate.
pub fn parse_count(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

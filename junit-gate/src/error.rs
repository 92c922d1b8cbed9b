//! Error type shared by the parser, evaluator, settings loader and runner.

use std::path::PathBuf;

/// Every way a gate run can terminate without producing a verdict.
///
/// No variant is recoverable: the caller reports it and stops.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The report content is empty: nothing to analyze.
    #[error("no test results found: {message}")]
    MissingReport {
        /// What was missing.
        message: String,
    },

    /// The report parsed but holds no `testsuites > testsuite` data.
    #[error("no test results found: {message}")]
    NoTestSuites {
        /// Which part of the expected structure was absent.
        message: String,
    },

    /// A count attribute was absent or carried no leading integer.
    #[error("invalid count in <{element}> attribute `{attribute}`: {}", describe_value(.value))]
    InvalidCount {
        /// Element that owns the attribute.
        element: String,
        /// Attribute name, without the `@_` prefix.
        attribute: String,
        /// Raw attribute text, or `None` when the attribute was absent.
        value: Option<String>,
    },

    /// The bytes are not well-formed UTF-8 XML.
    #[error("malformed report: {message}")]
    Malformed {
        /// Reader diagnostic.
        message: String,
    },

    /// A threshold or settings file value is unusable.
    #[error("invalid gate configuration: {message}")]
    InvalidConfig {
        /// What was rejected.
        message: String,
    },

    /// The report or settings file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl GateError {
    pub(crate) fn missing_report(message: impl Into<String>) -> Self {
        Self::MissingReport {
            message: message.into(),
        }
    }

    pub(crate) fn no_test_suites(message: impl Into<String>) -> Self {
        Self::NoTestSuites {
            message: message.into(),
        }
    }

    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

fn describe_value(value: &Option<String>) -> String {
    match value {
        Some(text) => format!("{:?} is not an integer", text),
        None => "attribute is missing".to_string(),
    }
}

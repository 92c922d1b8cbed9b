//! Gate thresholds and report location settings.
//!
//! [`GateConfig`] is the validated, immutable input to the evaluator.
//! [`GateSettings`] is the loosely-typed form read from a TOML file or
//! assembled from CLI flags before validation.

use std::num::NonZeroU64;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::GateError;
use crate::runner::ReportLocation;

/// Default report file name, relative to the project path.
pub const DEFAULT_RESULT_OUTPUT_FILE: &str = "test-results.xml";

/// Thresholds a report must meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateConfig {
    assert_check: bool,
    minimum_pass: f64,
    max_fails: Option<NonZeroU64>,
}

impl GateConfig {
    /// Builds a config.
    ///
    /// `max_fails` of `Some(0)` disables the failure-count gate, the same as
    /// `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidConfig`] if `minimum_pass` is NaN or
    /// outside `[0, 1]`.
    pub fn new(
        assert_check: bool,
        minimum_pass: f64,
        max_fails: Option<u64>,
    ) -> Result<Self, GateError> {
        if !(0.0..=1.0).contains(&minimum_pass) {
            return Err(GateError::invalid_config(format!(
                "minimum pass rate must be within [0, 1], got {minimum_pass}"
            )));
        }
        Ok(Self {
            assert_check,
            minimum_pass,
            max_fails: max_fails.and_then(NonZeroU64::new),
        })
    }

    /// Count assertions per test case instead of reading root aggregates.
    pub fn assert_check(&self) -> bool {
        self.assert_check
    }

    /// Lowest acceptable pass rate.
    pub fn minimum_pass(&self) -> f64 {
        self.minimum_pass
    }

    /// Highest acceptable failure count, if that gate is enabled.
    pub fn max_fails(&self) -> Option<NonZeroU64> {
        self.max_fails
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            assert_check: false,
            minimum_pass: 1.0,
            max_fails: None,
        }
    }
}

/// Everything a gate run needs, as written in a settings file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateSettings {
    /// Directory the report path is relative to.
    pub project_path: PathBuf,
    /// Report file name inside `project_path`.
    pub result_output_file: PathBuf,
    /// Count assertions per test case.
    pub assert_check: bool,
    /// Lowest acceptable pass rate in `[0, 1]`.
    pub minimum_pass: f64,
    /// Highest acceptable failure count; absent or `0` disables the gate.
    pub max_fails: Option<u64>,
}

impl Default for GateSettings {
    fn default() -> Self {
        Self {
            project_path: PathBuf::from("."),
            result_output_file: PathBuf::from(DEFAULT_RESULT_OUTPUT_FILE),
            assert_check: false,
            minimum_pass: 1.0,
            max_fails: None,
        }
    }
}

impl GateSettings {
    /// Parses settings from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidConfig`] on TOML syntax errors, unknown
    /// keys, or values of the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self, GateError> {
        toml::from_str(source).map_err(|e| GateError::invalid_config(e.to_string()))
    }

    /// Reads and parses a TOML settings file.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Io`] if the file cannot be read, or any error
    /// from [`GateSettings::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, GateError> {
        let source = std::fs::read_to_string(path).map_err(|source| GateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validates the threshold fields.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidConfig`] if `minimum_pass` is out of range.
    pub fn gate_config(&self) -> Result<GateConfig, GateError> {
        GateConfig::new(self.assert_check, self.minimum_pass, self.max_fails)
    }

    /// Where the report lives.
    pub fn location(&self) -> ReportLocation {
        ReportLocation::new(&self.project_path, &self.result_output_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_pass_bounds_are_inclusive() {
        assert!(GateConfig::new(false, 0.0, None).is_ok());
        assert!(GateConfig::new(false, 1.0, None).is_ok());
    }

    #[test]
    fn out_of_range_minimum_pass_is_rejected() {
        for bad in [-0.01, 1.5, f64::NAN, f64::INFINITY] {
            let err = GateConfig::new(false, bad, None).unwrap_err();
            assert!(matches!(err, GateError::InvalidConfig { .. }), "{bad}: {err:?}");
        }
    }

    #[test]
    fn zero_max_fails_disables_the_gate() {
        let config = GateConfig::new(false, 0.5, Some(0)).unwrap();
        assert_eq!(config.max_fails(), None);

        let config = GateConfig::new(false, 0.5, Some(3)).unwrap();
        assert_eq!(config.max_fails().map(NonZeroU64::get), Some(3));
    }

    #[test]
    fn empty_settings_file_uses_defaults() {
        let settings = GateSettings::from_toml_str("").unwrap();
        assert_eq!(settings, GateSettings::default());
        assert_eq!(settings.gate_config().unwrap(), GateConfig::default());
        assert_eq!(
            settings.location().resolve(),
            Path::new(".").join(DEFAULT_RESULT_OUTPUT_FILE)
        );
    }

    #[test]
    fn settings_file_fields_reach_the_gate_config() {
        let settings = GateSettings::from_toml_str(
            r#"
project_path = "build"
result_output_file = "reports/junit.xml"
assert_check = true
minimum_pass = 0.9
max_fails = 3
"#,
        )
        .unwrap();

        let config = settings.gate_config().unwrap();
        assert!(config.assert_check());
        assert_eq!(config.minimum_pass(), 0.9);
        assert_eq!(config.max_fails().map(NonZeroU64::get), Some(3));
        assert_eq!(
            settings.location().resolve(),
            Path::new("build").join("reports/junit.xml")
        );
    }

    #[test]
    fn settings_file_with_bad_threshold_fails_validation() {
        let settings = GateSettings::from_toml_str("minimum_pass = 2.0").unwrap();
        assert!(matches!(
            settings.gate_config(),
            Err(GateError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = GateSettings::from_toml_str("minimum_passes = 0.9").unwrap_err();
        assert!(matches!(err, GateError::InvalidConfig { .. }), "{err:?}");
    }

    #[test]
    fn missing_settings_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GateSettings::load(&dir.path().join("gate.toml")).unwrap_err();
        assert!(matches!(err, GateError::Io { .. }), "{err:?}");
    }
}

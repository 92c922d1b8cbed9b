//! Reports that fail structural checks.

/// A `<testsuites>` root with aggregate counts but no suites.
pub const NO_TESTSUITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="all" tests="0" failures="0"></testsuites>
"#;

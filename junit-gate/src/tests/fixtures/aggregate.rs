//! Reports whose verdict comes from the root `tests`/`failures` attributes.

/// 100 tests, 5 failures. Suites are deliberately sparse: aggregate counting
/// never looks at them.
pub const AGGREGATE_MOSTLY_PASSING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="all" tests="100" failures="5" errors="0" time="4.210">
  <testsuite name="api" tests="60" failures="3">
    <testcase name="creates_user" classname="api" assertions="2"/>
  </testsuite>
  <testsuite name="db" tests="40" failures="2"/>
</testsuites>
"#;

/// 100 tests, 20 failures.
pub const AGGREGATE_MOSTLY_FAILING: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="all" tests="100" failures="20">
  <testsuite name="api" tests="100" failures="20"/>
</testsuites>
"#;

/// A run that executed nothing.
pub const AGGREGATE_ZERO_TESTS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites name="all" tests="0" failures="0">
  <testsuite name="skipped" tests="0" failures="0"></testsuite>
</testsuites>
"#;

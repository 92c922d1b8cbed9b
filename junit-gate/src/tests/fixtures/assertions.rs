//! Reports counted per assertion (`assertions` attribute on each case).

/// One suite, two cases with 3 and 2 assertions, the second one failing.
pub const SINGLE_SUITE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="2" failures="1">
  <testsuite name="Math" tests="2" assertions="5" failures="1">
    <testcase name="adds" classname="Math" assertions="3" time="0.001"/>
    <testcase name="compares" classname="Math" assertions="2" time="0.002">
      <failure message="expected 4 &lt; 3" type="AssertionError"><![CDATA[at math.rs:12 & beyond]]></failure>
    </testcase>
  </testsuite>
</testsuites>
"#;

/// An empty suite, then the suite from [`SINGLE_SUITE`], then a passing one.
pub const MULTI_SUITE_WITH_EMPTY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<testsuites tests="5" failures="2">
  <testsuite name="Empty"></testsuite>
  <testsuite name="Math" tests="2" failures="1">
    <testcase name="adds" assertions="3"/>
    <testcase name="compares" assertions="2">
      <failure message="expected 4 &lt; 3"/>
    </testcase>
  </testsuite>
  <testsuite name="Strings" tests="3" failures="1">
    <testcase name="trims" assertions="4"/>
    <testcase name="splits" assertions="1"/>
    <testcase name="joins" assertions="2">
      <failure>joined with the wrong separator</failure>
    </testcase>
  </testsuite>
</testsuites>
"#;

/// A case whose assertion count is not a number.
pub const NON_NUMERIC_ASSERTIONS: &str = r#"<testsuites tests="1" failures="0">
  <testsuite name="Broken">
    <testcase name="weird" assertions="many"/>
  </testsuite>
</testsuites>
"#;

//! JUnit XML report fixtures.
//!
//! Each constant holds a complete report in the shape a test runner writes,
//! covering one counting mode or one structural edge case.

mod aggregate;
mod assertions;
mod structure;

pub use aggregate::{AGGREGATE_MOSTLY_FAILING, AGGREGATE_MOSTLY_PASSING, AGGREGATE_ZERO_TESTS};
pub use assertions::{MULTI_SUITE_WITH_EMPTY, NON_NUMERIC_ASSERTIONS, SINGLE_SUITE};
pub use structure::NO_TESTSUITE;

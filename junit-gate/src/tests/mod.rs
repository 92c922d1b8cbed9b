//! Shared test data for the parser, evaluator and runner.

pub mod fixtures;

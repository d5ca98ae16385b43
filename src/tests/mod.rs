//! Topical test suites

mod drift_tests;
mod sequence_tests;

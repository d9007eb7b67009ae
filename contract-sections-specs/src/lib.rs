//! Fixture-driven regression harness for contract-sections.
//!
//! Test cases live in TOML fixture files: the sections a generator returned,
//! the contract type, optional exhibits, and the expected ordered output.
//!
//! ## Modules
//!
//! - [`fixture`] - Fixture types and TOML parsing
//! - [`loader`] - Fixture file loading
//! - [`runner`] - Runs fixtures through the orderer and compares results
//! - [`errors`] - Error types for the harness
//! - [`formatter`] - Failure and summary formatting
//! - [`failures`] - Expected failures tracking via TOML

pub mod errors;
pub mod failures;
pub mod fixture;
pub mod formatter;
pub mod loader;
pub mod runner;

// Re-exports for convenient access to core types
pub use errors::{SpecError, SpecResult};
pub use failures::{
    ExpectedFailures, FailureEntry, FailureState, HarnessResult, EXPECTED_FAILURES_FILE,
};
pub use fixture::{parse_fixture, Expectation, OrderingFixture};
pub use formatter::{format_expected_failure, format_failure, format_summary};
pub use loader::{load_all_fixtures, load_fixture};
pub use runner::{
    check_order_invariants, run_directory, run_fixture, FieldMismatch, FixtureResult, HarnessRun,
};

#[cfg(test)]
mod tests;

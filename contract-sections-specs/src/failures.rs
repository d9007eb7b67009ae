//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::{SpecError, SpecResult};

/// File name of the expected-failures list inside a fixture directory.
pub const EXPECTED_FAILURES_FILE: &str = "expected-failures.toml";

/// Loaded expected failures configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Known failures (won't fix soon).
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Pending failures (awaiting fix).
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// A single expected failure entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Fixture file name, relative to the fixture directory.
    pub fixture: String,
    /// Checked field: "titles", "unmatched", "missing" or "invariants".
    pub field: String,
    /// Human-readable reason.
    #[serde(default)]
    pub reason: Option<String>,
    /// Date added (YYYY-MM-DD).
    #[serde(default)]
    pub added: Option<String>,
}

/// Failure lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Known limitation, won't fix soon.
    Known,
    /// Awaiting fix, not blocking.
    Pending,
    /// Expected to pass - failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Load from a TOML file. A missing file means no expected failures.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::from_toml(&content, &e))
    }

    /// Check if a failure is expected.
    pub fn is_expected(&self, fixture: &str, field: &str) -> FailureState {
        if self.known.iter().any(|e| e.matches(fixture, field)) {
            return FailureState::Known;
        }
        if self.pending.iter().any(|e| e.matches(fixture, field)) {
            return FailureState::Pending;
        }
        FailureState::Regression
    }

    /// Get all expected failure fixtures.
    pub fn all_fixtures(&self) -> Vec<&str> {
        let mut fixtures: Vec<_> = self
            .known
            .iter()
            .chain(self.pending.iter())
            .map(|e| e.fixture.as_str())
            .collect();
        fixtures.sort();
        fixtures.dedup();
        fixtures
    }

    /// Count total expected failures.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// Get entry for a specific failure (if expected).
    pub fn get_entry(&self, fixture: &str, field: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|e| e.matches(fixture, field))
    }
}

impl FailureEntry {
    fn matches(&self, fixture: &str, field: &str) -> bool {
        self.fixture == fixture && self.field == field
    }
}

/// Result of running the harness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessResult {
    /// Total checks run.
    pub total: usize,
    /// Passed checks.
    pub passed: usize,
    /// Expected failures (known + pending).
    pub expected_failures: usize,
    /// Regressions (unexpected failures).
    pub regressions: usize,
}

impl HarnessResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the exit code (0 = pass, 1 = regressions).
    pub fn exit_code(&self) -> i32 {
        if self.regressions > 0 {
            1
        } else {
            0
        }
    }

    /// Check if all checks passed (no regressions).
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    /// Record a passed check.
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Record a failed check with its state.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}

//! Runs fixtures through the section orderer and checks the results.

use std::collections::HashSet;
use std::path::Path;

use contract_sections::{
    merge_exhibits, BlueprintRegistry, OrderedSection, OrderingOutcome, SectionOrderer,
};

use crate::failures::{ExpectedFailures, FailureState, HarnessResult, EXPECTED_FAILURES_FILE};
use crate::formatter::{format_expected_failure, format_failure};
use crate::{load_all_fixtures, OrderingFixture, SpecResult};

/// A single field that did not match its expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMismatch {
    /// "titles", "unmatched", "missing" or "invariants"
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FieldMismatch {
    fn new(field: &str, expected: String, actual: String) -> Self {
        Self {
            field: field.to_string(),
            expected,
            actual,
        }
    }
}

/// Result of running one fixture.
#[derive(Debug, Clone)]
pub struct FixtureResult {
    pub outcome: OrderingOutcome,
    pub mismatches: Vec<FieldMismatch>,
}

impl FixtureResult {
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Fields that were checked, pass or fail.
    pub fn checked_fields(fixture: &OrderingFixture) -> Vec<&'static str> {
        let mut fields = vec!["invariants", "titles"];
        if fixture.expect.unmatched.is_some() {
            fields.push("unmatched");
        }
        if fixture.expect.missing.is_some() {
            fields.push("missing");
        }
        fields
    }
}

/// Run a fixture: merge its exhibits, order against `registry`, compare.
pub fn run_fixture(fixture: &OrderingFixture, registry: &BlueprintRegistry) -> FixtureResult {
    let merged = merge_exhibits(fixture.sections.clone(), Some(fixture.exhibits.as_slice()));
    let outcome = SectionOrderer::new(registry).order_with_report(merged, fixture.contract_type);

    let mut mismatches = check_order_invariants(&outcome.sections, fixture.input_len());

    let titles: Vec<String> = outcome.sections.iter().map(|s| s.title.clone()).collect();
    if titles != fixture.expect.titles {
        mismatches.push(FieldMismatch::new(
            "titles",
            format!("{:?}", fixture.expect.titles),
            format!("{:?}", titles),
        ));
    }

    if let Some(expected) = &fixture.expect.unmatched {
        if expected != &outcome.report.unmatched {
            mismatches.push(FieldMismatch::new(
                "unmatched",
                format!("{:?}", expected),
                format!("{:?}", outcome.report.unmatched),
            ));
        }
    }

    if let Some(expected) = &fixture.expect.missing {
        if expected != &outcome.report.missing {
            mismatches.push(FieldMismatch::new(
                "missing",
                format!("{:?}", expected),
                format!("{:?}", outcome.report.missing),
            ));
        }
    }

    FixtureResult {
        outcome,
        mismatches,
    }
}

/// Check that `order` is exactly `0..expected_len` and that titles are unique.
pub fn check_order_invariants(
    sections: &[OrderedSection],
    expected_len: usize,
) -> Vec<FieldMismatch> {
    let mut mismatches = Vec::new();

    let orders: Vec<usize> = sections.iter().map(|s| s.order).collect();
    let expected: Vec<usize> = (0..expected_len).collect();
    if orders != expected {
        mismatches.push(FieldMismatch::new(
            "invariants",
            format!("order {:?}", expected),
            format!("order {:?}", orders),
        ));
    }

    let mut seen = HashSet::new();
    let duplicates: Vec<&str> = sections
        .iter()
        .map(|s| s.title.as_str())
        .filter(|title| !seen.insert(*title))
        .collect();
    if !duplicates.is_empty() {
        mismatches.push(FieldMismatch::new(
            "invariants",
            "unique titles".to_string(),
            format!("duplicates {:?}", duplicates),
        ));
    }

    mismatches
}

/// Outcome of running a whole fixture directory.
#[derive(Debug, Clone, Default)]
pub struct HarnessRun {
    pub result: HarnessResult,
    /// Formatted report for every regression
    pub regressions: Vec<String>,
    /// One line per failure covered by the expected-failures file
    pub expected: Vec<String>,
    /// Fixtures named in the expected-failures file that no longer exist
    pub stale: Vec<String>,
}

/// Run every fixture under `dir`, consulting `dir/expected-failures.toml`.
pub fn run_directory(dir: &Path, registry: &BlueprintRegistry) -> SpecResult<HarnessRun> {
    let expected = ExpectedFailures::load(&dir.join(EXPECTED_FAILURES_FILE))?;
    let fixtures = load_all_fixtures(dir)?;
    let mut run = HarnessRun::default();

    for (name, fixture) in &fixtures {
        let result = run_fixture(fixture, registry);

        for field in FixtureResult::checked_fields(fixture) {
            let failed: Vec<&FieldMismatch> =
                result.mismatches.iter().filter(|m| m.field == field).collect();
            if failed.is_empty() {
                run.result.record_pass();
                continue;
            }

            let state = expected.is_expected(name, field);
            run.result.record_failure(state);
            if state == FailureState::Regression {
                run.regressions.push(format_failure(name, fixture, &failed));
            } else if let Some(entry) = expected.get_entry(name, field) {
                let line = format_expected_failure(entry, state);
                tracing::debug!("{}", line);
                run.expected.push(line);
            }
        }
    }

    for listed in expected.all_fixtures() {
        if !fixtures.iter().any(|(name, _)| name == listed) {
            tracing::warn!("{} lists missing fixture {}", EXPECTED_FAILURES_FILE, listed);
            run.stale.push(listed.to_string());
        }
    }

    tracing::debug!(
        "ran {} fixtures: {} checks, {} regressions",
        fixtures.len(),
        run.result.total,
        run.result.regressions
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;
    use contract_sections::ContractType;

    fn section(title: &str, order: usize) -> OrderedSection {
        OrderedSection {
            title: title.to_string(),
            body: String::new(),
            order,
        }
    }

    #[test]
    fn test_invariants_hold() {
        let sections = vec![section("A", 0), section("B", 1)];
        assert!(check_order_invariants(&sections, 2).is_empty());
    }

    #[test]
    fn test_invariants_detect_gap_and_duplicate() {
        let sections = vec![section("A", 0), section("A", 2)];
        let mismatches = check_order_invariants(&sections, 2);
        assert_eq!(mismatches.len(), 2);
        assert!(mismatches.iter().all(|m| m.field == "invariants"));
        assert_eq!(mismatches[1].actual, "duplicates [\"A\"]");
    }

    #[test]
    fn test_run_fixture_reports_title_mismatch() {
        let fixture = parse_fixture(
            r#"
contract_type = "GOLF_OUTING"

[[sections]]
title = "conclusion"

[[sections]]
title = "Parties & Event Overview"

[expect]
titles = ["Conclusion", "Parties & Event Overview"]
unmatched = ["Conclusion"]
"#,
        )
        .unwrap();
        assert_eq!(fixture.contract_type, ContractType::GolfOuting);

        let result = run_fixture(&fixture, &BlueprintRegistry::builtin());
        assert!(!result.passed());
        assert_eq!(result.mismatches.len(), 1);
        assert_eq!(result.mismatches[0].field, "titles");
        assert_eq!(
            result.mismatches[0].actual,
            "[\"Parties & Event Overview\", \"Conclusion\"]"
        );
    }

    #[test]
    fn test_run_directory_with_expected_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("wrong.toml"),
            "contract_type = \"OTHER\"\n\n[[sections]]\ntitle = \"notes\"\n\n[expect]\ntitles = [\"Nope\"]\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("right.toml"),
            "contract_type = \"OTHER\"\n\n[[sections]]\ntitle = \"notes\"\n\n[expect]\ntitles = [\"Notes\"]\n",
        )
        .unwrap();

        let run = run_directory(dir.path(), &BlueprintRegistry::builtin()).unwrap();
        assert_eq!(run.result.regressions, 1);
        assert_eq!(run.regressions.len(), 1);

        std::fs::write(
            dir.path().join(EXPECTED_FAILURES_FILE),
            "[[known]]\nfixture = \"wrong.toml\"\nfield = \"titles\"\nreason = \"casing TBD\"\n\n\
             [[pending]]\nfixture = \"renamed.toml\"\nfield = \"titles\"\n",
        )
        .unwrap();

        let run = run_directory(dir.path(), &BlueprintRegistry::builtin()).unwrap();
        assert!(run.result.success());
        assert_eq!(run.result.total, 4);
        assert_eq!(run.result.passed, 3);
        assert_eq!(run.result.expected_failures, 1);
        assert_eq!(
            run.expected,
            vec!["XFAIL (Known): wrong.toml [titles] - casing TBD".to_string()]
        );
        assert_eq!(run.stale, vec!["renamed.toml".to_string()]);
    }
}

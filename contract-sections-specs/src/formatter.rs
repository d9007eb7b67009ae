//! Plain-text diagnostics for failed fixtures.

use std::fmt::Write;

use crate::failures::{FailureEntry, FailureState, HarnessResult};
use crate::runner::FieldMismatch;
use crate::OrderingFixture;

/// Format the failed fields of one fixture.
pub fn format_failure(
    fixture_name: &str,
    fixture: &OrderingFixture,
    mismatches: &[&FieldMismatch],
) -> String {
    let mut output = String::new();

    writeln!(output, "\nFAIL: {}", fixture_name).unwrap();
    writeln!(
        output,
        "  {} ({}, {} sections, {} exhibits)",
        fixture.display_name(),
        fixture.contract_type,
        fixture.sections.len(),
        fixture.exhibits.len()
    )
    .unwrap();
    writeln!(output).unwrap();

    for mismatch in mismatches {
        writeln!(output, "  \u{2717} {}", mismatch.field).unwrap();
        writeln!(output, "      expected: {}", mismatch.expected).unwrap();
        writeln!(output, "      found:    {}", mismatch.actual).unwrap();
    }

    output
}

/// One line for a failure listed in the expected-failures file.
pub fn format_expected_failure(entry: &FailureEntry, state: FailureState) -> String {
    let mut output = format!("XFAIL ({:?}): {} [{}]", state, entry.fixture, entry.field);
    if let Some(reason) = &entry.reason {
        write!(output, " - {}", reason).unwrap();
    }
    if let Some(added) = &entry.added {
        write!(output, " (since {})", added).unwrap();
    }
    output
}

/// One-line summary of a harness run.
pub fn format_summary(result: &HarnessResult) -> String {
    let status = if result.success() { "ok" } else { "FAILED" };
    format!(
        "{}: {} checks, {} passed, {} expected failures, {} regressions",
        status, result.total, result.passed, result.expected_failures, result.regressions
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    #[test]
    fn test_format_failure() {
        let fixture = parse_fixture(
            r#"
title = "Wedding order"
contract_type = "WEDDING"

[[sections]]
title = "Signatures"

[expect]
titles = []
"#,
        )
        .unwrap();
        let mismatch = FieldMismatch {
            field: "titles".to_string(),
            expected: "[]".to_string(),
            actual: "[\"Signatures\"]".to_string(),
        };

        let output = format_failure("wedding.toml", &fixture, &[&mismatch]);
        insta::assert_snapshot!(output.trim_start(), @r###"
        FAIL: wedding.toml
          Wedding order (WEDDING, 1 sections, 0 exhibits)

          ✗ titles
              expected: []
              found:    ["Signatures"]
        "###);
    }

    #[test]
    fn test_format_expected_failure() {
        let entry = FailureEntry {
            fixture: "wedding.toml".to_string(),
            field: "unmatched".to_string(),
            reason: Some("blueprint rename pending".to_string()),
            added: Some("2026-03-02".to_string()),
        };
        assert_eq!(
            format_expected_failure(&entry, FailureState::Known),
            "XFAIL (Known): wedding.toml [unmatched] - blueprint rename pending (since 2026-03-02)"
        );

        let bare = FailureEntry {
            reason: None,
            added: None,
            ..entry
        };
        assert_eq!(
            format_expected_failure(&bare, FailureState::Pending),
            "XFAIL (Pending): wedding.toml [unmatched]"
        );
    }

    #[test]
    fn test_format_summary() {
        let mut result = HarnessResult::new();
        result.record_pass();
        result.record_pass();
        assert_eq!(
            format_summary(&result),
            "ok: 2 checks, 2 passed, 0 expected failures, 0 regressions"
        );
    }
}
